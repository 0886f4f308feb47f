//! Hamburger toggle for the mobile navigation menu.

use web_sys::{Document, Element, Node};

use super::nav::NavConfig;
use super::{by_id, document, event_element, listen, window};
use crate::error::SiteError;

const HAMBURGER: &str = "hamburger";
const MENU: &str = "nav-menu";

/// Closes the mobile menu if the page has one.
pub(crate) fn close(document: &Document) {
	for id in [HAMBURGER, MENU] {
		if let Some(el) = document.get_element_by_id(id) {
			let _ = el.class_list().remove_1("active");
		}
	}
}

pub fn install(config: &NavConfig) -> Result<(), SiteError> {
	let document = document()?;
	let window = window()?;
	let hamburger: Element = by_id(&document, HAMBURGER)?;
	let menu: Element = by_id(&document, MENU)?;

	let (toggle_hamburger, toggle_menu) = (hamburger.clone(), menu.clone());
	listen(&hamburger, "click", move |ev| {
		ev.stop_propagation();
		let _ = toggle_hamburger.class_list().toggle("active");
		let _ = toggle_menu.class_list().toggle("active");
	})?;

	let outside_document = document.clone();
	listen(&document, "click", move |ev| {
		let target = event_element(&ev);
		let target: Option<&Node> = target.as_ref().map(|el| el.as_ref());
		if !hamburger.contains(target) && !menu.contains(target) {
			close(&outside_document);
		}
	})?;

	let breakpoint = config.mobile_breakpoint;
	let resize_window = window.clone();
	listen(&window, "resize", move |_| {
		let width = resize_window
			.inner_width()
			.ok()
			.and_then(|w| w.as_f64())
			.unwrap_or(0.0);
		if width > breakpoint {
			close(&document);
		}
	})?;
	Ok(())
}
