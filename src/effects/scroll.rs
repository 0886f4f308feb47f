//! Smooth scrolling for in-page navigation links.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use super::nav::NavConfig;
use super::{document, event_element, listen, menu};
use crate::error::SiteError;

const LINK_SELECTOR: &str = "a.nav-link, a.cta-btn";

/// Section a link points at: its `data-section`, else the fragment of its `href`.
pub fn target_id(data_section: Option<&str>, href: Option<&str>) -> Option<String> {
	data_section
		.filter(|id| !id.is_empty())
		.or_else(|| href.and_then(|h| h.split_once('#')).map(|(_, id)| id))
		.filter(|id| !id.is_empty())
		.map(str::to_string)
}

/// Scroll position that puts a section's top just below the fixed navbar.
pub fn scroll_top(offset_top: f64, navbar_height: f64) -> f64 {
	(offset_top - navbar_height).max(0.0)
}

pub fn install(config: &NavConfig) -> Result<(), SiteError> {
	let document = document()?;
	let navbar_height = config.navbar_height;

	let click_document = document.clone();
	listen(&document, "click", move |ev| {
		let Some(link) = event_element(&ev).and_then(|el| el.closest(LINK_SELECTOR).ok().flatten())
		else {
			return;
		};
		ev.prevent_default();

		let Some(id) = target_id(
			link.get_attribute("data-section").as_deref(),
			link.get_attribute("href").as_deref(),
		) else {
			return;
		};
		let Some(section) = click_document
			.get_element_by_id(&id)
			.and_then(|el| el.dyn_into::<HtmlElement>().ok())
		else {
			return;
		};

		let options = ScrollToOptions::new();
		options.set_top(scroll_top(section.offset_top() as f64, navbar_height));
		options.set_behavior(ScrollBehavior::Smooth);
		if let Some(window) = web_sys::window() {
			window.scroll_to_with_scroll_to_options(&options);
		}
		menu::close(&click_document);
	})
}
