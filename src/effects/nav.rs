//! Navbar backdrop on scroll and active-section highlighting.

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit,
};

use super::{by_id, document, listen, query_all, set_styles, window};
use crate::error::SiteError;

/// Navigation settings shared by the navbar, smooth scroll and mobile menu.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct NavConfig {
	/// Scroll offset past which the navbar turns opaque.
	pub scrolled_after: f64,
	pub scrolled_background: String,
	pub top_background: String,
	/// Height of the fixed navbar, kept clear above scroll targets.
	pub navbar_height: f64,
	/// Viewport width above which the mobile menu is forced closed.
	pub mobile_breakpoint: f64,
	/// Observer margin selecting the band of the viewport that marks a section current.
	pub section_root_margin: String,
}

impl Default for NavConfig {
	fn default() -> Self {
		Self {
			scrolled_after: 100.0,
			scrolled_background: "rgba(0, 5, 15, 0.95)".to_string(),
			top_background: "rgba(0, 5, 15, 0.9)".to_string(),
			navbar_height: 70.0,
			mobile_breakpoint: 768.0,
			section_root_margin: "-20% 0px -80% 0px".to_string(),
		}
	}
}

impl NavConfig {
	pub fn navbar_background(&self, scroll_y: f64) -> &str {
		if scroll_y > self.scrolled_after {
			&self.scrolled_background
		} else {
			&self.top_background
		}
	}
}

/// Selector for the nav link pointing at section `id`.
pub fn link_selector(id: &str) -> String {
	format!(".nav-link[data-section=\"{}\"]", id.replace('"', "\\\""))
}

fn mark_active(document: &Document, id: &str) {
	if let Ok(links) = query_all::<Element>(document, ".nav-link") {
		for link in links {
			let _ = link.class_list().remove_1("active");
		}
	}
	if let Ok(Some(link)) = document.query_selector(&link_selector(id)) {
		let _ = link.class_list().add_1("active");
	}
}

pub fn install(config: &NavConfig) -> Result<(), SiteError> {
	let document = document()?;
	let window = window()?;
	let navbar: HtmlElement = by_id(&document, "navbar")?;

	let scroll_config = config.clone();
	let scroll_window = window.clone();
	listen(&window, "scroll", move |_| {
		let y = scroll_window.page_y_offset().unwrap_or(0.0);
		set_styles(&navbar, &[("background", scroll_config.navbar_background(y))]);
	})?;

	let observer_document = document.clone();
	let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, _: IntersectionObserver| {
			for entry in entries.iter() {
				let entry: IntersectionObserverEntry = entry.unchecked_into();
				if entry.is_intersecting() {
					mark_active(&observer_document, &entry.target().id());
				}
			}
		},
	);
	let options = IntersectionObserverInit::new();
	options.set_root_margin(&config.section_root_margin);
	let observer =
		IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
	on_intersect.forget();

	for section in query_all::<Element>(&document, "section[id]")? {
		observer.observe(&section);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn navbar_turns_opaque_past_threshold() {
		let config = NavConfig::default();
		assert_eq!(config.navbar_background(0.0), "rgba(0, 5, 15, 0.9)");
		assert_eq!(config.navbar_background(100.0), "rgba(0, 5, 15, 0.9)");
		assert_eq!(config.navbar_background(100.5), "rgba(0, 5, 15, 0.95)");
	}

	#[test]
	fn link_selector_quotes_section_id() {
		assert_eq!(link_selector("about"), ".nav-link[data-section=\"about\"]");
		assert_eq!(link_selector("a\"b"), ".nav-link[data-section=\"a\\\"b\"]");
	}
}
