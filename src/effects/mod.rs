//! Page effects wired onto the existing site markup.
//!
//! Each effect finds its elements, attaches listeners for the lifetime of the
//! page and returns. Effects are independent: one failing to install (most
//! often because the page lacks its markup) leaves the others running.

use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::config::SiteConfig;
use crate::error::SiteError;

pub mod contact;
pub mod links;
pub mod menu;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod tilt;
pub mod trail;
pub mod typing;

/// Installs every page effect, logging the ones that could not be set up.
pub fn install(config: &SiteConfig) {
	let results = [
		("card tilt", tilt::install(&config.tilt)),
		("cursor trail", trail::install()),
		("typing", typing::install(&config.typing)),
		("scroll reveal", reveal::install(&config.reveal)),
		("navigation", nav::install(&config.nav)),
		("smooth scroll", scroll::install(&config.nav)),
		("contact form", contact::install(&config.contact)),
		("mobile menu", menu::install(&config.nav)),
		("external links", links::install()),
	];

	let mut installed = 0;
	for (name, result) in results {
		match result {
			Ok(()) => installed += 1,
			Err(e) if e.is_missing_element() => debug!("folio-fx: {} skipped: {}", name, e),
			Err(e) => warn!("folio-fx: {} failed: {}", name, e),
		}
	}
	info!("folio-fx: {} page effects installed", installed);
}

pub(crate) fn window() -> Result<Window, SiteError> {
	web_sys::window().ok_or(SiteError::NoWindow)
}

pub(crate) fn document() -> Result<Document, SiteError> {
	window()?.document().ok_or(SiteError::NoDocument)
}

/// Looks up a required element by id.
pub(crate) fn by_id<T: JsCast>(document: &Document, id: &'static str) -> Result<T, SiteError> {
	document
		.get_element_by_id(id)
		.ok_or(SiteError::MissingElement(id))?
		.dyn_into()
		.map_err(|_| SiteError::MissingElement(id))
}

/// All elements matching `selector` that are of type `T`.
pub(crate) fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, SiteError> {
	let nodes = document.query_selector_all(selector)?;
	Ok((0..nodes.length())
		.filter_map(|i| nodes.get(i))
		.filter_map(|node| node.dyn_into().ok())
		.collect())
}

/// Attaches `handler` to `target` for the rest of the page's life.
pub(crate) fn listen(
	target: &EventTarget,
	event: &str,
	handler: impl FnMut(Event) + 'static,
) -> Result<(), SiteError> {
	let closure = Closure::<dyn FnMut(Event)>::new(handler);
	target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
	closure.forget();
	Ok(())
}

/// Sets inline style properties, ignoring values the browser rejects.
pub(crate) fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) {
	let style = element.style();
	for (property, value) in styles {
		let _ = style.set_property(property, value);
	}
}

/// The element an event was dispatched to, if it is an element.
pub(crate) fn event_element(event: &Event) -> Option<Element> {
	event.target()?.dyn_into().ok()
}
