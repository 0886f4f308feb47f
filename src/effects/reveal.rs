//! Fade-in of cards as they scroll into view.

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{document, query_all, set_styles};
use crate::error::SiteError;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
	pub selector: String,
	pub threshold: f64,
	pub root_margin: String,
	/// Initial downward offset in px.
	pub offset: f64,
	/// Transition duration in seconds.
	pub duration: f64,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			selector: ".about-card, .skill-card".to_string(),
			threshold: 0.1,
			root_margin: "0px 0px -50px 0px".to_string(),
			offset: 30.0,
			duration: 0.6,
		}
	}
}

impl RevealConfig {
	fn hidden_transform(&self) -> String {
		format!("translateY({}px)", self.offset)
	}

	fn transition(&self) -> String {
		format!("all {}s cubic-bezier(0.4, 0, 0.2, 1)", self.duration)
	}
}

pub fn install(config: &RevealConfig) -> Result<(), SiteError> {
	let elements: Vec<HtmlElement> = query_all(&document()?, &config.selector)?;
	if elements.is_empty() {
		return Err(SiteError::MissingElement("reveal targets"));
	}

	let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		|entries: js_sys::Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let entry: IntersectionObserverEntry = entry.unchecked_into();
				if !entry.is_intersecting() {
					continue;
				}
				let target = entry.target();
				if let Some(element) = target.dyn_ref::<HtmlElement>() {
					set_styles(element, &[("opacity", "1"), ("transform", "translateY(0)")]);
				}
				// Reveal once.
				observer.unobserve(&target);
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(config.threshold));
	options.set_root_margin(&config.root_margin);
	let observer =
		IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
	on_intersect.forget();

	let (hidden, transition) = (config.hidden_transform(), config.transition());
	for element in &elements {
		set_styles(
			element,
			&[
				("opacity", "0"),
				("transform", hidden.as_str()),
				("transition", transition.as_str()),
			],
		);
		observer.observe(element);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn styles_follow_config() {
		let config = RevealConfig::default();
		assert_eq!(config.hidden_transform(), "translateY(30px)");
		assert_eq!(config.transition(), "all 0.6s cubic-bezier(0.4, 0, 0.2, 1)");
	}

	#[test]
	fn partial_config_keeps_defaults() {
		let config: RevealConfig = serde_json::from_str(r#"{ "threshold": 0.25 }"#).unwrap();
		assert_eq!(config.threshold, 0.25);
		assert_eq!(config.root_margin, "0px 0px -50px 0px");
	}
}
