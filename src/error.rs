//! Error types for folio-fx.
//!
//! Page effects attach to markup they do not own, so most failures are a
//! missing element or a DOM call rejecting its arguments.

use std::fmt;

use wasm_bindgen::JsValue;

/// Errors raised while wiring effects into the page.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteError {
	/// No global `window` (not running in a browser).
	NoWindow,
	/// The window has no document.
	NoDocument,
	/// An element the effect depends on is not in the page.
	MissingElement(&'static str),
	/// A DOM call threw.
	Js(String),
}

impl SiteError {
	/// A missing element just means the page does not use that effect.
	pub fn is_missing_element(&self) -> bool {
		matches!(self, SiteError::MissingElement(_))
	}
}

impl fmt::Display for SiteError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SiteError::NoWindow => write!(f, "no global window; not running in a browser"),
			SiteError::NoDocument => write!(f, "window has no document"),
			SiteError::MissingElement(what) => write!(f, "missing element: {}", what),
			SiteError::Js(msg) => write!(f, "DOM call failed: {}", msg),
		}
	}
}

impl std::error::Error for SiteError {}

impl From<JsValue> for SiteError {
	fn from(value: JsValue) -> Self {
		SiteError::Js(describe_js(&value))
	}
}

/// Errors from submitting the contact form.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
	/// The endpoint answered with a non-2xx status.
	Http(u16),
	/// The request never completed.
	Network(String),
}

impl fmt::Display for SubmitError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SubmitError::Http(status) => write!(f, "form endpoint returned HTTP {}", status),
			SubmitError::Network(msg) => write!(f, "network error: {}", msg),
		}
	}
}

impl std::error::Error for SubmitError {}

impl From<JsValue> for SubmitError {
	fn from(value: JsValue) -> Self {
		SubmitError::Network(describe_js(&value))
	}
}

/// Best-effort message for a thrown JS value.
fn describe_js(value: &JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
