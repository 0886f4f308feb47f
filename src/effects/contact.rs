//! AJAX submission of the contact form with a success modal.
//!
//! The form is posted with `fetch` instead of navigating away. While the request
//! is in flight the submit button is disabled and shows a sending label; it is
//! restored whatever the outcome.

use log::{error, info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
	Element, FormData, Headers, HtmlButtonElement, HtmlFormElement, RequestInit, Response,
	ScrollBehavior, ScrollToOptions,
};

use super::{by_id, document, event_element, listen};
use crate::error::{SiteError, SubmitError};

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
	/// Button markup shown while the request is in flight.
	pub sending_html: String,
	pub http_error_message: String,
	pub network_error_message: String,
}

impl Default for ContactConfig {
	fn default() -> Self {
		Self {
			sending_html: "<span>Sending...</span><i class=\"fas fa-spinner fa-spin\"></i>"
				.to_string(),
			http_error_message:
				"Oops! There was a problem submitting your form. Please try again later."
					.to_string(),
			network_error_message:
				"Oops! There was a network problem. Please check your connection and try again."
					.to_string(),
		}
	}
}

impl ContactConfig {
	/// Message shown to the visitor for a failed submission.
	pub fn failure_message(&self, err: &SubmitError) -> &str {
		match err {
			SubmitError::Http(_) => &self.http_error_message,
			SubmitError::Network(_) => &self.network_error_message,
		}
	}
}

/// Maps a response status to the submission outcome.
pub fn check_status(status: u16) -> Result<(), SubmitError> {
	if (200..300).contains(&status) {
		Ok(())
	} else {
		Err(SubmitError::Http(status))
	}
}

/// Posts the form's fields to its `action` URL, asking for a JSON reply.
pub async fn submit(form: &HtmlFormElement) -> Result<(), SubmitError> {
	let window = web_sys::window().ok_or_else(|| SubmitError::Network("no window".into()))?;

	let body = FormData::new_with_form(form)?;
	let headers = Headers::new()?;
	headers.set("Accept", "application/json")?;

	let init = RequestInit::new();
	init.set_method("POST");
	init.set_body(&body);
	init.set_headers(&headers);

	let response: Response = JsFuture::from(window.fetch_with_str_and_init(&form.action(), &init))
		.await?
		.dyn_into()?;
	check_status(response.status())
}

fn show_modal(modal: &Element, show: bool) {
	let classes = modal.class_list();
	let (add, remove) = if show { ("show", "hidden") } else { ("hidden", "show") };
	let _ = classes.remove_1(remove);
	let _ = classes.add_1(add);
}

fn scroll_to_top() {
	let options = ScrollToOptions::new();
	options.set_top(0.0);
	options.set_behavior(ScrollBehavior::Smooth);
	if let Some(window) = web_sys::window() {
		window.scroll_to_with_scroll_to_options(&options);
	}
}

pub fn install(config: &ContactConfig) -> Result<(), SiteError> {
	let document = document()?;
	let form: HtmlFormElement = by_id(&document, "contact-form")?;
	let modal: Element = by_id(&document, "success-modal")?;

	let (submit_form, submit_modal, config) = (form.clone(), modal.clone(), config.clone());
	listen(&form, "submit", move |ev| {
		ev.prevent_default();

		let button = submit_form
			.query_selector("button[type=\"submit\"]")
			.ok()
			.flatten()
			.and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
		let original_html = button.as_ref().map(|b| b.inner_html());
		if let Some(ref b) = button {
			b.set_disabled(true);
			b.set_inner_html(&config.sending_html);
		}

		let (form, modal, config) = (submit_form.clone(), submit_modal.clone(), config.clone());
		wasm_bindgen_futures::spawn_local(async move {
			match submit(&form).await {
				Ok(()) => {
					info!("folio-fx: contact form submitted");
					show_modal(&modal, true);
					form.reset();
					scroll_to_top();
				}
				Err(e) => {
					match &e {
						SubmitError::Http(_) => warn!("folio-fx: contact form rejected: {}", e),
						SubmitError::Network(_) => error!("folio-fx: submission error: {}", e),
					}
					if let Some(window) = web_sys::window() {
						let _ = window.alert_with_message(config.failure_message(&e));
					}
				}
			}

			if let (Some(b), Some(html)) = (button, original_html) {
				b.set_disabled(false);
				b.set_inner_html(&html);
			}
		});
	})?;

	if let Some(close) = document.get_element_by_id("close-modal") {
		let close_modal = modal.clone();
		listen(&close, "click", move |_| show_modal(&close_modal, false))?;
	}

	// Clicks on the backdrop itself, not the dialog inside it, dismiss the modal.
	let backdrop = modal.clone();
	listen(&modal, "click", move |ev| {
		if event_element(&ev).as_ref() == Some(&backdrop) {
			show_modal(&backdrop, false);
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_2xx_counts_as_success() {
		assert_eq!(check_status(200), Ok(()));
		assert_eq!(check_status(204), Ok(()));
		assert_eq!(check_status(302), Err(SubmitError::Http(302)));
		assert_eq!(check_status(422), Err(SubmitError::Http(422)));
		assert_eq!(check_status(500), Err(SubmitError::Http(500)));
	}

	#[test]
	fn failure_message_depends_on_cause() {
		let config = ContactConfig::default();
		assert!(config.failure_message(&SubmitError::Http(500)).contains("submitting your form"));
		assert!(config
			.failure_message(&SubmitError::Network("offline".into()))
			.contains("network problem"));
	}
}
