//! 3D perspective tilt on project cards following the pointer.

use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use super::{document, listen, query_all, set_styles};
use crate::error::SiteError;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
	pub selector: String,
	/// Pointer offset from the card centre, in px, per degree of rotation.
	pub sensitivity: f64,
	pub perspective: f64,
}

impl Default for TiltConfig {
	fn default() -> Self {
		Self {
			selector: ".project-card".to_string(),
			sensitivity: 20.0,
			perspective: 1000.0,
		}
	}
}

/// Rotation in degrees `(about x, about y)` for a pointer at `(x, y)` inside a
/// `width`×`height` card. The card leans away from the pointer.
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64, sensitivity: f64) -> (f64, f64) {
	let (cx, cy) = (width / 2.0, height / 2.0);
	((y - cy) / sensitivity, (cx - x) / sensitivity)
}

pub fn transform_css(perspective: f64, rotate_x: f64, rotate_y: f64) -> String {
	format!("perspective({perspective}px) rotateX({rotate_x}deg) rotateY({rotate_y}deg)")
}

pub fn install(config: &TiltConfig) -> Result<(), SiteError> {
	let cards: Vec<HtmlElement> = query_all(&document()?, &config.selector)?;

	for card in cards {
		let (sensitivity, perspective) = (config.sensitivity, config.perspective);

		let target = card.clone();
		listen(&card, "mousemove", move |ev| {
			let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
				return;
			};
			let rect = target.get_bounding_client_rect();
			let (rx, ry) = tilt_angles(
				ev.client_x() as f64 - rect.left(),
				ev.client_y() as f64 - rect.top(),
				rect.width(),
				rect.height(),
				sensitivity,
			);
			set_styles(
				&target,
				&[
					("transition", "transform 0.1s ease-out"),
					("transform", transform_css(perspective, rx, ry).as_str()),
				],
			);
		})?;

		let target = card.clone();
		listen(&card, "mouseleave", move |_| {
			set_styles(
				&target,
				&[
					("transition", "transform 0.5s ease-out"),
					("transform", transform_css(perspective, 0.0, 0.0).as_str()),
				],
			);
		})?;
	}
	Ok(())
}
