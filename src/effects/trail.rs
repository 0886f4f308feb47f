//! Glowing dot that follows the cursor.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, MouseEvent};

use super::{document, listen, set_styles, window};
use crate::error::SiteError;

/// Diameter of the dot in px.
const DOT_SIZE: f64 = 10.0;

const DOT_STYLE: &str = "position: fixed; width: 10px; height: 10px; \
	background: radial-gradient(circle, rgba(0, 191, 255, 0.5), transparent 70%); \
	border-radius: 50%; pointer-events: none; z-index: 9999; \
	transform: translate(-50%, -50%); \
	transition: transform 0.1s ease-out, opacity 0.3s ease-out; opacity: 0;";

/// Transform centring the dot on `(x, y)`.
pub fn dot_transform(x: f64, y: f64) -> String {
	let half = DOT_SIZE / 2.0;
	format!("translate({}px, {}px)", x - half, y - half)
}

pub fn install() -> Result<(), SiteError> {
	let document = document()?;
	let window = window()?;
	let body = document.body().ok_or(SiteError::MissingElement("body"))?;

	let dot: HtmlElement = document
		.create_element("div")?
		.dyn_into()
		.map_err(|_| SiteError::Js("created div is not an HtmlElement".into()))?;
	dot.style().set_css_text(DOT_STYLE);
	body.append_child(&dot)?;

	let last = Rc::new(Cell::new((0.0, 0.0)));

	let (dot_move, last_move) = (dot.clone(), last.clone());
	listen(&window, "mousemove", move |ev| {
		if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
			set_styles(&dot_move, &[("opacity", "1")]);
			last_move.set((ev.client_x() as f64, ev.client_y() as f64));
		}
	})?;

	let dot_out = dot.clone();
	listen(&window, "mouseout", move |_| {
		set_styles(&dot_out, &[("opacity", "0")]);
	})?;

	let follow: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let follow_inner = follow.clone();
	*follow.borrow_mut() = Some(Closure::new(move || {
		let (x, y) = last.get();
		set_styles(&dot, &[("transform", dot_transform(x, y).as_str())]);
		if let (Some(win), Some(cb)) = (web_sys::window(), follow_inner.borrow().as_ref()) {
			let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}));
	if let Some(ref cb) = *follow.borrow() {
		window.request_animation_frame(cb.as_ref().unchecked_ref())?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dot_is_centred_on_pointer() {
		assert_eq!(dot_transform(100.0, 40.5), "translate(95px, 35.5px)");
		assert_eq!(dot_transform(0.0, 0.0), "translate(-5px, -5px)");
	}
}
