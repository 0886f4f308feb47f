//! Leptos component hosting the particle field canvas.
//!
//! The component creates a fixed, full-viewport canvas and wires up the window
//! pointer and resize events. An animation loop runs via `requestAnimationFrame`,
//! calling [`ParticleField::tick`] and the renderer each frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::particles::{FieldConfig, ParticleField, Pointer};
use super::render;
use crate::error::SiteError;

/// Bundles the simulation with the pointer context it reads every frame.
struct FieldContext {
	field: ParticleField,
	pointer: Pointer,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn viewport_size(window: &Window) -> (f64, f64) {
	let dimension = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
	(dimension(window.inner_width()), dimension(window.inner_height()))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SiteError> {
	canvas
		.get_context("2d")?
		.ok_or(SiteError::MissingElement("2d canvas context"))?
		.dyn_into()
		.map_err(|_| SiteError::Js("2d context has an unexpected type".into()))
}

/// Seed for the particle RNG; the browser's `Math.random` is the entropy source.
fn browser_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64 ^ js_sys::Date::now() as u64
}

/// Renders the animated particle background.
///
/// The canvas covers the viewport behind the page content and resizes with the
/// window. Moving the pointer repels nearby particles; the context-menu action
/// spawns a burst of particles under the pointer instead of opening the menu.
#[component]
pub fn ParticleCanvas(#[prop(optional)] config: FieldConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let pointer_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let resize_cb: FrameCallback = Rc::new(RefCell::new(None));
	let (context_init, animate_init) = (context.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("folio-fx: {}", SiteError::NoWindow);
			return;
		};

		let ctx = match context_2d(&canvas) {
			Ok(ctx) => ctx,
			Err(e) => {
				warn!("folio-fx: particle background disabled: {}", e);
				return;
			}
		};

		let (w, h) = viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		let field = ParticleField::new(config.clone(), w, h, browser_seed());
		debug!(
			"folio-fx: particle field {}x{} with {} particles",
			w,
			h,
			field.particles().len()
		);
		*context_init.borrow_mut() = Some(FieldContext {
			field,
			pointer: Pointer::default(),
		});

		let context_pointer = context_init.clone();
		*pointer_cb.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if let Some(ref mut c) = *context_pointer.borrow_mut() {
				c.pointer.set(ev.client_x() as f64, ev.client_y() as f64);
			}
		}));
		if let Some(ref cb) = *pointer_cb.borrow() {
			let _ = window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.field.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let pointer = c.pointer;
				let field = &mut c.field;
				let (width, height) = (field.width(), field.height());
				let link_distance = field.config().link_distance;
				let style = field.config().style.clone();
				let particles = field.tick(&pointer);
				render::render(&ctx, width, height, particles, link_distance, &style);
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_menu = context.clone();
	let on_contextmenu = move |ev: MouseEvent| {
		ev.prevent_default();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_menu.borrow_mut() {
			c.pointer.set(x, y);
			let burst = c.field.config().burst;
			c.field.spawn_burst(x, y, burst);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			id="particle-canvas"
			on:contextmenu=on_contextmenu
			style="position: fixed; inset: 0; z-index: -1; display: block;"
		/>
	}
}
