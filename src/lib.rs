//! folio-fx: client-side behavior layer for a personal portfolio site.
//!
//! This crate compiles to WASM and mounts into the portfolio page: an animated
//! particle background that reacts to the pointer, plus the page effects wired
//! onto the existing markup (card tilt, cursor trail, typewriter headline,
//! scroll reveal, navigation, contact form).

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod config;
pub mod effects;
pub mod error;

pub use components::particle_field::{
	Color, DrawSurface, FieldConfig, FieldStyle, Particle, ParticleCanvas, ParticleField, Pointer,
};
pub use config::SiteConfig;
pub use error::{SiteError, SubmitError};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("folio-fx: logging initialized");
}

/// Main application component.
/// Loads the site config from the DOM, renders the particle background and
/// installs the page effects once mounted.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = SiteConfig::load();
	let theme_color = config.theme_color.to_css();
	let particles = config.particles.clone();

	Effect::new(move |_| {
		effects::install(&config);
	});

	view! {
		<Meta name="theme-color" content=theme_color />
		<ParticleCanvas config=particles />
	}
}
