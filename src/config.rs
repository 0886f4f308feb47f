//! Site configuration.
//!
//! Every field has a default matching the stock portfolio page, so a page can
//! override only what it needs in a JSON block:
//!
//! ```html
//! <script id="site-config" type="application/json">
//!   { "particles": { "count": 120 }, "typing": { "roles": ["Rustacean"] } }
//! </script>
//! ```

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::components::particle_field::{Color, FieldConfig};
use crate::effects::contact::ContactConfig;
use crate::effects::nav::NavConfig;
use crate::effects::reveal::RevealConfig;
use crate::effects::tilt::TiltConfig;
use crate::effects::typing::TypingConfig;

/// Id of the script element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	/// Browser UI colour advertised through `<meta name="theme-color">`.
	pub theme_color: Color,
	pub particles: FieldConfig,
	pub typing: TypingConfig,
	pub nav: NavConfig,
	pub tilt: TiltConfig,
	pub reveal: RevealConfig,
	pub contact: ContactConfig,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			theme_color: Color::rgb(0, 5, 15),
			particles: FieldConfig::default(),
			typing: TypingConfig::default(),
			nav: NavConfig::default(),
			tilt: TiltConfig::default(),
			reveal: RevealConfig::default(),
			contact: ContactConfig::default(),
		}
	}
}

impl SiteConfig {
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Reads the configuration block from the page, falling back to defaults.
	pub fn load() -> Self {
		let Some(json) = config_text() else {
			info!("folio-fx: no #{} block, using defaults", CONFIG_ELEMENT_ID);
			return Self::default();
		};

		match Self::from_json(&json) {
			Ok(config) => {
				info!(
					"folio-fx: loaded config ({} particles, {} roles)",
					config.particles.count,
					config.typing.roles.len()
				);
				config
			}
			Err(e) => {
				warn!("folio-fx: failed to parse site config: {}", e);
				Self::default()
			}
		}
	}
}

fn config_text() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let script: HtmlScriptElement = document
		.get_element_by_id(CONFIG_ELEMENT_ID)?
		.dyn_into()
		.ok()?;
	script.text().ok()
}
