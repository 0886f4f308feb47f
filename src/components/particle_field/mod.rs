//! Animated particle background.
//!
//! Renders an ambient field of drifting points on an HTML canvas with:
//! - Linear drift with toroidal wrap at the viewport edges
//! - Radial repulsion away from the pointer
//! - Faint links between particles that come close to each other
//! - Bursts of new particles spawned by the context-menu action
//!
//! # Example
//!
//! ```ignore
//! use folio_fx::{FieldConfig, ParticleCanvas};
//!
//! let config = FieldConfig { count: 120, ..FieldConfig::default() };
//! view! { <ParticleCanvas config=config /> }
//! ```

mod component;
mod particles;
mod render;
mod surface;
pub mod theme;

pub use component::ParticleCanvas;
pub use particles::{FieldConfig, Particle, ParticleField, Pointer};
pub use render::render;
pub use surface::DrawSurface;
pub use theme::{Color, FieldStyle};
