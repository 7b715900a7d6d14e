//! Ambient particle field rendered behind the landing page.
//!
//! A fixed batch of particles drifts across a fullscreen canvas, drawn toward
//! the pointer and joined by distance-faded lines. The simulation core is
//! browser-free and single-steppable; the Leptos component supplies the
//! canvas, the event wiring, and the frame loop.
//!
//! # Example
//!
//! ```ignore
//! use landing_fx::{FieldConfig, ParticleFieldCanvas, Theme};
//!
//! let config = FieldConfig::default();
//! let theme = Theme::by_name(&config.theme);
//!
//! view! { <ParticleFieldCanvas config=config theme=theme /> }
//! ```

mod component;
mod config;
mod field;
mod render;
pub mod rng;
mod theme;

pub use component::ParticleFieldCanvas;
pub use config::FieldConfig;
pub use field::{FrameInput, Link, Particle, ParticleField, Pointer, RunState};
pub use theme::{Color, Theme};
