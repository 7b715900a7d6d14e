//! Simulation constants for the particle field.

use serde::Deserialize;

/// Tuning constants for the particle field, fixed at startup.
///
/// Deserialized from the optional `#field-config` JSON block in the host page;
/// any omitted field keeps its default, so a page can override just the theme
/// or just the particle count.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of particles in the batch.
	pub particle_count: usize,
	/// Smallest particle radius.
	pub size_min: f64,
	/// Largest particle radius (exclusive).
	pub size_max: f64,
	/// Distance under which two particles are joined by a line.
	pub link_distance: f64,
	/// Ceiling for link opacity, reached at zero distance.
	pub link_max_alpha: f64,
	/// Scale of initial velocity components; half of it is the stall threshold.
	pub base_speed: f64,
	/// Radius of the pointer's influence.
	pub pointer_radius: f64,
	/// Strength of the pointer attraction impulse.
	pub pointer_force: f64,
	/// Name of the color theme to render with.
	pub theme: String,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			particle_count: 100,
			size_min: 1.0,
			size_max: 3.5,
			link_distance: 180.0,
			link_max_alpha: 0.25,
			base_speed: 0.4,
			pointer_radius: 200.0,
			pointer_force: 0.02,
			theme: "ember".to_string(),
		}
	}
}
