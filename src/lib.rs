//! landing-fx: ambient decorations for a static landing page.
//!
//! This crate compiles to WASM and mounts two kinds of decoration into the
//! host page: a fullscreen canvas particle field with pointer attraction and
//! proximity links, and a set of scroll/pointer effects wired onto the page's
//! existing elements (nav state, scroll reveal, parallax, hero gradient,
//! card tilt).

use leptos::prelude::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod effects;

pub use components::particle_field::{FieldConfig, ParticleFieldCanvas, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("landing-fx: logging initialized");
}

/// Load field configuration overrides from a script element with id="field-config".
/// Expected format: JSON matching [`FieldConfig`]; omitted fields keep defaults.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => {
			info!(
				"landing-fx: loaded config, {} particles, theme {}",
				config.particle_count, config.theme
			);
			Some(config)
		}
		Err(e) => {
			warn!("landing-fx: failed to parse field config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Reads configuration from the DOM, mounts the particle canvas, and installs
/// the page effects once the component tree is live.
#[component]
pub fn App() -> impl IntoView {
	let config = load_field_config().unwrap_or_default();
	let theme = Theme::by_name(&config.theme);

	let effects_theme = theme.clone();
	Effect::new(move |_| {
		effects::install_all(&effects_theme);
	});

	view! {
		<ParticleFieldCanvas config=config theme=theme />
	}
}
