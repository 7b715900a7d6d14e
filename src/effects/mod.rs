//! Scroll- and pointer-driven decorations for the page's existing DOM.
//!
//! Each effect looks up the elements it decorates and installs itself only
//! when they exist; a missing element disables that one effect and nothing
//! else. Listeners live for the page lifetime, so install-once closures are
//! handed to the JS heap with `Closure::forget`.

mod hero;
mod nav;
mod reveal;
mod tilt;

use crate::components::particle_field::Theme;

/// Scroll offset past which the navigation bar takes its `scrolled` state.
const NAV_SCROLL_THRESHOLD: f64 = 50.0;
/// Height of the fixed header, subtracted from anchor scroll targets.
const HEADER_OFFSET: f64 = 80.0;
/// Distance from the viewport bottom at which an element reveals.
const REVEAL_POINT: f64 = 150.0;
/// Fraction of the scroll offset applied to the hero background.
const PARALLAX_FACTOR: f64 = 0.3;
/// Maximum card tilt in degrees at the card's edge.
const TILT_MAX_DEG: f64 = 5.0;
/// Constant upward offset while a card is tilted.
const TILT_LIFT_PX: f64 = 4.0;

/// Install every page effect whose target elements exist.
pub fn install_all(theme: &Theme) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(document) = window.document() else {
		return;
	};

	nav::install(&window, &document);
	reveal::install(&window, &document);
	hero::install(&window, &document, theme);
	tilt::install(&document);
}
