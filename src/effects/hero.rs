//! Hero section: scroll parallax and a pointer-tracking gradient.

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use crate::components::particle_field::{Color, Theme};

use super::PARALLAX_FACTOR;

fn html_element(document: &Document, selector: &str) -> Option<HtmlElement> {
	document
		.query_selector(selector)
		.ok()
		.flatten()
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub(super) fn install(window: &Window, document: &Document, theme: &Theme) {
	let Some(hero_bg) = html_element(document, ".hero-bg") else {
		return;
	};

	install_parallax(window, &hero_bg);

	if let Some(hero) = html_element(document, ".hero") {
		install_gradient(&hero, &hero_bg, theme.accent);
	}
}

/// The background layer trails the scroll at a fraction of its speed.
fn install_parallax(window: &Window, hero_bg: &HtmlElement) {
	let win = window.clone();
	let bg = hero_bg.clone();
	let on_scroll = Closure::<dyn FnMut()>::new(move || {
		let scrolled = win.page_y_offset().unwrap_or(0.0);
		let _ = bg.style().set_property(
			"transform",
			&format!("translateY({}px)", scrolled * PARALLAX_FACTOR),
		);
	});
	let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
	on_scroll.forget();
}

/// Two radial gradients drift with the pointer's offset fraction inside the
/// hero box; leaving the hero clears the override.
fn install_gradient(hero: &HtmlElement, hero_bg: &HtmlElement, accent: Color) {
	let target = hero.clone();
	let bg = hero_bg.clone();
	let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
		let rect = target.get_bounding_client_rect();
		if rect.width() <= 0.0 || rect.height() <= 0.0 {
			return;
		}
		let x = (ev.client_x() as f64 - rect.left()) / rect.width() - 0.5;
		let y = (ev.client_y() as f64 - rect.top()) / rect.height() - 0.5;

		let inner = accent.with_alpha(0.12).to_css();
		let outer = accent.with_alpha(0.05).to_css();
		let background = format!(
			"radial-gradient(ellipse 80% 50% at {:.2}% {:.2}%, {} 0%, transparent 50%), \
			 radial-gradient(ellipse 60% 40% at {:.2}% {:.2}%, {} 0%, transparent 50%)",
			50.0 + x * 20.0,
			-20.0 + y * 20.0,
			inner,
			80.0 + x * 10.0,
			60.0 + y * 10.0,
			outer,
		);
		let _ = bg.style().set_property("background", &background);
	});
	let _ = hero.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
	on_move.forget();

	let bg_reset = hero_bg.clone();
	let on_leave = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
		let _ = bg_reset.style().remove_property("background");
	});
	let _ = hero.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
	on_leave.forget();
}
