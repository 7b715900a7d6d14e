//! Navigation bar scroll state and smooth in-page anchor scrolling.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

use super::{HEADER_OFFSET, NAV_SCROLL_THRESHOLD};

pub(super) fn install(window: &Window, document: &Document) {
	install_scrolled_state(window, document);
	install_anchor_scrolling(window, document);
}

/// Toggles the `scrolled` class on the nav bar past a fixed offset.
fn install_scrolled_state(window: &Window, document: &Document) {
	let Ok(Some(nav)) = document.query_selector(".nav") else {
		return;
	};

	let win = window.clone();
	let on_scroll = Closure::<dyn FnMut()>::new(move || {
		let offset = win.page_y_offset().unwrap_or(0.0);
		let class_list = nav.class_list();
		if offset > NAV_SCROLL_THRESHOLD {
			let _ = class_list.add_1("scrolled");
		} else {
			let _ = class_list.remove_1("scrolled");
		}
	});
	let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
	on_scroll.forget();
}

/// Intercepts clicks on in-page anchors and scrolls to the target, offset by
/// the fixed header height.
fn install_anchor_scrolling(window: &Window, document: &Document) {
	let Ok(anchors) = document.query_selector_all(r##"a[href^="#"]"##) else {
		return;
	};

	for i in 0..anchors.length() {
		let Some(anchor) = anchors
			.item(i)
			.and_then(|node| node.dyn_into::<Element>().ok())
		else {
			continue;
		};

		let win = window.clone();
		let doc = document.clone();
		let source = anchor.clone();
		let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			ev.prevent_default();
			let Some(href) = source.get_attribute("href") else {
				return;
			};
			let Ok(Some(target)) = doc.query_selector(&href) else {
				return;
			};

			let top = target.get_bounding_client_rect().top()
				+ win.page_y_offset().unwrap_or(0.0)
				- HEADER_OFFSET;
			let options = ScrollToOptions::new();
			options.set_top(top);
			options.set_behavior(ScrollBehavior::Smooth);
			win.scroll_to_with_scroll_to_options(&options);
		});
		let _ = anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
		on_click.forget();
	}
}
