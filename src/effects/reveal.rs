//! Scroll reveal: elements gain a `visible` class as they enter the viewport.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, NodeList, Window};

use super::REVEAL_POINT;

pub(super) fn install(window: &Window, document: &Document) {
	let Ok(elements) = document.query_selector_all(".reveal") else {
		return;
	};
	if elements.length() == 0 {
		return;
	}

	// Above-the-fold elements reveal without any scrolling.
	reveal_pass(window, &elements);

	// At most one reveal pass per rendered frame; the flag covers the window
	// between scheduling the frame and running it.
	let ticking = Rc::new(Cell::new(false));

	let frame_cb = Rc::new(Closure::<dyn FnMut()>::new({
		let (win, elements, ticking) = (window.clone(), elements.clone(), ticking.clone());
		move || {
			reveal_pass(&win, &elements);
			ticking.set(false);
		}
	}));

	let on_scroll = Closure::<dyn FnMut()>::new({
		let (win, ticking) = (window.clone(), ticking.clone());
		move || {
			if !ticking.get() {
				ticking.set(true);
				let frame: &Closure<dyn FnMut()> = &frame_cb;
				let _ = win.request_animation_frame(frame.as_ref().unchecked_ref());
			}
		}
	});
	let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
	on_scroll.forget();
}

fn reveal_pass(window: &Window, elements: &NodeList) {
	let Some(viewport_height) = window.inner_height().ok().and_then(|v| v.as_f64()) else {
		return;
	};

	for i in 0..elements.length() {
		let Some(element) = elements
			.item(i)
			.and_then(|node| node.dyn_into::<Element>().ok())
		else {
			continue;
		};
		if element.get_bounding_client_rect().top() < viewport_height - REVEAL_POINT {
			let _ = element.class_list().add_1("visible");
		}
	}
}
