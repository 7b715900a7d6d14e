//! 3D tilt on cards tracking the pointer.

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent};

use super::{TILT_LIFT_PX, TILT_MAX_DEG};

pub(super) fn install(document: &Document) {
	let Ok(cards) = document.query_selector_all(".card") else {
		return;
	};

	for i in 0..cards.length() {
		let Some(card) = cards
			.item(i)
			.and_then(|node| node.dyn_into::<HtmlElement>().ok())
		else {
			continue;
		};

		let target = card.clone();
		let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			let rect = target.get_bounding_client_rect();
			if rect.width() <= 0.0 || rect.height() <= 0.0 {
				return;
			}
			let x = (ev.client_x() as f64 - rect.left()) / rect.width() - 0.5;
			let y = (ev.client_y() as f64 - rect.top()) / rect.height() - 0.5;

			let transform = format!(
				"perspective(1000px) rotateY({:.2}deg) rotateX({:.2}deg) translateY(-{}px)",
				x * TILT_MAX_DEG,
				-y * TILT_MAX_DEG,
				TILT_LIFT_PX,
			);
			let _ = target.style().set_property("transform", &transform);
		});
		let _ = card.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
		on_move.forget();

		let reset = card.clone();
		let on_leave = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
			let _ = reset.style().remove_property("transform");
		});
		let _ =
			card.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
		on_leave.forget();
	}
}
