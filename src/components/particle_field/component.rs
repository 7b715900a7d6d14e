//! Leptos component owning the particle canvas.
//!
//! Creates a viewport-fixed canvas and drives the simulation with a
//! `requestAnimationFrame` loop. Pointer and resize events are pushed into
//! shared state by window-level listeners; each frame reads one input
//! snapshot, steps the field, and redraws.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::FieldConfig;
use super::field::{FrameInput, ParticleField, Pointer};
use super::render;
use super::rng::BrowserRandom;
use super::theme::Theme;

/// Bundles the simulation with its input snapshot and draw context.
struct FieldContext {
	field: ParticleField,
	input: FrameInput,
	rng: BrowserRandom,
	ctx: CanvasRenderingContext2d,
	theme: Theme,
}

fn viewport_size(window: &Window) -> (f64, f64) {
	(
		window.inner_width().unwrap().as_f64().unwrap(),
		window.inner_height().unwrap().as_f64().unwrap(),
	)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}

/// Renders the ambient particle field on a fullscreen canvas.
///
/// The canvas tracks the viewport and the batch fully respawns on resize.
/// If the canvas ref or its 2d context is unavailable, the whole subsystem
/// stays dormant and the rest of the page is unaffected.
#[component]
pub fn ParticleFieldCanvas(
	/// Simulation constants, fixed for the lifetime of the page.
	config: FieldConfig,
	/// Colors for particles and links.
	theme: Theme,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pointer_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let pointer_out_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init, pointer_cb_init, pointer_out_cb_init) = (
		context.clone(),
		animate.clone(),
		resize_cb.clone(),
		pointer_cb.clone(),
		pointer_out_cb.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		// No 2d context means no particle field; everything else still runs.
		let Some(ctx) = context_2d(&canvas) else {
			return;
		};

		let mut rng = BrowserRandom;
		let mut field = ParticleField::new(config.clone(), w, h, &mut rng);
		field.start();

		*context_init.borrow_mut() = Some(FieldContext {
			field,
			input: FrameInput::default(),
			rng,
			ctx,
			theme: theme.clone(),
		});

		// Pointer tracking is window-level; the canvas is fixed at the
		// viewport origin, so client coordinates coincide with surface space.
		let context_move = context_init.clone();
		*pointer_cb_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if let Some(ref mut c) = *context_move.borrow_mut() {
				c.input.pointer = Some(Pointer {
					x: ev.client_x() as f64,
					y: ev.client_y() as f64,
				});
			}
		}));
		if let Some(ref cb) = *pointer_cb_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let context_out = context_init.clone();
		*pointer_out_cb_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_out.borrow_mut() {
				c.input.pointer = None;
			}
		}));
		if let Some(ref cb) = *pointer_out_cb_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("mouseout", cb.as_ref().unchecked_ref());
		}

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = viewport_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.field.resize(nw, nh, &mut c.rng);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let input = c.input;
				c.field.step(input, &mut c.rng);
				render::render(&c.field, &c.ctx, &c.theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="particles-canvas"
			class="particle-field-canvas"
			style="display: block; position: fixed; inset: 0; pointer-events: none;"
		/>
	}
}
