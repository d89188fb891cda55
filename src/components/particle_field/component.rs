//! Leptos component wiring the particle field to the page.
//!
//! Renders the file picker label, the convert button and the canvas. Image
//! decoding, button clicks, window-wide `mousemove` and `requestAnimationFrame`
//! callbacks are forwarded to [`ParticleFieldState`]; everything else lives
//! in the state.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlCanvasElement, HtmlImageElement, HtmlInputElement, MouseEvent, Url};

use super::render::{AnimationFrames, CanvasSurface};
use super::state::ParticleFieldState;
use super::types::ParticleConfig;

type FieldContext = ParticleFieldState<CanvasSurface, AnimationFrames>;

/// Decode `file` through an object URL and hand the image to the field.
fn load_file(
	file: web_sys::File,
	context: Rc<RefCell<Option<FieldContext>>>,
	image_pending: RwSignal<bool>,
) -> Result<(), JsValue> {
	let url = Url::create_object_url_with_blob(&file)?;
	let image = HtmlImageElement::new()?;

	let (image_loaded, url_loaded) = (image.clone(), url.clone());
	let on_load = Closure::once_into_js(move || {
		let _ = Url::revoke_object_url(&url_loaded);
		if let Some(ref mut c) = *context.borrow_mut() {
			c.on_image_loaded(image_loaded);
			image_pending.set(true);
		}
	});
	image.set_onload(Some(on_load.unchecked_ref()));
	image.set_src(&url);
	Ok(())
}

/// Image picker, convert button and the particle canvas.
///
/// The canvas spans the window width and its height minus
/// `config.reserved_height`, leaving room for the controls.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(default = ParticleConfig::default())] config: ParticleConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let image_pending = RwSignal::new(false);
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pointer_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let (context_init, animate_init, pointer_cb_init) =
		(context.clone(), animate.clone(), pointer_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let inner = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
		let (w, h) = (
			inner(window.inner_width()),
			(inner(window.inner_height()) - config.reserved_height).max(0.0),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		// Pointer moves anywhere in the window, mapped to canvas coordinates.
		let (context_mm, canvas_mm) = (context_init.clone(), canvas.clone());
		*pointer_cb_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			let rect = canvas_mm.get_bounding_client_rect();
			let (x, y) = (
				ev.client_x() as f64 - rect.left(),
				ev.client_y() as f64 - rect.top(),
			);
			if let Some(ref mut c) = *context_mm.borrow_mut() {
				c.on_pointer_moved(x, y);
			}
		}));
		if let Some(ref cb) = *pointer_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let surface = match CanvasSurface::new(canvas) {
			Ok(surface) => surface,
			Err(e) => {
				warn!("image-particles: canvas unavailable: {:?}", e);
				return;
			}
		};
		*context_init.borrow_mut() = Some(ParticleFieldState::new(
			surface,
			AnimationFrames::new(animate_init.clone()),
			config.clone(),
		));

		let context_anim = context_init.clone();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.on_frame();
			}
		}));
	});

	let context_ch = context.clone();
	let on_change = move |ev: Event| {
		let Some(input) = ev
			.target()
			.and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
		else {
			return;
		};
		let Some(file) = input.files().and_then(|files| files.get(0)) else {
			return;
		};
		if let Err(e) = load_file(file, context_ch.clone(), image_pending) {
			warn!("image-particles: failed to read image: {:?}", e);
		}
	};

	let context_cv = context.clone();
	let on_convert = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_cv.borrow_mut() {
			if c.on_convert_requested() {
				image_pending.set(false);
			}
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			style="display: block;"
		/>
		<div class="particle-field-controls">
			<label
				for="file"
				style:display=move || if image_pending.get() { "none" } else { "block" }
			>
				"Choose an image"
			</label>
			<input id="file" type="file" accept="image/*" on:change=on_change style="display: none;" />
			<button
				id="convert-btn"
				on:click=on_convert
				style:display=move || if image_pending.get() { "block" } else { "none" }
			>
				"Convert"
			</button>
		</div>
	}
}
