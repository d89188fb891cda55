//! Drawing surface and frame scheduling.
//!
//! The simulator only talks to the browser through [`Surface`] and
//! [`FrameScheduler`]. [`CanvasSurface`] and [`AnimationFrames`] are the
//! browser-backed implementations used by the component.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::color::Rgba;

/// Identifier returned when a frame callback is scheduled.
pub type FrameHandle = i32;

/// A decoded image that can be placed on a [`Surface`].
pub trait RasterImage {
	/// Native width in pixels.
	fn width(&self) -> u32;
	/// Native height in pixels.
	fn height(&self) -> u32;
}

/// A 2D drawing target that can also read its pixels back.
pub trait Surface {
	/// Image type this surface can draw.
	type Image: RasterImage;

	/// Width in pixels.
	fn width(&self) -> f64;
	/// Height in pixels.
	fn height(&self) -> f64;
	/// Erase the whole surface.
	fn clear(&mut self);
	/// Draw `image` at native size with its top-left corner at `(x, y)`.
	fn draw_image(&mut self, image: &Self::Image, x: f64, y: f64);
	/// Fill a circle of `radius` centred on `(x, y)`.
	fn fill_disk(&mut self, x: f64, y: f64, radius: f64, color: Rgba);
	/// Row-major RGBA bytes for the given rectangle, or `None` if the host
	/// refused the readback.
	fn read_pixels(&self, x: f64, y: f64, width: u32, height: u32) -> Option<Vec<u8>>;
}

/// Schedules a single callback for the next display frame.
pub trait FrameScheduler {
	/// Ask for one callback on the next frame. `None` if the host refused.
	fn request_frame(&mut self) -> Option<FrameHandle>;
	/// Drop a callback that has not fired yet.
	fn cancel_frame(&mut self, handle: FrameHandle);
}

impl RasterImage for HtmlImageElement {
	fn width(&self) -> u32 {
		self.natural_width()
	}

	fn height(&self) -> u32 {
		self.natural_height()
	}
}

/// [`Surface`] over an HTML canvas and its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Acquire a 2D context tuned for frequent `getImageData` calls.
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
		let options = js_sys::Object::new();
		js_sys::Reflect::set(
			&options,
			&JsValue::from_str("willReadFrequently"),
			&JsValue::TRUE,
		)?;
		let ctx: CanvasRenderingContext2d = canvas
			.get_context_with_context_options("2d", &options)?
			.ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
			.dyn_into()?;
		Ok(Self { canvas, ctx })
	}
}

impl Surface for CanvasSurface {
	type Image = HtmlImageElement;

	fn width(&self) -> f64 {
		self.canvas.width() as f64
	}

	fn height(&self) -> f64 {
		self.canvas.height() as f64
	}

	fn clear(&mut self) {
		self.ctx.clear_rect(0.0, 0.0, self.width(), self.height());
	}

	fn draw_image(&mut self, image: &HtmlImageElement, x: f64, y: f64) {
		if let Err(e) = self.ctx.draw_image_with_html_image_element(image, x, y) {
			warn!("image-particles: failed to draw image: {:?}", e);
		}
	}

	fn fill_disk(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
		self.ctx.close_path();
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
	}

	fn read_pixels(&self, x: f64, y: f64, width: u32, height: u32) -> Option<Vec<u8>> {
		match self
			.ctx
			.get_image_data(x, y, width as f64, height as f64)
		{
			Ok(data) => Some(data.data().0),
			Err(e) => {
				warn!("image-particles: pixel readback failed: {:?}", e);
				None
			}
		}
	}
}

/// [`FrameScheduler`] backed by `requestAnimationFrame`.
///
/// The callback lives in a shared slot so that it can reschedule itself.
pub struct AnimationFrames {
	callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl AnimationFrames {
	/// Schedule whatever closure `callback` holds when a frame is requested.
	pub fn new(callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Self {
		Self { callback }
	}
}

impl FrameScheduler for AnimationFrames {
	fn request_frame(&mut self) -> Option<FrameHandle> {
		let window = web_sys::window()?;
		let slot = self.callback.borrow();
		let cb = slot.as_ref()?;
		window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel_frame(&mut self, handle: FrameHandle) {
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(handle);
		}
	}
}
