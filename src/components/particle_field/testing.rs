//! In-memory surface and scheduler for exercising the simulator in tests.

use super::color::Rgba;
use super::render::{FrameHandle, FrameScheduler, RasterImage, Surface};

/// A raw RGBA image.
#[derive(Clone, Debug)]
pub struct PixelImage {
	pub width: u32,
	pub height: u32,
	pub pixels: Vec<u8>,
}

impl PixelImage {
	pub fn solid(width: u32, height: u32, color: Rgba) -> Self {
		Self {
			width,
			height,
			pixels: [color.r, color.g, color.b, color.a].repeat((width * height) as usize),
		}
	}
}

impl RasterImage for PixelImage {
	fn width(&self) -> u32 {
		self.width
	}

	fn height(&self) -> u32 {
		self.height
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
	Clear,
	Image { x: f64, y: f64 },
	Disk { x: f64, y: f64, radius: f64, color: Rgba },
}

/// Pixel-backed surface that records every draw call.
pub struct RecordingSurface {
	pub width: u32,
	pub height: u32,
	pub pixels: Vec<u8>,
	pub calls: Vec<DrawCall>,
	/// Make `read_pixels` fail, like a canvas rejecting `getImageData`.
	pub refuse_readback: bool,
}

impl RecordingSurface {
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			width,
			height,
			pixels: vec![0; (width * height * 4) as usize],
			calls: Vec::new(),
			refuse_readback: false,
		}
	}

	/// Draw calls issued since the most recent clear.
	pub fn since_last_clear(&self) -> &[DrawCall] {
		let start = self
			.calls
			.iter()
			.rposition(|c| *c == DrawCall::Clear)
			.map_or(0, |i| i + 1);
		&self.calls[start..]
	}

	fn index(&self, x: i64, y: i64) -> Option<usize> {
		let inside = (0..self.width as i64).contains(&x) && (0..self.height as i64).contains(&y);
		inside.then(|| ((y * self.width as i64 + x) * 4) as usize)
	}
}

impl Surface for RecordingSurface {
	type Image = PixelImage;

	fn width(&self) -> f64 {
		self.width as f64
	}

	fn height(&self) -> f64 {
		self.height as f64
	}

	fn clear(&mut self) {
		self.pixels.fill(0);
		self.calls.push(DrawCall::Clear);
	}

	fn draw_image(&mut self, image: &PixelImage, x: f64, y: f64) {
		let (ox, oy) = (x.floor() as i64, y.floor() as i64);
		for iy in 0..image.height as i64 {
			for ix in 0..image.width as i64 {
				if let Some(dst) = self.index(ox + ix, oy + iy) {
					let src = ((iy * image.width as i64 + ix) * 4) as usize;
					self.pixels[dst..dst + 4].copy_from_slice(&image.pixels[src..src + 4]);
				}
			}
		}
		self.calls.push(DrawCall::Image { x, y });
	}

	fn fill_disk(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
		self.calls.push(DrawCall::Disk {
			x,
			y,
			radius,
			color,
		});
	}

	fn read_pixels(&self, x: f64, y: f64, width: u32, height: u32) -> Option<Vec<u8>> {
		if self.refuse_readback {
			return None;
		}
		let (ox, oy) = (x.floor() as i64, y.floor() as i64);
		let mut out = vec![0; (width * height * 4) as usize];
		for ry in 0..height as i64 {
			for rx in 0..width as i64 {
				if let Some(src) = self.index(ox + rx, oy + ry) {
					let dst = ((ry * width as i64 + rx) * 4) as usize;
					out[dst..dst + 4].copy_from_slice(&self.pixels[src..src + 4]);
				}
			}
		}
		Some(out)
	}
}

/// Scheduler that hands out increasing handles and records cancellations.
#[derive(Debug, Default)]
pub struct ManualScheduler {
	next: FrameHandle,
	pub requested: Vec<FrameHandle>,
	pub cancelled: Vec<FrameHandle>,
}

impl FrameScheduler for ManualScheduler {
	fn request_frame(&mut self) -> Option<FrameHandle> {
		self.next += 1;
		self.requested.push(self.next);
		Some(self.next)
	}

	fn cancel_frame(&mut self, handle: FrameHandle) {
		self.cancelled.push(handle);
	}
}
