//! Particle field state and the actions the page triggers on it.
//!
//! [`FieldSimulator`] owns the live particles, the latest pointer position, the
//! drawing surface and the pending animation frame. [`ParticleFieldState`]
//! sits on top and turns page events (image loaded, convert clicked, pointer
//! moved, frame due) into simulator calls.

use log::{debug, info};

use super::particles::{Particle, Pointer};
use super::render::{FrameHandle, FrameScheduler, RasterImage, Surface};
use super::sampler::sample;
use super::types::{ParticleConfig, ParticleSeed};

/// Animates a particle collection against the pointer.
pub struct FieldSimulator<S, F> {
	particles: Vec<Particle>,
	pointer: Option<Pointer>,
	frame: Option<FrameHandle>,
	surface: S,
	scheduler: F,
}

impl<S: Surface, F: FrameScheduler> FieldSimulator<S, F> {
	/// Empty field with no pointer and no pending frame.
	pub fn new(surface: S, scheduler: F) -> Self {
		Self {
			particles: Vec::new(),
			pointer: None,
			frame: None,
			surface,
			scheduler,
		}
	}

	/// Live particles in draw order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Last pointer position, `None` until the first move.
	pub fn pointer(&self) -> Option<Pointer> {
		self.pointer
	}

	/// The drawing surface.
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Mutable access to the drawing surface.
	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}

	/// The frame scheduler.
	#[cfg(test)]
	pub fn scheduler(&self) -> &F {
		&self.scheduler
	}

	/// Cancel the pending frame, if any. The animation stops until the next
	/// [`Self::animate`].
	pub fn halt(&mut self) {
		if let Some(handle) = self.frame.take() {
			debug!("image-particles: cancelling frame {}", handle);
			self.scheduler.cancel_frame(handle);
		}
	}

	/// Replace every particle with one per seed, in seed order.
	///
	/// The pending frame is cancelled before the surface is cleared so that a
	/// stale frame cannot draw over the new field.
	pub fn reset_and_seed(&mut self, seeds: &[ParticleSeed]) {
		self.halt();
		self.surface.clear();
		self.particles = seeds.iter().map(Particle::from).collect();
	}

	/// Remember the pointer for the next [`Self::update`].
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Some(Pointer { x, y });
	}

	/// Draw every particle without moving it.
	pub fn draw(&mut self) {
		for p in &self.particles {
			self.surface.fill_disk(p.x, p.y, p.size(), p.color());
		}
	}

	/// One frame: clear the surface, then move and draw each particle.
	pub fn update(&mut self) {
		self.surface.clear();
		let pointer = self.pointer;
		for p in &mut self.particles {
			p.step(pointer);
			self.surface.fill_disk(p.x, p.y, p.size(), p.color());
		}
	}

	/// Schedule the next frame, then run this one.
	pub fn animate(&mut self) {
		self.frame = self.scheduler.request_frame();
		self.update();
	}
}

/// Page-level controller holding the loaded image and startup config.
pub struct ParticleFieldState<S: Surface, F> {
	pub simulator: FieldSimulator<S, F>,
	image: Option<S::Image>,
	config: ParticleConfig,
}

impl<S: Surface, F: FrameScheduler> ParticleFieldState<S, F> {
	/// Controller with no image loaded yet.
	pub fn new(surface: S, scheduler: F, config: ParticleConfig) -> Self {
		Self {
			simulator: FieldSimulator::new(surface, scheduler),
			image: None,
			config,
		}
	}

	/// Whether an image is available to convert.
	pub fn has_image(&self) -> bool {
		self.image.is_some()
	}

	/// Left edge of an image of `width` pixels centred on the surface.
	fn image_left(&self, width: u32) -> f64 {
		self.simulator.surface().width() / 2.0 - width as f64 / 2.0
	}

	/// Stop the animation and show `image` centred along the top edge.
	pub fn on_image_loaded(&mut self, image: S::Image) {
		info!(
			"image-particles: loaded {}x{} image",
			image.width(),
			image.height()
		);
		let left = self.image_left(image.width());
		self.simulator.halt();
		let surface = self.simulator.surface_mut();
		surface.clear();
		surface.draw_image(&image, left, 0.0);
		self.image = Some(image);
	}

	/// Sample the loaded image into a fresh particle field and start animating.
	///
	/// Returns `false` without touching anything when no image is loaded.
	/// Also returns `false` when the pixels cannot be read back; by then the
	/// animation is stopped and the image redrawn, while the previous particles
	/// are kept until the next successful convert.
	pub fn on_convert_requested(&mut self) -> bool {
		let Some(image) = &self.image else {
			return false;
		};
		let (width, height) = (image.width(), image.height());
		let left = self.image_left(width);

		self.simulator.halt();
		let surface = self.simulator.surface_mut();
		surface.clear();
		surface.draw_image(image, left, 0.0);
		let Some(pixels) = surface.read_pixels(left, 0.0, width, height) else {
			return false;
		};

		let seeds = sample(
			&pixels,
			width,
			height,
			left,
			self.config.step(),
			self.config.size as f64,
		);
		info!("image-particles: sampled {} particles", seeds.len());

		self.simulator.reset_and_seed(&seeds);
		self.simulator.draw();
		self.simulator.animate();
		true
	}

	/// Pointer moved to `(x, y)` in surface coordinates.
	pub fn on_pointer_moved(&mut self, x: f64, y: f64) {
		self.simulator.set_pointer(x, y);
	}

	/// Frame callback body.
	pub fn on_frame(&mut self) {
		self.simulator.animate();
	}
}
