//! Image particles and the rule that moves them each frame.

use super::color::Rgba;
use super::types::ParticleSeed;

/// Particles closer than this to the pointer are pushed away.
pub const REPULSION_RADIUS: f64 = 50.0;
/// Per-frame displacement applied to a repelled particle.
pub const REPULSION_STEP: f64 = 50.0;
/// Fraction of the remaining distance to its origin a particle covers per frame.
pub const RETURN_DAMPING: f64 = 0.03;

/// Pointer position in surface-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	/// Horizontal offset from the surface's left edge.
	pub x: f64,
	/// Vertical offset from the surface's top edge.
	pub y: f64,
}

/// A single image particle.
///
/// Only `x`/`y` change after creation; origin, color and size are fixed.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Current x, moved every frame.
	pub x: f64,
	/// Current y, moved every frame.
	pub y: f64,
	base_x: f64,
	base_y: f64,
	color: Rgba,
	size: f64,
}

impl From<&ParticleSeed> for Particle {
	fn from(seed: &ParticleSeed) -> Self {
		Self {
			x: seed.x,
			y: seed.y,
			base_x: seed.x,
			base_y: seed.y,
			color: seed.color,
			size: seed.size,
		}
	}
}

impl Particle {
	/// Position the particle was sampled at.
	pub fn base(&self) -> (f64, f64) {
		(self.base_x, self.base_y)
	}

	/// Sampled pixel color.
	pub fn color(&self) -> Rgba {
		self.color
	}

	/// Disk radius.
	pub fn size(&self) -> f64 {
		self.size
	}

	/// Advance one frame.
	///
	/// Inside the repulsion radius the particle jumps [`REPULSION_STEP`] straight
	/// away from the pointer; otherwise it eases toward its origin. Without a
	/// pointer only the easing applies.
	pub fn step(&mut self, pointer: Option<Pointer>) {
		if let Some(p) = pointer {
			let (dx, dy) = (self.x - p.x, self.y - p.y);
			if (dx * dx + dy * dy).sqrt() < REPULSION_RADIUS {
				let angle = dy.atan2(dx);
				self.x += angle.cos() * REPULSION_STEP;
				self.y += angle.sin() * REPULSION_STEP;
				return;
			}
		}

		self.x += (self.base_x - self.x) * RETURN_DAMPING;
		self.y += (self.base_y - self.y) * RETURN_DAMPING;
	}
}
