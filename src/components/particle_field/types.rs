//! Data passed between the sampler and the field simulator, plus startup config.

use serde::Deserialize;

use super::color::Rgba;

/// Starting point for one particle, produced by the sampler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSeed {
	/// Origin x in surface coordinates.
	pub x: f64,
	/// Origin y in surface coordinates.
	pub y: f64,
	/// Pixel color at the sampled location.
	pub color: Rgba,
	/// Disk radius.
	pub size: f64,
}

/// Sampling and layout options read once at startup.
///
/// Physics constants are fixed and not part of this config.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
	/// Particle radius in pixels.
	pub size: u32,
	/// Empty pixels between neighbouring particles.
	pub gap: u32,
	/// Vertical space below the canvas left for the page controls.
	pub reserved_height: f64,
}

impl ParticleConfig {
	/// Distance between sampled pixels. Never zero.
	pub fn step(&self) -> u32 {
		(self.size + self.gap).max(1)
	}
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			size: 2,
			gap: 4,
			reserved_height: 240.0,
		}
	}
}
