//! Image-to-particle field.
//!
//! Turns a picture into a grid of colored dots on an HTML canvas and keeps
//! them moving:
//! - [`sample`] reads the drawn image back and emits one seed per grid cell
//! - Each frame, particles near the pointer jump away from it and the rest
//!   ease back toward where they were sampled
//! - The whole canvas is cleared and redrawn every frame
//!
//! # Example
//!
//! ```ignore
//! use image_particles::{ParticleConfig, ParticleFieldCanvas};
//!
//! view! { <ParticleFieldCanvas config=ParticleConfig::default() /> }
//! ```

mod color;
mod component;
mod particles;
mod render;
mod sampler;
mod state;
#[cfg(test)]
mod testing;
mod types;

pub use color::Rgba;
pub use component::ParticleFieldCanvas;
pub use particles::{Particle, Pointer, REPULSION_RADIUS, REPULSION_STEP, RETURN_DAMPING};
pub use render::{AnimationFrames, CanvasSurface, FrameHandle, FrameScheduler, RasterImage, Surface};
pub use sampler::sample;
pub use state::{FieldSimulator, ParticleFieldState};
pub use types::{ParticleConfig, ParticleSeed};
