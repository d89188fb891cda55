//! Converts image pixels into particle seeds.

use super::color::Rgba;
use super::types::ParticleSeed;

/// Samples a row-major RGBA buffer on a regular grid.
///
/// Visits `y` in `0..height` and, for each row, `x` in `0..width`, both in
/// increments of `step`, emitting one seed per visited pixel at
/// `(x + origin_offset_x, y)`. Seeds come out in raster order, so the result
/// holds `ceil(width / step) * ceil(height / step)` entries.
///
/// A buffer shorter than `width * height * 4` is tolerated: missing pixels
/// read as transparent.
pub fn sample(
	pixels: &[u8],
	width: u32,
	height: u32,
	origin_offset_x: f64,
	step: u32,
	size: f64,
) -> Vec<ParticleSeed> {
	let step = step.max(1) as usize;
	let (width, height) = (width as usize, height as usize);
	let mut seeds = Vec::with_capacity(width.div_ceil(step) * height.div_ceil(step));

	for y in (0..height).step_by(step) {
		for x in (0..width).step_by(step) {
			seeds.push(ParticleSeed {
				x: x as f64 + origin_offset_x,
				y: y as f64,
				color: Rgba::from_slice(pixels, (y * width + x) * 4),
				size,
			});
		}
	}

	seeds
}
