//! Colors sampled from source images.

/// RGBA color with every channel stored as the raw byte read from the image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgba {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha channel as stored in the image, 0 = transparent.
	pub a: u8,
}

impl Rgba {
	/// Fully transparent black, used when a pixel cannot be read.
	pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

	/// Build a color from raw channel bytes.
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self { r, g, b, a }
	}

	/// Reads one pixel from a row-major RGBA buffer at byte offset `idx`.
	/// Returns [`Rgba::TRANSPARENT`] when the pixel lies outside the buffer.
	pub fn from_slice(data: &[u8], idx: usize) -> Self {
		match data.get(idx..idx + 4) {
			Some(&[r, g, b, a]) => Self { r, g, b, a },
			_ => Self::TRANSPARENT,
		}
	}

	/// CSS `rgba()` notation, suitable for `fillStyle`.
	///
	/// The alpha byte is written as-is. CSS clamps it to `1`, so every pixel
	/// with non-zero alpha is drawn opaque and only fully transparent pixels
	/// vanish.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reads_pixel_at_offset() {
		let data = [0, 0, 0, 0, 10, 20, 30, 40];
		assert_eq!(Rgba::from_slice(&data, 4), Rgba::new(10, 20, 30, 40));
	}

	#[test]
	fn short_buffer_reads_transparent() {
		let data = [1, 2, 3, 4, 5, 6];
		assert_eq!(Rgba::from_slice(&data, 4), Rgba::TRANSPARENT);
		assert_eq!(Rgba::from_slice(&data, 400), Rgba::TRANSPARENT);
	}

	#[test]
	fn css_keeps_raw_alpha_byte() {
		assert_eq!(Rgba::new(10, 20, 30, 40).to_css(), "rgba(10, 20, 30, 40)");
		assert_eq!(Rgba::new(10, 20, 30, 255).to_css(), "rgba(10, 20, 30, 255)");
		assert_eq!(Rgba::TRANSPARENT.to_css(), "rgba(0, 0, 0, 0)");
	}
}
