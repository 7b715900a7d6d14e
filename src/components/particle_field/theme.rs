//! Color themes for the decoration layer.
//!
//! The site ships the same effects in two palettes; a theme bundles the
//! handful of colors the canvas and the hero gradient need.

use log::warn;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha, 0.0 to 1.0.
	pub a: f64,
}

impl Color {
	/// Opaque color from channel values.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with an explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with the alpha replaced.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS color string: hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Theme name as referenced from configuration.
	pub name: &'static str,
	/// Particle fill color.
	pub particle: Color,
	/// Link stroke color; per-link alpha replaces its alpha channel.
	pub link: Color,
	/// Accent used by the hero gradient recoloring.
	pub accent: Color,
}

impl Theme {
	/// Warm house theme (default).
	pub fn ember() -> Self {
		Self {
			name: "ember",
			particle: Color::rgba(255, 90, 54, 0.8),
			link: Color::rgb(255, 90, 54),
			accent: Color::rgb(255, 90, 54),
		}
	}

	/// Cool variant of the same layout.
	pub fn deep_sea() -> Self {
		Self {
			name: "deep_sea",
			particle: Color::rgba(64, 156, 255, 0.8),
			link: Color::rgb(64, 156, 255),
			accent: Color::rgb(64, 156, 255),
		}
	}

	/// Look up a theme by its configured name, falling back to [`Theme::ember`].
	pub fn by_name(name: &str) -> Self {
		match name {
			"ember" => Self::ember(),
			"deep_sea" => Self::deep_sea(),
			other => {
				warn!("landing-fx: unknown theme {:?}, using ember", other);
				Self::ember()
			}
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::ember()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_opaque_color_formats_as_hex() {
		assert_eq!(Color::rgb(255, 90, 54).to_css(), "#ff5a36");
	}

	#[test]
	fn test_translucent_color_formats_as_rgba() {
		assert_eq!(
			Color::rgba(255, 90, 54, 0.25).to_css(),
			"rgba(255, 90, 54, 0.25)"
		);
	}

	#[test]
	fn test_with_alpha_keeps_channels() {
		let c = Color::rgb(10, 20, 30).with_alpha(0.5);
		assert_eq!((c.r, c.g, c.b), (10, 20, 30));
		assert_eq!(c.a, 0.5);
	}

	#[test]
	fn test_by_name_finds_both_themes() {
		assert_eq!(Theme::by_name("ember").name, "ember");
		assert_eq!(Theme::by_name("deep_sea").name, "deep_sea");
	}

	#[test]
	fn test_by_name_falls_back_to_ember() {
		assert_eq!(Theme::by_name("lava-lamp").name, "ember");
	}
}
