//! Colours and visual style for the particle field.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Parses `#RRGGBB`, `#RGB` or `rgb()`/`rgba()` notation.
	pub fn parse(s: &str) -> Option<Self> {
		let s = s.trim();
		if let Some(hex) = s.strip_prefix('#') {
			let channel =
				|i: usize, w: usize| -> Option<u8> { u8::from_str_radix(hex.get(i..i + w)?, 16).ok() };
			return match hex.len() {
				6 => Some(Self::rgb(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
				3 => {
					let (r, g, b) = (channel(0, 1)?, channel(1, 1)?, channel(2, 1)?);
					Some(Self::rgb(r * 17, g * 17, b * 17))
				}
				_ => None,
			};
		}

		let inner = s
			.strip_prefix("rgba(")
			.or_else(|| s.strip_prefix("rgb("))?
			.strip_suffix(')')?;
		let nums: Vec<&str> = inner.split(',').map(str::trim).collect();
		if !(3..=4).contains(&nums.len()) {
			return None;
		}
		let a = match nums.get(3) {
			Some(a) => a.parse::<f64>().ok()?.clamp(0.0, 1.0),
			None => 1.0,
		};
		Some(Self::rgba(
			nums[0].parse().ok()?,
			nums[1].parse().ok()?,
			nums[2].parse().ok()?,
			a,
		))
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

impl TryFrom<String> for Color {
	type Error = String;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(&value).ok_or_else(|| format!("invalid color: {value:?}"))
	}
}

/// Visual style of particles and their proximity links.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FieldStyle {
	/// Fill colour of particles and stroke colour of links.
	pub color: Color,
	/// Stroke width of proximity links.
	pub link_width: f64,
	/// Alpha of a link between two coincident particles; fades to 0 at link distance.
	pub link_alpha: f64,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			color: Color::rgb(0, 191, 255),
			link_width: 1.0,
			link_alpha: 0.2,
		}
	}
}
