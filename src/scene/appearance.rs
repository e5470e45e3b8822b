use std::fmt;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const BLACK: Self = Self(0x00_0000);
    pub const WHITE: Self = Self(0xff_ffff);

    /// Creates a color from `0xRRGGBB`, ignoring bits above 24.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0xff_ffff)
    }

    /// Returns the `[r, g, b]` components scaled to `0.0..=1.0`.
    #[must_use]
    pub fn to_unit(self) -> [f64; 3] {
        let [_, r, g, b] = self.0.to_be_bytes();
        [r, g, b].map(|c| f64::from(c) / 255.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// The overridable visual state of an engine material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub color: Rgb,
    pub emissive: Rgb,
    pub opacity: f64,
    pub transparent: bool,
    /// `None` when the material model has no metalness channel.
    pub metalness: Option<f64>,
    /// `None` when the material model has no roughness channel.
    pub roughness: Option<f64>,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            color: Rgb::WHITE,
            emissive: Rgb::BLACK,
            opacity: 1.0,
            transparent: false,
            metalness: None,
            roughness: None,
        }
    }
}
