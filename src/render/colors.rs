use std::fmt;

use thiserror::Error;

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Fill of the synthetic "Others" tile and of unchanged groups.
pub const OTHERS_COLOR: Color = Color::from_rgb24(0x90A4AE);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color '{0}' (expected #RRGGBB)")]
pub struct ColorError(pub String);

impl Color {
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// From a packed `0xRRGGBB` literal.
    pub const fn from_rgb24(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    /// Parse `#RRGGBB` (the `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_rgb24)
            .map_err(|_| ColorError(s.to_string()))
    }

    /// `#RRGGBB`, uppercase.
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// YIQ brightness, 0..=255.
    pub fn luma(self) -> f64 {
        (self.r as f64 * 299.0 + self.g as f64 * 587.0 + self.b as f64 * 114.0) / 1000.0
    }

    /// Black on light fills, white on dark ones.
    pub fn contrast_text(self) -> Color {
        if self.luma() >= 128.0 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Comparison a value must pass for a step to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// `value <= t`
    AtMost(f64),
    /// `value < t`
    Below(f64),
    /// `value == t`
    Exactly(f64),
}

impl Bound {
    pub fn contains(self, value: f64) -> bool {
        match self {
            Bound::AtMost(t) => value <= t,
            Bound::Below(t) => value < t,
            Bound::Exactly(t) => value == t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStep {
    pub bound: Bound,
    pub color: Color,
}

const fn step(bound: Bound, rgb: u32) -> ColorStep {
    ColorStep {
        bound,
        color: Color::from_rgb24(rgb),
    }
}

/// Step function from a percentage change to a fill color.
///
/// Steps are tried in order and the first match wins; values passing no step
/// get `above`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    /// Magnitudes below this are treated as exactly 0
    pub dead_zone: f64,
    pub steps: Vec<ColorStep>,
    pub above: Color,
}

impl ColorScale {
    pub fn new(steps: Vec<ColorStep>, above: Color) -> Self {
        Self {
            dead_zone: 0.0,
            steps,
            above,
        }
    }

    pub fn with_dead_zone(mut self, dead_zone: f64) -> Self {
        self.dead_zone = dead_zone;
        self
    }

    /// Seven bands used by the preview image and the holdings table.
    pub fn og() -> Self {
        Self::new(
            vec![
                step(Bound::AtMost(-7.0), 0x991B1B),
                step(Bound::AtMost(-1.0), 0xDC2626),
                step(Bound::Below(0.0), 0xFF5252),
                step(Bound::Exactly(0.0), 0x90A4AE),
                step(Bound::Below(1.0), 0x4DD8A3),
                step(Bound::Below(7.0), 0x0EB784),
            ],
            Color::from_rgb24(0x047857),
        )
        .with_dead_zone(0.001)
    }

    /// Nine bands with paler colors for sub-0.01% moves, used by the
    /// interactive treemap.
    pub fn detailed() -> Self {
        Self::new(
            vec![
                step(Bound::AtMost(-7.0), 0x991B1B),
                step(Bound::AtMost(-1.0), 0xDC2626),
                step(Bound::AtMost(-0.01), 0xFF5252),
                step(Bound::Below(0.0), 0xFA9393),
                step(Bound::Exactly(0.0), 0x90A4AE),
                step(Bound::Below(0.01), 0x79F2C0),
                step(Bound::Below(1.0), 0x4DD8A3),
                step(Bound::Below(7.0), 0x0EB784),
            ],
            Color::from_rgb24(0x047857),
        )
        .with_dead_zone(0.001)
    }

    /// `percentage` with the dead zone applied; NaN counts as no change.
    pub fn effective(&self, percentage: f64) -> f64 {
        if percentage.is_nan() || percentage.abs() < self.dead_zone {
            0.0
        } else {
            percentage
        }
    }

    pub fn color_for(&self, percentage: f64) -> Color {
        let value = self.effective(percentage);
        self.steps
            .iter()
            .find(|s| s.bound.contains(value))
            .map(|s| s.color)
            .unwrap_or(self.above)
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::og()
    }
}
