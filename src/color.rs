//! Color values and the ramps used by continuous color scales.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Linear interpolation between two colors, `t` clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f32::from(a) * (1.0 - t) + f32::from(b) * t) as u8;
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

/// Viridis ramp (perceptually uniform), default for continuous color scales.
pub const VIRIDIS: [Rgba; 5] = [
    Rgba::rgb(68, 1, 84),
    Rgba::rgb(59, 82, 139),
    Rgba::rgb(33, 145, 140),
    Rgba::rgb(94, 201, 98),
    Rgba::rgb(253, 231, 37),
];

/// Sequential blue ramp.
pub const BLUES: [Rgba; 5] = [
    Rgba::rgb(247, 251, 255),
    Rgba::rgb(198, 219, 239),
    Rgba::rgb(107, 174, 214),
    Rgba::rgb(33, 113, 181),
    Rgba::rgb(8, 48, 107),
];

/// Heat ramp (black through red and yellow to white).
pub const HEAT: [Rgba; 6] = [
    Rgba::rgb(0, 0, 0),
    Rgba::rgb(128, 0, 0),
    Rgba::rgb(255, 0, 0),
    Rgba::rgb(255, 128, 0),
    Rgba::rgb(255, 255, 0),
    Rgba::rgb(255, 255, 255),
];

/// Default discrete palette for categorical color assignment.
pub const DISCRETE_PALETTE: [Rgba; 8] = [
    Rgba::rgb(31, 119, 180),
    Rgba::rgb(255, 127, 14),
    Rgba::rgb(44, 160, 44),
    Rgba::rgb(214, 39, 40),
    Rgba::rgb(148, 103, 189),
    Rgba::rgb(140, 86, 75),
    Rgba::rgb(227, 119, 194),
    Rgba::rgb(127, 127, 127),
];
