/// An RGB color with floating-point channels, nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Combine two colors channel by channel.
    #[inline]
    pub fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self {
            r: f(self.r, other.r),
            g: f(self.g, other.g),
            b: f(self.b, other.b),
        }
    }

    /// Clamp every channel into `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Opaque 8-bit RGBA, rounding each channel to the nearest level.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let level = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [level(self.r), level(self.g), level(self.b), 255]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limits_channels() {
        assert_eq!(Rgb::new(4.5, -0.25, 1.0).clamped(), Rgb::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn rgba8_conversion() {
        assert_eq!(Rgb::BLACK.to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(Rgb::new(1.0, 0.5, 128.0 / 255.0).to_rgba8(), [255, 128, 128, 255]);
    }

    #[test]
    fn zip_with_applies_per_channel() {
        let a = Rgb::new(0.1, 0.9, 0.5);
        let b = Rgb::new(0.4, 0.2, 0.5);
        assert_eq!(a.zip_with(b, f64::max), Rgb::new(0.4, 0.9, 0.5));
    }
}
