//! Iteration-count to color mapping.
//!
//! Three palettes are available: a six-wedge walk around the HSV hue wheel
//! and two "legacy" palettes that reinterpret a scaled count as packed RGB
//! bytes. Blended fractal modes color each of their two counts separately
//! and merge the results with [`blend`].

use fractalspace_core::{BlendRule, Evaluation};

use crate::color::Rgb;

/// The HSV wheel paints this exact count pure red once it falls past the
/// sixth milestone. It is a fixed literal, not derived from the cap, so it
/// only ever fires when the cap itself is 255.
pub const LEGACY_RED_ITERATIONS: u32 = 255;

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Color scheme applied to escape-time counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    #[default]
    HsvWheel,
    RgbShift23,
    RgbShift25,
}

impl Palette {
    pub const ALL: [Palette; 3] = [Self::HsvWheel, Self::RgbShift23, Self::RgbShift25];

    pub fn label(self) -> &'static str {
        match self {
            Self::HsvWheel => "HSV",
            Self::RgbShift23 => "RGB shifted 23",
            Self::RgbShift25 => "RGB shifted 25",
        }
    }

    /// HSV → RGB shifted 23 → RGB shifted 25 → HSV.
    pub fn next(self) -> Self {
        match self {
            Self::HsvWheel => Self::RgbShift23,
            Self::RgbShift23 => Self::RgbShift25,
            Self::RgbShift25 => Self::HsvWheel,
        }
    }

    /// HSV → RGB shifted 25 → RGB shifted 23 → HSV.
    pub fn prev(self) -> Self {
        match self {
            Self::HsvWheel => Self::RgbShift25,
            Self::RgbShift25 => Self::RgbShift23,
            Self::RgbShift23 => Self::HsvWheel,
        }
    }

    /// Map an escape-time count under iteration cap `cap` to a color.
    /// Display color for a count, with every channel in `[0, 1]`.
    #[inline]
    pub fn color(self, iterations: u32, cap: u32) -> Rgb {
        self.raw_color(iterations, cap).clamped()
    }

    /// Unclamped color. The HSV wheel leaves `[0, 1]` past its first wedge;
    /// additive blending must see these values before any clamp.
    #[inline]
    pub fn raw_color(self, iterations: u32, cap: u32) -> Rgb {
        match self {
            Self::HsvWheel => hsv_wheel(iterations, cap),
            Self::RgbShift23 => legacy_channel_shift(iterations, cap, 23),
            Self::RgbShift25 => legacy_channel_shift(iterations, cap, 25),
        }
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// HSV wheel
// ---------------------------------------------------------------------------

/// Walk red → yellow → green → cyan → blue → magenta over six milestones of
/// `cap / 6` iterations each.
///
/// `ratio` is the count measured in milestones and is *not* reset per
/// wedge, so only the first wedge produces a true gradient. Later wedges
/// return channels outside `[0, 1]`; they saturate once clamped for
/// display. Counts at or past the cap are black, except for
/// [`LEGACY_RED_ITERATIONS`].
pub fn hsv_wheel(iterations: u32, cap: u32) -> Rgb {
    let milestone = cap as f64 / 6.0;
    let ratio = iterations as f64 / milestone;

    // `iterations < (k + 1) * cap / 6`, compared in integers to stay exact.
    let six_n = 6 * iterations as u64;
    let wedge = (0..6u64).find(|&k| six_n < (k + 1) * cap as u64);

    match wedge {
        Some(0) => Rgb::new(1.0, ratio, 0.0),
        Some(1) => Rgb::new(1.0 - ratio, 1.0, 0.0),
        Some(2) => Rgb::new(0.0, 1.0, ratio),
        Some(3) => Rgb::new(0.0, 1.0 - ratio, 1.0),
        Some(4) => Rgb::new(ratio, 0.0, 1.0),
        Some(_) => Rgb::new(1.0, 0.0, 1.0 - ratio),
        None if iterations == LEGACY_RED_ITERATIONS => Rgb::RED,
        None => Rgb::BLACK,
    }
}

// ---------------------------------------------------------------------------
// Legacy byte-shift palette
// ---------------------------------------------------------------------------

/// Legacy palette: scale the count so that `cap` maps to `2^shift`, truncate
/// to a `u32`, and read its low three bytes as blue, green and red.
///
/// This reproduces a packed-integer reinterpretation trick. Bytes are taken
/// arithmetically (`(value >> 8n) & 0xFF`) so the result does not depend on
/// host endianness: red is byte 2, green byte 1, blue byte 0.
pub fn legacy_channel_shift(iterations: u32, cap: u32, shift: u32) -> Rgb {
    let lsb = cap as f64 / (1u64 << shift) as f64;
    let value = (iterations as f64 / lsb) as u32;
    let byte = |n: u32| ((value >> (8 * n)) & 0xFF) as f64 / 255.0;
    Rgb::new(byte(2), byte(1), byte(0))
}

// ---------------------------------------------------------------------------
// Blending
// ---------------------------------------------------------------------------

/// Merge the Julia and Mandelbrot colors of a blended mode.
pub fn blend(rule: BlendRule, a: Rgb, b: Rgb) -> Rgb {
    match rule {
        BlendRule::Additive => a.zip_with(b, |x, y| {
            let mut sum = x + y;
            while sum > 1.0 {
                sum -= 1.0;
            }
            sum
        }),
        BlendRule::Max => a.zip_with(b, f64::max),
    }
}

/// Color one pixel's evaluation: raw palette colors, blend if needed, then
/// clamp the final color once.
#[inline]
pub fn shade(evaluation: Evaluation, palette: Palette, cap: u32) -> Rgb {
    match evaluation {
        Evaluation::Single(n) => palette.color(n, cap),
        Evaluation::Blended {
            julia,
            mandelbrot,
            rule,
        } => blend(
            rule,
            palette.raw_color(julia, cap),
            palette.raw_color(mandelbrot, cap),
        )
        .clamped(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx(a: Rgb, b: Rgb) -> bool {
        (a.r - b.r).abs() < EPSILON && (a.g - b.g).abs() < EPSILON && (a.b - b.b).abs() < EPSILON
    }

    #[test]
    fn first_wedge_ramps_green() {
        // cap 60 → milestone 10
        assert!(approx(hsv_wheel(0, 60), Rgb::new(1.0, 0.0, 0.0)));
        assert!(approx(hsv_wheel(5, 60), Rgb::new(1.0, 0.5, 0.0)));
        assert!(approx(hsv_wheel(9, 60), Rgb::new(1.0, 0.9, 0.0)));
    }

    #[test]
    fn later_wedges_leave_unit_range() {
        // ratio is global: 1.5, 2.5, 3.5, 4.5 and 5.5 milestones.
        assert!(approx(hsv_wheel(15, 60), Rgb::new(-0.5, 1.0, 0.0)));
        assert!(approx(hsv_wheel(25, 60), Rgb::new(0.0, 1.0, 2.5)));
        assert!(approx(hsv_wheel(35, 60), Rgb::new(0.0, -2.5, 1.0)));
        assert!(approx(hsv_wheel(45, 60), Rgb::new(4.5, 0.0, 1.0)));
        assert!(approx(hsv_wheel(55, 60), Rgb::new(1.0, 0.0, -4.5)));
    }

    #[test]
    fn later_wedges_saturate_for_display() {
        let hsv = Palette::HsvWheel;
        assert_eq!(hsv.color(15, 60), Rgb::new(0.0, 1.0, 0.0));
        assert_eq!(hsv.color(25, 60), Rgb::new(0.0, 1.0, 1.0));
        assert_eq!(hsv.color(35, 60), Rgb::new(0.0, 0.0, 1.0));
        assert_eq!(hsv.color(45, 60), Rgb::new(1.0, 0.0, 1.0));
        assert_eq!(hsv.color(55, 60), Rgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn wedge_boundaries_are_exact() {
        // cap 100: milestone 16.67, so 16 is wedge 0 and 17 is wedge 1.
        assert!(approx(hsv_wheel(16, 100), Rgb::new(1.0, 0.96, 0.0)));
        assert_eq!(Palette::HsvWheel.color(17, 100), Rgb::new(0.0, 1.0, 0.0));
        // 99 is still inside the last wedge, 100 is past it.
        assert_eq!(Palette::HsvWheel.color(99, 100), Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(hsv_wheel(100, 100), Rgb::BLACK);
    }

    #[test]
    fn small_cap_scenario() {
        // cap 4 → milestone 4/6; three steps land in wedge 4 (ratio 4.5).
        assert!(approx(hsv_wheel(3, 4), Rgb::new(4.5, 0.0, 1.0)));
        assert_eq!(Palette::HsvWheel.color(3, 4), Rgb::new(1.0, 0.0, 1.0));
        assert_eq!(hsv_wheel(4, 4), Rgb::BLACK);
    }

    #[test]
    fn legacy_red_only_at_255() {
        assert_eq!(hsv_wheel(255, 255), Rgb::RED);
        assert_eq!(hsv_wheel(256, 256), Rgb::BLACK);
        assert_eq!(hsv_wheel(254, 254), Rgb::BLACK);
    }

    #[test]
    fn shift23_packs_bytes() {
        // cap → 2^23 = 0x80_0000: red byte 0x80.
        assert_eq!(legacy_channel_shift(100, 100, 23), Rgb::new(128.0 / 255.0, 0.0, 0.0));
        // 1/100 of 2^23 = 83886.08 → 0x01_47AE
        assert_eq!(
            legacy_channel_shift(1, 100, 23),
            Rgb::new(1.0 / 255.0, 71.0 / 255.0, 174.0 / 255.0)
        );
        assert_eq!(legacy_channel_shift(0, 100, 23), Rgb::BLACK);
    }

    #[test]
    fn shift25_overflows_into_unused_byte_at_cap() {
        // 2^25 only sets byte 3, which is discarded.
        assert_eq!(legacy_channel_shift(100, 100, 25), Rgb::BLACK);
        // half the cap → 2^24 = 0x100_0000, also discarded.
        assert_eq!(legacy_channel_shift(50, 100, 25), Rgb::BLACK);
        // a quarter → 2^23
        assert_eq!(legacy_channel_shift(25, 100, 25), Rgb::new(128.0 / 255.0, 0.0, 0.0));
    }

    #[test]
    fn palette_dispatch() {
        assert_eq!(Palette::HsvWheel.raw_color(3, 4), hsv_wheel(3, 4));
        assert_eq!(Palette::HsvWheel.color(3, 4), hsv_wheel(3, 4).clamped());
        assert_eq!(Palette::RgbShift23.color(7, 100), legacy_channel_shift(7, 100, 23));
        assert_eq!(Palette::RgbShift25.color(7, 100), legacy_channel_shift(7, 100, 25));
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(Palette::HsvWheel.next(), Palette::RgbShift23);
        assert_eq!(Palette::RgbShift23.next(), Palette::RgbShift25);
        assert_eq!(Palette::RgbShift25.next(), Palette::HsvWheel);
        assert_eq!(Palette::HsvWheel.prev(), Palette::RgbShift25);
        for p in Palette::ALL {
            assert_eq!(p.next().next().next(), p);
            assert_eq!(p.prev().next(), p);
        }
    }

    #[test]
    fn additive_blend_wraps() {
        let a = Rgb::new(0.75, 1.0, 0.25);
        let b = Rgb::new(0.5, 1.0, 0.25);
        // 1.25 → 0.25 ; 2.0 → 1.0 (not > 1.0 after one step) ; 0.5 stays
        assert!(approx(blend(BlendRule::Additive, a, b), Rgb::new(0.25, 1.0, 0.5)));
    }

    #[test]
    fn max_blend_takes_brighter_channel() {
        let a = Rgb::new(0.2, 0.8, 0.0);
        let b = Rgb::new(0.6, 0.1, 0.0);
        assert_eq!(blend(BlendRule::Max, a, b), Rgb::new(0.6, 0.8, 0.0));
    }

    #[test]
    fn additive_hsv_wraps_raw_channels_before_clamping() {
        // julia 40/100: wedge 2, raw (0, 1, 2.4)
        // mandelbrot 10/100: wedge 0, raw (1, 0.6, 0)
        // sum (1, 1.6, 2.4) wraps to (1, 0.6, 0.4)
        let eval = Evaluation::Blended {
            julia: 40,
            mandelbrot: 10,
            rule: BlendRule::Additive,
        };
        assert!(approx(
            shade(eval, Palette::HsvWheel, 100),
            Rgb::new(1.0, 0.6, 0.4)
        ));
    }

    #[test]
    fn additive_hsv_clamps_negative_sums() {
        // julia 15/60: wedge 1, raw (-0.5, 1, 0)
        // mandelbrot 0/60: wedge 0, raw (1, 0, 0)
        // sum (0.5, 1, 0); then julia 35/60 raw (0, -2.5, 1) + (1, 0, 0) = (1, -2.5, 1)
        let first = Evaluation::Blended {
            julia: 15,
            mandelbrot: 0,
            rule: BlendRule::Additive,
        };
        assert!(approx(
            shade(first, Palette::HsvWheel, 60),
            Rgb::new(0.5, 1.0, 0.0)
        ));
        let second = Evaluation::Blended {
            julia: 35,
            mandelbrot: 0,
            rule: BlendRule::Additive,
        };
        assert_eq!(
            shade(second, Palette::HsvWheel, 60),
            Rgb::new(1.0, 0.0, 1.0)
        );
    }

    #[test]
    fn max_hsv_matches_clamped_colors() {
        // julia 1/4 raw (-0.5, 1, 0), mandelbrot 3/4 raw (4.5, 0, 1)
        let eval = Evaluation::Blended {
            julia: 1,
            mandelbrot: 3,
            rule: BlendRule::Max,
        };
        assert_eq!(shade(eval, Palette::HsvWheel, 4), Rgb::new(1.0, 1.0, 1.0));
        assert_eq!(
            shade(Evaluation::Single(3), Palette::HsvWheel, 4),
            Rgb::new(1.0, 0.0, 1.0)
        );
    }
}
