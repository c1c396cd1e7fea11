//! RGB↔HSL conversion and lightness perturbation.
//!
//! The stroke generator tints sub-dabs by nudging lightness only, so hue
//! and saturation of the sampled color survive exactly. HSL is the natural
//! space for that: [`vary_brightness`] round-trips through [`Hsl`], shifts
//! `l`, and converts back.
//!
//! All components are normalized to `[0, 1]`. Achromatic colors
//! (`max == min`) have hue and saturation defined as 0.

use super::Rgb;

/// A color in hue/saturation/lightness form, each component in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    /// Create an HSL color. Components are not clamped; conversion back to
    /// RGB clamps the result.
    #[inline]
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }
}

impl From<Rgb> for Hsl {
    /// Standard hue/saturation/lightness decomposition of an 8-bit color.
    fn from(color: Rgb) -> Self {
        let r = color.r as f32 / 255.0;
        let g = color.g as f32 / 255.0;
        let b = color.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic: hue and saturation are 0 by definition.
            return Self { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let sextant = if max == r {
            let wrap = if g < b { 6.0 } else { 0.0 };
            (g - b) / d + wrap
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self {
            h: sextant / 6.0,
            s,
            l,
        }
    }
}

impl From<Hsl> for Rgb {
    /// Convert back to 8-bit RGB, rounding each channel to the nearest
    /// integer. `s == 0` produces the achromatic gray `round(l * 255)`.
    fn from(hsl: Hsl) -> Self {
        let Hsl { h, s, l } = hsl;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        Rgb::new(to_u8(r), to_u8(g), to_u8(b))
    }
}

/// Evaluate one channel of the piecewise hue ramp.
#[inline]
fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Shift a color's lightness by `amount`, clamping lightness to `[0, 1]`.
///
/// This is the only color perturbation in the pipeline: hue and saturation
/// pass through the HSL round trip untouched, so a jittered dab keeps the
/// chroma of the pixel it sampled.
#[inline]
pub fn vary_brightness(color: Rgb, amount: f32) -> Rgb {
    let mut hsl = Hsl::from(color);
    hsl.l = (hsl.l + amount).clamp(0.0, 1.0);
    Rgb::from(hsl)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32, tol: f32, what: &str) {
        assert!(
            (a - b).abs() < tol,
            "{what}: {a} vs {b} differs by more than {tol}"
        );
    }

    // ===== Known decompositions =====

    #[test]
    fn test_primaries() {
        let red = Hsl::from(Rgb::new(255, 0, 0));
        assert_close(red.h, 0.0, 1e-6, "red hue");
        assert_close(red.s, 1.0, 1e-6, "red saturation");
        assert_close(red.l, 0.5, 1e-6, "red lightness");

        let green = Hsl::from(Rgb::new(0, 255, 0));
        assert_close(green.h, 1.0 / 3.0, 1e-6, "green hue");

        let blue = Hsl::from(Rgb::new(0, 0, 255));
        assert_close(blue.h, 2.0 / 3.0, 1e-6, "blue hue");
    }

    #[test]
    fn test_achromatic_has_zero_hue_and_saturation() {
        for v in [0u8, 1, 64, 127, 128, 200, 255] {
            let hsl = Hsl::from(Rgb::new(v, v, v));
            assert_eq!(hsl.h, 0.0, "gray {v} hue");
            assert_eq!(hsl.s, 0.0, "gray {v} saturation");
            assert_close(hsl.l, v as f32 / 255.0, 1e-6, "gray lightness");
        }
    }

    #[test]
    fn test_zero_saturation_converts_to_gray() {
        let rgb = Rgb::from(Hsl::new(0.42, 0.0, 0.5));
        assert_eq!(rgb, Rgb::new(128, 128, 128));
    }

    // ===== Round trip =====

    #[test]
    fn test_round_trip_within_one_per_channel() {
        // Every channel value appears on a grid dense enough to exercise all
        // six hue sextants and both lightness branches.
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(15) {
                for b in (0..=255).step_by(15) {
                    let input = Rgb::new(r as u8, g as u8, b as u8);
                    let output = Rgb::from(Hsl::from(input));
                    assert!(
                        (input.r as i16 - output.r as i16).abs() <= 1
                            && (input.g as i16 - output.g as i16).abs() <= 1
                            && (input.b as i16 - output.b as i16).abs() <= 1,
                        "round trip drifted: {input:?} -> {output:?}"
                    );
                }
            }
        }
    }

    // ===== vary_brightness =====

    #[test]
    fn test_vary_brightness_zero_amount_is_near_identity() {
        for (r, g, b) in [(255, 0, 0), (12, 200, 31), (90, 90, 91)] {
            let input = Rgb::new(r, g, b);
            let output = vary_brightness(input, 0.0);
            assert!(
                (input.r as i16 - output.r as i16).abs() <= 1
                    && (input.g as i16 - output.g as i16).abs() <= 1
                    && (input.b as i16 - output.b as i16).abs() <= 1,
                "zero shift moved {input:?} to {output:?}"
            );
        }
    }

    #[test]
    fn test_vary_brightness_clamps_lightness() {
        assert_eq!(vary_brightness(Rgb::new(200, 100, 50), 5.0), Rgb::new(255, 255, 255));
        assert_eq!(vary_brightness(Rgb::new(200, 100, 50), -5.0), Rgb::BLACK);
    }

    #[test]
    fn test_vary_brightness_preserves_hue_and_saturation() {
        let input = Rgb::new(200, 60, 30);
        let before = Hsl::from(input);
        for amount in [-0.3, -0.1, 0.05, 0.25] {
            let after = Hsl::from(vary_brightness(input, amount));
            assert_close(after.h, before.h, 0.01, "hue after lightness shift");
            assert_close(after.s, before.s, 0.02, "saturation after lightness shift");
        }
    }

    // ===== Cross-check against the palette crate =====

    #[test]
    fn test_matches_palette_crate() {
        use palette::{FromColor, Hsl as RefHsl, Srgb as RefSrgb};

        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(17) {
                    let ours = Hsl::from(Rgb::new(r as u8, g as u8, b as u8));
                    let reference = RefHsl::from_color(RefSrgb::new(
                        r as f32 / 255.0,
                        g as f32 / 255.0,
                        b as f32 / 255.0,
                    ));

                    assert_close(ours.s, reference.saturation, 1e-3, "saturation");
                    assert_close(ours.l, reference.lightness, 1e-3, "lightness");

                    if ours.s > 1e-4 {
                        let ref_deg = reference.hue.into_positive_degrees();
                        let diff = (ours.h * 360.0 - ref_deg + 180.0).rem_euclid(360.0) - 180.0;
                        assert!(
                            diff.abs() < 0.2,
                            "hue for ({r},{g},{b}): {} vs {} degrees",
                            ours.h * 360.0,
                            ref_deg
                        );
                    }
                }
            }
        }
    }
}
