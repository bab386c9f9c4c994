//! The `Color` value type.
//!
//! A `Color` is an immutable triple of channel components bound to a
//! colorspace, plus an alpha. Components live in **display form**: RGB
//! channels as 0-255 integers, hue in degrees, fractional channels in
//! [0, 1] at two decimals, Lab lightness as a 0-1 fraction with integer
//! opponent channels, alpha in [0, 1] unrounded. The unbounded spaces
//! (XYZ and linear RGB) keep raw coordinates.
//!
//! Only a hue slot may be `None`: an achromatic color in HWB has
//! whiteness and blackness but no hue direction, and that is a
//! different statement than "hue 0".

use tinct_space::{from_absolute, to_absolute, Coords, Space};
use tinct_units::{
    Angle, AngleUnit, Fraction, FractionUnit, Intensity, IntensityUnit, Kind, LinearIntensity,
};

use crate::error::Result;
use crate::parse;

/// An immutable color value.
///
/// # Example
///
/// ```rust
/// use tinct::{Color, Space};
///
/// let violet: Color = "#6f52c3".parse().unwrap();
/// let hsl = violet.convert(Space::Hsl);
/// assert_eq!(hsl.hue(), Some(255.0));
/// assert_eq!(hsl.saturation(), Some(0.48));
/// assert_eq!(hsl.lightness(), Some(0.54));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    space: Space,
    components: [Option<f64>; 3],
    alpha: f64,
}

impl Color {
    /// Creates a color, sanitizing each component with the quantity
    /// kind of its channel. A NaN component means "no value" and is
    /// stored as `None` (meaningful only for hue slots).
    pub fn new(space: Space, components: [f64; 3], alpha: f64) -> Self {
        let channels = space.channels();
        let mut sanitized = [None; 3];
        for (slot, &value) in components.iter().enumerate() {
            if value.is_nan() {
                continue;
            }
            sanitized[slot] = Some(match channels[slot].quantity() {
                Some(Kind::Angle) => Angle::sanitize(value, AngleUnit::Deg),
                Some(Kind::Intensity) => Intensity::sanitize(value, IntensityUnit::Bare),
                Some(Kind::Fraction) => Fraction::sanitize(value, FractionUnit::Bare),
                Some(Kind::LinearIntensity) => LinearIntensity::sanitize(value),
                None => value,
            });
        }
        Self {
            space,
            components: sanitized,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Parses a color from hex or functional notation.
    ///
    /// Equivalent to the `FromStr` impl; see the `parse` module docs
    /// for the recognized grammar.
    #[inline]
    pub fn parse(text: &str) -> Result<Self> {
        parse::parse(text)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The colorspace the components are expressed in.
    #[inline]
    pub fn space(&self) -> Space {
        self.space
    }

    /// The display-form components.
    #[inline]
    pub fn components(&self) -> [Option<f64>; 3] {
        self.components
    }

    /// The alpha channel, [0, 1].
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    fn slot(&self, space: Space, index: usize) -> Option<f64> {
        if self.space == space {
            self.components[index]
        } else {
            None
        }
    }

    /// Red 0-255, when the color is in sRGB.
    #[inline]
    pub fn red(&self) -> Option<f64> {
        self.slot(Space::Srgb, 0)
    }

    /// Green 0-255, when the color is in sRGB.
    #[inline]
    pub fn green(&self) -> Option<f64> {
        self.slot(Space::Srgb, 1)
    }

    /// Blue 0-255, when the color is in sRGB.
    #[inline]
    pub fn blue(&self) -> Option<f64> {
        self.slot(Space::Srgb, 2)
    }

    /// Hue in degrees, when the color is in HSL or HWB and chromatic.
    #[inline]
    pub fn hue(&self) -> Option<f64> {
        match self.space {
            Space::Hsl | Space::Hwb => self.components[0],
            _ => None,
        }
    }

    /// Saturation 0-1, when the color is in HSL.
    #[inline]
    pub fn saturation(&self) -> Option<f64> {
        self.slot(Space::Hsl, 1)
    }

    /// Lightness 0-1, when the color is in HSL.
    #[inline]
    pub fn lightness(&self) -> Option<f64> {
        self.slot(Space::Hsl, 2)
    }

    /// Whiteness 0-1, when the color is in HWB.
    #[inline]
    pub fn whiteness(&self) -> Option<f64> {
        self.slot(Space::Hwb, 1)
    }

    /// Blackness 0-1, when the color is in HWB.
    #[inline]
    pub fn blackness(&self) -> Option<f64> {
        self.slot(Space::Hwb, 2)
    }

    // ------------------------------------------------------------------
    // Engine boundary
    // ------------------------------------------------------------------

    /// Display components to normalized engine coordinates.
    ///
    /// `None` becomes NaN, the engine's "no hue" sentinel.
    fn normals(&self) -> Coords {
        let c = self.components.map(|v| v.unwrap_or(f64::NAN));
        match self.space {
            Space::Srgb => [c[0] / 255.0, c[1] / 255.0, c[2] / 255.0],
            Space::Hsl | Space::Hwb => [c[0] / 360.0, c[1], c[2]],
            Space::Lab => [c[0] * 100.0, c[1], c[2]],
            _ => c,
        }
    }

    /// Normalized engine coordinates to display components.
    fn denormalize(space: Space, coords: Coords) -> [f64; 3] {
        match space {
            Space::Srgb => [coords[0] * 255.0, coords[1] * 255.0, coords[2] * 255.0],
            Space::Hsl | Space::Hwb => [coords[0] * 360.0, coords[1], coords[2]],
            Space::Lab => [coords[0] / 100.0, coords[1], coords[2]],
            _ => coords,
        }
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Converts into `target`, re-sanitizing in the target's display
    /// form. Converting into the color's own space is the identity.
    pub fn convert(&self, target: Space) -> Self {
        if target == self.space {
            return self.clone();
        }
        let absolute = to_absolute(self.space, self.normals());
        let coords = from_absolute(target, absolute);
        Self::new(target, Self::denormalize(target, coords), self.alpha)
    }

    /// Mixes with `other` in Lab, the perceptually even default.
    ///
    /// See [`mix_in`](Self::mix_in).
    #[inline]
    pub fn mix(&self, other: &Color, amount: f64) -> Self {
        self.mix_in(other, amount, Space::Lab)
    }

    /// Mixes with `other` by linear interpolation in the `via` space.
    ///
    /// `amount` is the weight of `other`, clamped to [0, 1]; 0 keeps
    /// `self`, 1 lands on `other`. Alpha interpolates alongside the
    /// color channels. If either operand has no hue in the `via` space
    /// the mixed hue is `None` as well. The result is converted back
    /// into `self`'s space.
    pub fn mix_in(&self, other: &Color, amount: f64, via: Space) -> Self {
        let a = self.convert(via);
        let b = other.convert(via);
        let t = Fraction::sanitize(amount, FractionUnit::Bare);

        let mut mixed = [f64::NAN; 3];
        for slot in 0..3 {
            if let (Some(x), Some(y)) = (a.components[slot], b.components[slot]) {
                mixed[slot] = x * (1.0 - t) + y * t;
            }
        }
        let alpha = a.alpha * (1.0 - t) + b.alpha * t;
        Self::new(via, mixed, alpha).convert(self.space)
    }

    /// Returns the color with its HSL lightness set to `amount`.
    pub fn lighten(&self, amount: f64) -> Self {
        let hsl = self.convert(Space::Hsl);
        let mut c = hsl.display_or_nan();
        c[2] = Fraction::sanitize(amount, FractionUnit::Bare);
        Self::new(Space::Hsl, c, hsl.alpha).convert(self.space)
    }

    /// Returns the color with its HSL lightness set to `1 - amount`.
    pub fn darken(&self, amount: f64) -> Self {
        let hsl = self.convert(Space::Hsl);
        let mut c = hsl.display_or_nan();
        c[2] = Fraction::sanitize(1.0 - amount, FractionUnit::Bare);
        Self::new(Space::Hsl, c, hsl.alpha).convert(self.space)
    }

    /// Returns the color with its HSL saturation set to `amount`.
    pub fn saturate(&self, amount: f64) -> Self {
        let hsl = self.convert(Space::Hsl);
        let mut c = hsl.display_or_nan();
        c[1] = Fraction::sanitize(amount, FractionUnit::Bare);
        Self::new(Space::Hsl, c, hsl.alpha).convert(self.space)
    }

    /// Returns the complementary color (hue rotated by 180 degrees).
    pub fn negative(&self) -> Self {
        let hsl = self.convert(Space::Hsl);
        let mut c = hsl.display_or_nan();
        c[0] = Angle::sanitize(c[0] - 180.0, AngleUnit::Deg);
        Self::new(Space::Hsl, c, hsl.alpha).convert(self.space)
    }

    /// Display components with `None` spelled as NaN, ready to feed
    /// back through [`Color::new`].
    #[inline]
    fn display_or_nan(&self) -> [f64; 3] {
        self.components.map(|v| v.unwrap_or(f64::NAN))
    }
}

impl std::str::FromStr for Color {
    type Err = crate::error::Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self> {
        parse::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sanitizes_per_channel() {
        let c = Color::new(Space::Srgb, [300.0, -4.0, 127.5], 1.4);
        assert_eq!(c.components(), [Some(255.0), Some(0.0), Some(128.0)]);
        assert_eq!(c.alpha(), 1.0);

        let c = Color::new(Space::Hsl, [730.0, 0.485, 1.5], 0.5);
        assert_eq!(c.components(), [Some(10.0), Some(0.49), Some(1.0)]);

        let c = Color::new(Space::Lab, [0.537, -86.18, 83.19], 1.0);
        assert_eq!(c.components(), [Some(0.54), Some(-86.0), Some(83.0)]);
    }

    #[test]
    fn test_nan_hue_is_none() {
        let c = Color::new(Space::Hwb, [f64::NAN, 0.78, 0.22], 1.0);
        assert_eq!(c.components(), [None, Some(0.78), Some(0.22)]);
        assert_eq!(c.hue(), None);
    }

    #[test]
    fn test_raw_spaces_pass_through() {
        let c = Color::new(Space::XyzD65, [0.4125, 1.73, -0.002], 1.0);
        assert_eq!(
            c.components(),
            [Some(0.4125), Some(1.73), Some(-0.002)]
        );
    }

    #[test]
    fn test_accessors_follow_space() {
        let c = Color::new(Space::Srgb, [10.0, 20.0, 30.0], 1.0);
        assert_eq!(c.red(), Some(10.0));
        assert_eq!(c.hue(), None);
        assert_eq!(c.saturation(), None);

        let c = Color::new(Space::Hsl, [120.0, 0.5, 0.5], 1.0);
        assert_eq!(c.hue(), Some(120.0));
        assert_eq!(c.red(), None);
        assert_eq!(c.whiteness(), None);
    }

    #[test]
    fn test_convert_identity() {
        let c = Color::new(Space::Srgb, [111.0, 82.0, 195.0], 0.7);
        assert_eq!(c.convert(Space::Srgb), c);
    }
}
