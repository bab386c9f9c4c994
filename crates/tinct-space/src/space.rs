//! The colorspace tree.
//!
//! Every colorspace except the root is defined by a relation to a
//! single base colorspace, forming a tree rooted at XYZ D65:
//!
//! ```text
//! xyz-d65
//! ├── xyz-d50
//! ├── srgb-linear
//! │   └── srgb
//! │       └── hsl
//! │           └── hwb
//! └── lab
//! ```
//!
//! A [`Space`] carries its edge functions ([`Space::to_base`],
//! [`Space::from_base`]) and a channel descriptor per coordinate slot;
//! the recursive walk lives in [`convert`](crate::convert).

use tinct_units::Kind;

use crate::coords::Coords;
use crate::{hsl, hwb, lab, srgb, srgb_linear, xyz_d50};

/// A named coordinate slot of a colorspace.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red, 0-255 at the value boundary.
    Red,
    /// Green, 0-255 at the value boundary.
    Green,
    /// Blue, 0-255 at the value boundary.
    Blue,
    /// Hue angle.
    Hue,
    /// HSL saturation, 0-1.
    Saturation,
    /// HSL lightness, 0-1.
    Lightness,
    /// HWB whiteness, 0-1.
    Whiteness,
    /// HWB blackness, 0-1.
    Blackness,
    /// Lab lightness, 0-1 at the value boundary.
    Luminance,
    /// Lab green-red opponent axis, [-128, 127].
    OpponentA,
    /// Lab blue-yellow opponent axis, [-128, 127].
    OpponentB,
    /// Linear-light red, unbounded.
    LinearRed,
    /// Linear-light green, unbounded.
    LinearGreen,
    /// Linear-light blue, unbounded.
    LinearBlue,
    /// CIE X tristimulus value, unbounded.
    X,
    /// CIE Y tristimulus value, unbounded.
    Y,
    /// CIE Z tristimulus value, unbounded.
    Z,
}

impl Channel {
    /// The quantity kind measuring this channel, or `None` for the
    /// unbounded raw channels (X, Y, Z and linear RGB).
    pub fn quantity(self) -> Option<Kind> {
        match self {
            Self::Red | Self::Green | Self::Blue => Some(Kind::Intensity),
            Self::Hue => Some(Kind::Angle),
            Self::Saturation
            | Self::Lightness
            | Self::Whiteness
            | Self::Blackness
            | Self::Luminance => Some(Kind::Fraction),
            Self::OpponentA | Self::OpponentB => Some(Kind::LinearIntensity),
            Self::LinearRed | Self::LinearGreen | Self::LinearBlue => None,
            Self::X | Self::Y | Self::Z => None,
        }
    }
}

/// A node of the colorspace tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Space {
    /// CIE XYZ, D65 white point. The root.
    XyzD65,
    /// CIE XYZ, D50 white point.
    XyzD50,
    /// Linear-light sRGB.
    SrgbLinear,
    /// Gamma-encoded sRGB.
    Srgb,
    /// CIE Lab (1976), D65-relative.
    Lab,
    /// Hue / saturation / lightness.
    Hsl,
    /// Hue / whiteness / blackness.
    Hwb,
}

impl Space {
    /// Every colorspace, root first.
    pub const ALL: [Space; 7] = [
        Self::XyzD65,
        Self::XyzD50,
        Self::SrgbLinear,
        Self::Srgb,
        Self::Lab,
        Self::Hsl,
        Self::Hwb,
    ];

    /// The base colorspace this one is defined against, or `None` for
    /// the root.
    #[inline]
    pub fn base(self) -> Option<Space> {
        match self {
            Self::XyzD65 => None,
            Self::XyzD50 | Self::SrgbLinear | Self::Lab => Some(Self::XyzD65),
            Self::Srgb => Some(Self::SrgbLinear),
            Self::Hsl => Some(Self::Srgb),
            Self::Hwb => Some(Self::Hsl),
        }
    }

    /// Maps base-space coordinates into this colorspace.
    ///
    /// Identity at the root.
    pub fn from_base(self, coords: Coords) -> Coords {
        match self {
            Self::XyzD65 => coords,
            Self::XyzD50 => xyz_d50::from_base(coords),
            Self::SrgbLinear => srgb_linear::from_base(coords),
            Self::Srgb => srgb::from_base(coords),
            Self::Lab => lab::from_base(coords),
            Self::Hsl => hsl::from_base(coords),
            Self::Hwb => hwb::from_base(coords),
        }
    }

    /// Maps this colorspace's coordinates into its base space.
    ///
    /// Identity at the root.
    pub fn to_base(self, coords: Coords) -> Coords {
        match self {
            Self::XyzD65 => coords,
            Self::XyzD50 => xyz_d50::to_base(coords),
            Self::SrgbLinear => srgb_linear::to_base(coords),
            Self::Srgb => srgb::to_base(coords),
            Self::Lab => lab::to_base(coords),
            Self::Hsl => hsl::to_base(coords),
            Self::Hwb => hwb::to_base(coords),
        }
    }

    /// The channel descriptor for each coordinate slot.
    pub fn channels(self) -> [Channel; 3] {
        match self {
            Self::XyzD65 | Self::XyzD50 => [Channel::X, Channel::Y, Channel::Z],
            Self::SrgbLinear => [Channel::LinearRed, Channel::LinearGreen, Channel::LinearBlue],
            Self::Srgb => [Channel::Red, Channel::Green, Channel::Blue],
            Self::Lab => [Channel::Luminance, Channel::OpponentA, Channel::OpponentB],
            Self::Hsl => [Channel::Hue, Channel::Saturation, Channel::Lightness],
            Self::Hwb => [Channel::Hue, Channel::Whiteness, Channel::Blackness],
        }
    }

    /// The canonical colorspace name.
    pub fn name(self) -> &'static str {
        match self {
            Self::XyzD65 => "xyz-d65",
            Self::XyzD50 => "xyz-d50",
            Self::SrgbLinear => "srgb-linear",
            Self::Srgb => "srgb",
            Self::Lab => "lab",
            Self::Hsl => "hsl",
            Self::Hwb => "hwb",
        }
    }

    /// Looks a colorspace up by name or alias.
    ///
    /// Accepted: `srgb`/`rgb`, `srgb-linear`/`rgb-linear`,
    /// `lab`/`cielab`, `xyz`/`xyz-d65`, `xyz-d50`, `hsl`, `hwb`.
    pub fn from_name(name: &str) -> Option<Space> {
        Some(match name {
            "srgb" | "rgb" => Self::Srgb,
            "srgb-linear" | "rgb-linear" => Self::SrgbLinear,
            "lab" | "cielab" => Self::Lab,
            "xyz" | "xyz-d65" => Self::XyzD65,
            "xyz-d50" => Self::XyzD50,
            "hsl" => Self::Hsl,
            "hwb" => Self::Hwb,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
