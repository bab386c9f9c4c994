//! HWB: hue / whiteness / blackness. Base colorspace: HSL.
//!
//! HWB describes a color as a pure hue mixed with white and black
//! paint. It is the only space in the tree that carries the "no hue"
//! sentinel: an achromatic color has a [`NO_HUE`] hue slot rather than
//! hue 0, because whiteness and blackness alone pin the color down.
//!
//! # Reference
//!
//! CSS Color Module Level 4, HWB color

use crate::coords::{Coords, ACHROMATIC_EPS, NO_HUE};

/// HSL -> HWB.
pub fn from_base(coords: Coords) -> Coords {
    let [h, s, l] = coords;
    let v = l + s * l.min(1.0 - l);
    let sv = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    let w = v * (1.0 - sv);
    let b = 1.0 - v;
    let h = if s < ACHROMATIC_EPS { NO_HUE } else { h };
    [h, w, b]
}

/// HWB -> HSL.
pub fn to_base(coords: Coords) -> Coords {
    let [h, w, b] = coords;
    let v = 1.0 - b;
    let sv = if h.is_nan() {
        // no hue: gray at value v
        0.0
    } else if v == 0.0 {
        0.0
    } else {
        1.0 - w / v
    };
    let l = v * (1.0 - sv / 2.0);
    let s = if l == 0.0 || l == 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };
    [if h.is_nan() { 0.0 } else { h }, s, l]
}
