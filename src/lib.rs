//! Theme palette normalization.
//!
//! Colors written as `#RGB`, `#RRGGBB`, `rgb()`, `rgba()`, `hsl()` or
//! `hsla()` are recognized by [`detect`], turned into a canonical
//! [`Hsla`] by [`parse`] and expanded into a [`ShadeTriple`] by
//! [`shades`].  A whole palette, possibly split into a light and a dark
//! mode, goes through [`normalize`].
//!
//! ```
//! use theme_shades::{normalize, ShadeTriple};
//! let palette = serde_json::json!({ "primary": "#2A4CF1" });
//! let out = normalize(&palette).unwrap();
//! assert_eq!(out.light["primary"], ShadeTriple {
//!     main: "hsl(230deg 88% 55%)".into(),
//!     light: "hsl(230deg 88% 50%)".into(),
//!     dark: "hsl(230deg 88% 60%)".into(),
//! });
//! assert_eq!(out.light, out.dark);
//! ```

use std::fmt;
use rgb::{RGB, RGBA, RGB8, RGBA8};

mod error;
mod format;
mod parse;
mod shades;
pub mod palette;
pub mod theme;

pub use error::ConfigError;
pub use format::{detect, ColorFormat};
pub use parse::{parse, parse_color};
pub use shades::{shades, shades_with_step, ShadeTriple, SHADE_STEP};
pub use palette::{normalize, Mode, Normalizer, PaletteOutput};
pub use theme::{px_to_rem, Theme, ThemeConfig};

/// Canonical color: hue in degrees, saturation and lightness in
/// percent, alpha in \[0, 1\].
///
/// Hue, saturation and lightness are rounded to the nearest integer
/// when the color is built from RGB components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    /// Hue in degrees, 0 to 360.
    pub h: i32,
    /// Saturation in percent, 0 to 100.
    pub s: i32,
    /// Lightness in percent, 0 to 100.
    pub l: i32,
    /// Opacity, 1 being opaque.
    pub a: f64,
}

impl Hsla {
    /// Opaque color with the given hue, saturation and lightness.
    pub fn new(h: i32, s: i32, l: i32) -> Self {
        Hsla { h, s, l, a: 1. }
    }

    /// Return the same color with alpha `a`.
    #[must_use]
    pub fn with_alpha(self, a: f64) -> Self {
        Hsla { a, ..self }
    }

    /// Convert back to 8 bit RGBA.  Components out of range are
    /// clamped first.
    pub fn to_rgba(&self) -> RGBA8 {
        // See https://www.w3.org/TR/css-color-3/#hsl-color
        let h = (self.h as f64).rem_euclid(360.) / 60.;
        let s = (self.s as f64 / 100.).clamp(0., 1.);
        let l = (self.l as f64 / 100.).clamp(0., 1.);
        let c = (1. - (2. * l - 1.).abs()) * s;
        let x = c * (1. - (h % 2. - 1.).abs());
        let m = l - c / 2.;
        let (r, g, b) = {
            if h < 1.      { (c, x, 0.) }
            else if h < 2. { (x, c, 0.) }
            else if h < 3. { (0., c, x) }
            else if h < 4. { (0., x, c) }
            else if h < 5. { (x, 0., c) }
            else           { (c, 0., x) }
        };
        let to8 = |v: f64| ((v + m) * 255.).round().clamp(0., 255.) as u8;
        RGBA8 { r: to8(r), g: to8(g), b: to8(b),
                a: (self.a.clamp(0., 1.) * 255.).round() as u8 }
    }
}

impl Default for Hsla {
    fn default() -> Self { Hsla::new(0, 0, 0) }
}

/// Prints the color the way shades are serialized, e.g.
/// `hsl(230deg 88% 55%)` or `hsla(0deg 0% 0% / 12%)`.  An alpha that
/// would print as `100%` gives the `hsl` form.
impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alpha = Percent::of(self.a);
        if alpha.0 == 100. {
            write!(f, "hsl({}deg {}% {}%)", self.h, self.s, self.l)
        } else {
            write!(f, "hsla({}deg {}% {}% / {}%)", self.h, self.s, self.l,
                   alpha)
        }
    }
}

/// A percentage rounded to two decimals, printed without trailing
/// zeros.
struct Percent(f64);

impl Percent {
    fn of(fraction: f64) -> Percent {
        Percent((fraction * 10_000.).round() / 100.)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0. { write!(f, "{}", self.0 as i64) }
        else { write!(f, "{}", self.0) }
    }
}

/// Specifies the methods a RGB color encoding must provide to be
/// turned into a canonical [`Hsla`] color.
pub trait RGBColor: Sized {
    /// Return the red, green and blue components of the color (in
    /// \[0, 255\], although larger values are accepted) and its alpha
    /// (in \[0, 1\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Convert the color to HSL with the standard algorithm.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use theme_shades::{Hsla, RGBColor};
    /// assert_eq!(RGB8::new(255, 0, 0).to_hsla(), Hsla::new(0, 100, 50));
    /// ```
    fn to_hsla(&self) -> Hsla {
        let RGBA { r, g, b, a } = Self::to_rgba(self);
        let (r, g, b) = (r / 255., g / 255., b / 255.);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.;
        let (h, s) = if max == min {
            (0., 0.) // achromatic
        } else {
            let d = max - min;
            let s = if l > 0.5 { d / (2. - max - min) }
                    else { d / (max + min) };
            let h = if max == r { (g - b) / d + if g < b { 6. } else { 0. } }
                    else if max == g { (b - r) / d + 2. }
                    else { (r - g) / d + 4. };
            (h / 6., s)
        };
        Hsla { h: (h * 360.).round() as i32,
               s: (s * 100.).round() as i32,
               l: (l * 100.).round() as i32,
               a }
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }
}

impl RGBColor for RGB<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA { r: self.r, g: self.g, b: self.b, a: 1. }
    }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA { r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 1. }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA { r: self.r as f64, g: self.g as f64, b: self.b as f64,
               a: self.a as f64 / 255. }
    }
}
