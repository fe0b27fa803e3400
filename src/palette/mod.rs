//! Normalization of whole palettes.
//!
//! A palette is a JSON object.  Its colors are given either
//!
//! - flat, `{"primary": "#2A4CF1"}`, the same color serving both modes;
//! - per name, `{"primary": {"light": "#2A4CF1", "dark": "#000"}}`;
//! - per mode, `{"light": {"primary": "#2A4CF1"}, "dark": {…}}`.
//!
//! When the palette has a `light` or `dark` object holding at least
//! one usable color, only those two objects are read.  Otherwise the
//! palette itself is the set of colors.  A name given for one mode
//! only is copied to the other one.

use serde_json::{Map, Value};
use tracing::{debug, trace};
use crate::error::json_type;
use crate::{detect, parse, shades_with_step, ConfigError, ShadeTriple, SHADE_STEP};

mod ty;
pub use ty::{Mode, ModeColors, PaletteOutput};

/// Normalize `input` with the default shade step.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use theme_shades::normalize;
/// let p = normalize(&json!({
///     "primary": { "light": "#2A4CF1", "dark": "#000000" },
///     "divider": "rgba(0, 0, 0, 0.12)",
/// })).unwrap();
/// assert_eq!(p.light["primary"].main, "hsl(230deg 88% 55%)");
/// assert_eq!(p.dark["primary"].main, "hsl(0deg 0% 0%)");
/// assert_eq!(p.dark["divider"].main, "hsla(0deg 0% 0% / 12%)");
/// ```
pub fn normalize(input: &Value) -> Result<PaletteOutput, ConfigError> {
    Normalizer::default().normalize(input)
}

/// Palette normalizer with its settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Normalizer {
    step: u8,
}

impl Default for Normalizer {
    fn default() -> Self { Normalizer { step: SHADE_STEP } }
}

impl Normalizer {
    pub fn new() -> Self { Self::default() }

    /// Set the lightness step between a color and its shades.
    pub fn step(mut self, step: u8) -> Self {
        self.step = step;
        self
    }

    /// Normalize every color of `input` into shade triples for both
    /// modes.  Colors that are not recognized are left out; an `input`
    /// that is not an object is an error.
    pub fn normalize(&self, input: &Value) -> Result<PaletteOutput, ConfigError> {
        let palette = input.as_object()
            .ok_or_else(|| ConfigError::NotAnObject(json_type(input)))?;
        let light = self.mode_colors(palette, Mode::Light);
        let dark = self.mode_colors(palette, Mode::Dark);
        let mut out = if light.is_empty() && dark.is_empty() {
            self.flat(palette)
        } else {
            PaletteOutput { light, dark }
        };
        out.fill_missing();
        trace!(colors = out.light.len(), "palette normalized");
        Ok(out)
    }

    /// Colors of the `light` or `dark` object of `palette`, if any.
    fn mode_colors(&self, palette: &Map<String, Value>, m: Mode) -> ModeColors {
        match palette.get(m.key()) {
            Some(Value::Object(colors)) => colors.iter()
                .filter_map(|(name, c)| Some((name.clone(), self.shade(name, c)?)))
                .collect(),
            _ => ModeColors::new(),
        }
    }

    /// Use `palette` itself as the set of colors.
    fn flat(&self, palette: &Map<String, Value>) -> PaletteOutput {
        let mut out = PaletteOutput::default();
        for (name, c) in palette {
            match c {
                Value::Object(modes) => {
                    for m in [Mode::Light, Mode::Dark] {
                        if let Some(t) = modes.get(m.key())
                            .and_then(|c| self.shade(name, c)) {
                            out.mode_mut(m).insert(name.clone(), t);
                        }
                    }
                }
                c => {
                    if let Some(t) = self.shade(name, c) {
                        out.light.insert(name.clone(), t.clone());
                        out.dark.insert(name.clone(), t);
                    }
                }
            }
        }
        out
    }

    fn shade(&self, name: &str, color: &Value) -> Option<ShadeTriple> {
        let Some(s) = color.as_str() else {
            debug!(name, found = json_type(color), "color is not a string, dropped");
            return None;
        };
        let format = detect(s);
        match parse(s, format) {
            Some(c) => Some(shades_with_step(c, self.step)),
            None => {
                debug!(name, color = s, ?format, "unrecognized color, dropped");
                None
            }
        }
    }
}
