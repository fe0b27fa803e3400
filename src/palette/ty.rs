use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::ShadeTriple;

/// Shade triples of one mode, by color name.
pub type ModeColors = BTreeMap<String, ShadeTriple>;

/// Theme mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// Key under which the mode appears in palettes.
    pub fn key(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    pub fn other(self) -> Mode {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }
}

/// Normalized palette.
///
/// Invariant: both modes have the same set of names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteOutput {
    pub light: ModeColors,
    pub dark: ModeColors,
}

impl PaletteOutput {
    /// Colors of mode `m`.
    pub fn mode(&self, m: Mode) -> &ModeColors {
        match m {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    pub(crate) fn mode_mut(&mut self, m: Mode) -> &mut ModeColors {
        match m {
            Mode::Light => &mut self.light,
            Mode::Dark => &mut self.dark,
        }
    }

    /// Returns `true` if no color survived normalization.
    pub fn is_empty(&self) -> bool { self.light.is_empty() && self.dark.is_empty() }

    /// Copy every name present in one mode only into the other.
    pub(crate) fn fill_missing(&mut self) {
        for m in [Mode::Light, Mode::Dark] {
            let missing: Vec<_> = self.mode(m).iter()
                .filter(|(name, _)| !self.mode(m.other()).contains_key(*name))
                .map(|(name, t)| (name.clone(), t.clone()))
                .collect();
            self.mode_mut(m.other()).extend(missing);
        }
    }
}
