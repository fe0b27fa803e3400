use serde::{Deserialize, Serialize};
use crate::Hsla;

/// Lightness step, in percentage points, between a color and its
/// light and dark shades.
pub const SHADE_STEP: u8 = 5;

/// The three variants derived from one color, already serialized as
/// CSS `hsl()`/`hsla()` strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadeTriple {
    pub main: String,
    /// Lightness lowered by the step.
    pub light: String,
    /// Lightness raised by the step.
    pub dark: String,
}

/// Shades of `c` with the default [`SHADE_STEP`].
///
/// ```
/// use theme_shades::{shades, Hsla};
/// let t = shades(Hsla::new(0, 100, 50));
/// assert_eq!(t.main, "hsl(0deg 100% 50%)");
/// assert_eq!(t.light, "hsl(0deg 100% 45%)");
/// assert_eq!(t.dark, "hsl(0deg 100% 55%)");
/// ```
pub fn shades(c: Hsla) -> ShadeTriple { shades_with_step(c, SHADE_STEP) }

/// Shades of `c` whose lightness differ by `step` percentage points,
/// never leaving \[0, 100\].
pub fn shades_with_step(c: Hsla, step: u8) -> ShadeTriple {
    let [main, light, dark] = shade_colors(c, step);
    ShadeTriple {
        main: main.to_string(),
        light: light.to_string(),
        dark: dark.to_string(),
    }
}

/// `[main, light, dark]` before serialization.
pub(crate) fn shade_colors(c: Hsla, step: u8) -> [Hsla; 3] {
    let step = step as i32;
    let light = Hsla { l: c.l.saturating_sub(step).max(0), ..c };
    let dark = Hsla { l: c.l.saturating_add(step).min(100), ..c };
    [c, light, dark]
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_color;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn translucent() {
        let t = shades(Hsla::new(0, 0, 0).with_alpha(0.12));
        assert_eq!(t, ShadeTriple {
            main: "hsla(0deg 0% 0% / 12%)".into(),
            light: "hsla(0deg 0% 0% / 12%)".into(),
            dark: "hsla(0deg 0% 0% / 12%)".into(),
        });
    }

    #[test]
    fn bounds() {
        let t = shades(Hsla::new(0, 0, 100));
        assert_eq!(t.light, "hsl(0deg 0% 95%)");
        assert_eq!(t.dark, "hsl(0deg 0% 100%)");
        let t = shades(Hsla::new(0, 0, 0));
        assert_eq!(t.light, "hsl(0deg 0% 0%)");
        assert_eq!(t.dark, "hsl(0deg 0% 5%)");
    }

    #[test]
    fn huge_lightness() {
        let c = parse_color("hsl(0, 0%, 99999999999%)").unwrap();
        let [_, light, dark] = shade_colors(c, SHADE_STEP);
        assert_eq!(light.l, i32::MAX - 5);
        assert_eq!(dark.l, 100);
        let c = Hsla { l: i32::MIN, ..c };
        assert_eq!(shade_colors(c, SHADE_STEP)[1].l, 0);
    }

    #[test]
    fn custom_step() {
        let t = shades_with_step(Hsla::new(200, 50, 50), 10);
        assert_eq!(t.light, "hsl(200deg 50% 40%)");
        assert_eq!(t.dark, "hsl(200deg 50% 60%)");
    }

    proptest! {
        #[test]
        fn lightness_stays_in_range(h in 0i32..=360, s in 0i32..=100,
                                    l in 0i32..=100, a in 0f64..=1.) {
            let c = Hsla { h, s, l, a };
            let [main, light, dark] = shade_colors(c, SHADE_STEP);
            prop_assert_eq!(main, c);
            prop_assert_eq!(light.l, (l - 5).max(0));
            prop_assert_eq!(dark.l, (l + 5).min(100));
            for v in [light, dark] {
                prop_assert_eq!((v.h, v.s), (h, s));
                prop_assert_eq!(v.a, a);
            }
        }
    }
}
