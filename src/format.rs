use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub(crate) static ref HEX: Regex =
        Regex::new(r"^#([A-Fa-f0-9]{3}){1,2}$").unwrap();
    pub(crate) static ref RGB: Regex =
        Regex::new(r"^rgb\((\d+),\s*(\d+),\s*(\d+)\)$").unwrap();
    pub(crate) static ref RGBA: Regex =
        Regex::new(r"^rgba\((\d+),\s*(\d+),\s*(\d+)(?:,\s*([\d.]+))?\)$")
        .unwrap();
    pub(crate) static ref HSL: Regex =
        Regex::new(r"^hsl\(\s*(\d+(?:\.\d+)?),\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*\)$")
        .unwrap();
    pub(crate) static ref HSLA: Regex =
        Regex::new(r"^hsla\(\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*([\d.]+)\s*\)$")
        .unwrap();
}

/// Textual color formats understood by [`crate::parse()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// `#RGB` or `#RRGGBB`.
    Hex,
    /// `rgb(r, g, b)`.
    Rgb,
    /// `rgba(r, g, b, a)`, the alpha being optional.
    Rgba,
    /// `hsl(h, s%, l%)`.
    Hsl,
    /// `hsla(h, s%, l%, a)`.
    Hsla,
    /// None of the above.
    Unknown,
}

impl ColorFormat {
    /// Whether the format is one [`crate::parse()`] handles.
    pub fn is_known(self) -> bool { self != ColorFormat::Unknown }
}

/// Classify `input` by its shape only.  The patterns are tried in the
/// order hex, rgb, rgba, hsl, hsla; no whitespace is trimmed.
///
/// ```
/// use theme_shades::{detect, ColorFormat};
/// assert_eq!(detect("#2A4CF1"), ColorFormat::Hex);
/// assert_eq!(detect("rgba(0, 0, 0, 0.12)"), ColorFormat::Rgba);
/// assert_eq!(detect("rebeccapurple"), ColorFormat::Unknown);
/// ```
pub fn detect(input: &str) -> ColorFormat {
    use ColorFormat::*;
    [(&*HEX, Hex), (&*RGB, Rgb), (&*RGBA, Rgba), (&*HSL, Hsl), (&*HSLA, Hsla)]
        .into_iter()
        .find(|(re, _)| re.is_match(input))
        .map_or(Unknown, |(_, f)| f)
}


#[cfg(test)]
mod tests {
    use super::*;
    use ColorFormat::*;

    #[test]
    fn hex() {
        assert_eq!(detect("#fff"), Hex);
        assert_eq!(detect("#2A4CF1"), Hex);
        assert_eq!(detect("#ffff"), Unknown);
        assert_eq!(detect("#fffffff"), Unknown);
        assert_eq!(detect("#ggg"), Unknown);
        assert_eq!(detect("fff"), Unknown);
        assert_eq!(detect(" #fff"), Unknown);
    }

    #[test]
    fn rgb_and_rgba() {
        assert_eq!(detect("rgb(1,2,3)"), Rgb);
        assert_eq!(detect("rgb(1, 2,   3)"), Rgb);
        assert_eq!(detect("rgb( 1, 2, 3)"), Unknown);
        assert_eq!(detect("rgba(0, 0, 0, 0.12)"), Rgba);
        assert_eq!(detect("rgba(0, 0, 0)"), Rgba);
        assert_eq!(detect("rgba(0, 0, 0, 1.2.3)"), Rgba);
        assert_eq!(detect("rgb(0, 0, 0, 0.5)"), Unknown);
    }

    #[test]
    fn hsl_and_hsla() {
        assert_eq!(detect("hsl(231, 87%, 54%)"), Hsl);
        assert_eq!(detect("hsl( 231.5, 87.2% , 54% )"), Hsl);
        assert_eq!(detect("hsl(231, 87, 54)"), Unknown);
        assert_eq!(detect("hsla(0, 0%, 0%, 0.5)"), Hsla);
        assert_eq!(detect("hsla( 0 ,0% ,0% , .5 )"), Hsla);
        assert_eq!(detect("hsla(0, 0%, 0%)"), Unknown);
    }

    #[test]
    fn unknown() {
        assert_eq!(detect(""), Unknown);
        assert_eq!(detect("red"), Unknown);
        assert_eq!(detect("not-a-color"), Unknown);
        assert!(!detect("hsl(1 2% 3%)").is_known());
    }
}
