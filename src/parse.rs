use regex::Captures;
use rgb::{RGB, RGBA};
use crate::{detect, ColorFormat, Hsla, RGBColor};
use crate::format::{HEX, RGB as RGB_RE, RGBA as RGBA_RE, HSL, HSLA};

/// Parse `input`, known to be written in `format`, into its canonical
/// HSL representation.
///
/// Returns `None` for [`ColorFormat::Unknown`], when `input` does not
/// actually have the shape of `format`, or when one of its numbers
/// cannot be read (e.g. an alpha such as `1.2.3` or outside \[0, 1\]).
/// RGB channels are not range checked.
pub fn parse(input: &str, format: ColorFormat) -> Option<Hsla> {
    match format {
        ColorFormat::Hex => hex(input),
        ColorFormat::Rgb => rgb(input),
        ColorFormat::Rgba => rgba(input),
        ColorFormat::Hsl => hsl(input),
        ColorFormat::Hsla => hsla(input),
        ColorFormat::Unknown => None,
    }
}

/// Detect the format of `input` and parse it.
///
/// ```
/// use theme_shades::{parse_color, Hsla};
/// assert_eq!(parse_color("#f00"), Some(Hsla::new(0, 100, 50)));
/// assert_eq!(parse_color("hsla(0, 0%, 0%, 0.5)"),
///            Some(Hsla::new(0, 0, 0).with_alpha(0.5)));
/// assert_eq!(parse_color("tomato"), None);
/// ```
pub fn parse_color(input: &str) -> Option<Hsla> {
    parse(input, detect(input))
}

fn hex(input: &str) -> Option<Hsla> {
    if !HEX.is_match(input) { return None }
    let digits = &input[1..];
    let channel = |i: usize, n: usize| -> Option<f64> {
        let v = u8::from_str_radix(&digits[i * n .. (i + 1) * n], 16).ok()?;
        let v = if n == 1 { v * 17 } else { v };
        Some(v as f64)
    };
    let n = digits.len() / 3;
    let c = RGB { r: channel(0, n)?, g: channel(1, n)?, b: channel(2, n)? };
    Some(c.to_hsla())
}

/// Read the capture group `i` as a number.
fn number(caps: &Captures, i: usize) -> Option<f64> {
    caps.get(i)?.as_str().parse().ok()
}

/// Read the capture group `i`, if present, as an alpha value in
/// \[0, 1\].  A missing group means opaque.
fn alpha(caps: &Captures, i: usize) -> Option<f64> {
    match caps.get(i) {
        None => Some(1.),
        Some(m) => m.as_str().parse().ok()
            .filter(|a: &f64| (0. ..= 1.).contains(a)),
    }
}

/// Integer channel, as written in `rgb()` and `rgba()`.
fn channel(caps: &Captures, i: usize) -> Option<f64> {
    caps.get(i)?.as_str().parse::<u32>().ok().map(f64::from)
}

fn rgb(input: &str) -> Option<Hsla> {
    let caps = RGB_RE.captures(input)?;
    let c = RGB { r: channel(&caps, 1)?, g: channel(&caps, 2)?,
                  b: channel(&caps, 3)? };
    Some(c.to_hsla())
}

fn rgba(input: &str) -> Option<Hsla> {
    let caps = RGBA_RE.captures(input)?;
    let c = RGBA { r: channel(&caps, 1)?, g: channel(&caps, 2)?,
                   b: channel(&caps, 3)?, a: alpha(&caps, 4)? };
    Some(c.to_hsla())
}

fn hsl_components(caps: &Captures) -> Option<Hsla> {
    let round = |i| number(caps, i).map(|x| x.round() as i32);
    Some(Hsla::new(round(1)?, round(2)?, round(3)?))
}

fn hsl(input: &str) -> Option<Hsla> {
    hsl_components(&HSL.captures(input)?)
}

fn hsla(input: &str) -> Option<Hsla> {
    let caps = HSLA.captures(input)?;
    Some(hsl_components(&caps)?.with_alpha(alpha(&caps, 4)?))
}


#[cfg(test)]
mod tests {
    use super::*;
    use ColorFormat::{Hex, Rgb, Rgba, Hsl, Unknown};

    #[test]
    fn hex_six_and_three_digits() {
        assert_eq!(parse("#2A4CF1", Hex), Some(Hsla::new(230, 88, 55)));
        assert_eq!(parse("#2a4cf1", Hex), Some(Hsla::new(230, 88, 55)));
        assert_eq!(parse("#ff0000", Hex), parse("#f00", Hex));
        assert_eq!(parse("#000", Hex), Some(Hsla::new(0, 0, 0)));
        assert_eq!(parse("#f44336", Hex), Some(Hsla::new(4, 90, 58)));
    }

    #[test]
    fn rgb_channels() {
        assert_eq!(parse("rgb(255, 0, 0)", Rgb), Some(Hsla::new(0, 100, 50)));
        assert_eq!(parse("rgb(42,76,241)", Rgb), Some(Hsla::new(230, 88, 55)));
    }

    #[test]
    fn rgba_alpha() {
        let c = parse("rgba(0, 0, 0, 0.12)", Rgba).unwrap();
        assert_eq!((c.h, c.s, c.l), (0, 0, 0));
        assert_eq!(c.a, 0.12);
        assert_eq!(parse("rgba(0, 0, 0)", Rgba), Some(Hsla::new(0, 0, 0)));
        assert_eq!(parse("rgba(0, 0, 0, 1.2.3)", Rgba), None);
        assert_eq!(parse("rgba(0, 0, 0, 2)", Rgba), None);
    }

    #[test]
    fn hsl_is_rounded() {
        assert_eq!(parse("hsl(231, 87%, 54%)", Hsl), Some(Hsla::new(231, 87, 54)));
        assert_eq!(parse("hsl(230.6, 87.4%, 54.5%)", Hsl),
                   Some(Hsla::new(231, 87, 55)));
    }

    #[test]
    fn hsla_keeps_real_alpha() {
        assert_eq!(parse("hsla(120, 50%, 25%, 0.5)", ColorFormat::Hsla),
                   Some(Hsla::new(120, 50, 25).with_alpha(0.5)));
        assert_eq!(parse("hsla(120, 50%, 25%, 1)", ColorFormat::Hsla),
                   Some(Hsla::new(120, 50, 25)));
        assert_eq!(parse("hsla(120, 50%, 25%, 3)", ColorFormat::Hsla), None);
    }

    #[test]
    fn mismatched_format() {
        assert_eq!(parse("#fff", Rgb), None);
        assert_eq!(parse("rgb(1, 2, 3)", Hex), None);
        assert_eq!(parse("#fff", Unknown), None);
    }

    #[test]
    fn unvalidated_channels() {
        // Out of range channels still go through the conversion.
        assert!(parse_color("rgb(300, 0, 0)").is_some());
        assert_eq!(parse_color("rgb(99999999999, 0, 0)"), None);
    }
}
