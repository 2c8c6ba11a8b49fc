use crate::options::Options;
use thiserror::Error;

/// The color and size options resolved into values a renderer can use
/// directly. Colors are non-premultiplied RGBA bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub background: [u8; 4],
    pub border: [u8; 4],
    pub pixel_on: [u8; 4],
    pub pixel_off: [u8; 4],
    pub border_width: f32,
    pub pixel_size: f32,
}

impl Appearance {
    /// Resolve the string-typed display options. The options document keeps
    /// colors and lengths as free-form strings; this is where their syntax
    /// is actually checked.
    pub fn resolve(options: &Options) -> Result<Self, AppearanceError> {
        Ok(Self {
            background: parse_color("backgroundColor", &options.background_color)?,
            border: parse_color("borderColor", &options.border_color)?,
            pixel_on: parse_color("pixelOnColor", &options.pixel_on_color)?,
            pixel_off: parse_color("pixelOffColor", &options.pixel_off_color)?,
            border_width: parse_length("borderSize", &options.border_size)?,
            pixel_size: options.pixel_size,
        })
    }
}

/// Parse a hex color string: `#RGB`, `#RRGGBB`, or `#RRGGBBAA`.
pub fn parse_color(field: &'static str, value: &str) -> Result<[u8; 4], AppearanceError> {
    let bad = || AppearanceError::BadColor {
        field,
        value: value.to_string(),
    };

    let digits = value.strip_prefix('#').ok_or_else(bad)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad());
    }
    let bits = u32::from_str_radix(digits, 16).map_err(|_| bad())?;

    match digits.len() {
        // Shorthand: each digit doubles, "#1af" == "#11aaff"
        3 => Ok([
            ((bits >> 8) & 0xf) as u8 * 0x11,
            ((bits >> 4) & 0xf) as u8 * 0x11,
            (bits & 0xf) as u8 * 0x11,
            u8::MAX,
        ]),
        6 => Ok([(bits >> 16) as u8, (bits >> 8) as u8, bits as u8, u8::MAX]),
        8 => Ok([
            (bits >> 24) as u8,
            (bits >> 16) as u8,
            (bits >> 8) as u8,
            bits as u8,
        ]),
        _ => Err(bad()),
    }
}

/// Parse a CSS-like length string: a non-negative number with an optional
/// "px" suffix.
pub fn parse_length(field: &'static str, value: &str) -> Result<f32, AppearanceError> {
    let number = value.trim();
    let number = number.strip_suffix("px").unwrap_or(number).trim();
    match number.parse::<f32>() {
        Ok(length) if length.is_finite() && length >= 0.0 => Ok(length),
        _ => Err(AppearanceError::BadLength {
            field,
            value: value.to_string(),
        }),
    }
}

#[derive(Debug, Error)]
pub enum AppearanceError {
    #[error("Option '{field}' is not a valid hex color: {value:?}")]
    BadColor { field: &'static str, value: String },
    #[error("Option '{field}' is not a valid length: {value:?}")]
    BadLength { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(parse_color("test", "#00ff00").unwrap(), [0, 255, 0, 255]);
        assert_eq!(parse_color("test", "#336699").unwrap(), [51, 102, 153, 255]);
    }

    #[test]
    fn parses_shorthand_and_alpha_hex() {
        assert_eq!(parse_color("test", "#1af").unwrap(), [17, 170, 255, 255]);
        assert_eq!(
            parse_color("test", "#00ff0080").unwrap(),
            [0, 255, 0, 128]
        );
    }

    #[test]
    fn hex_is_case_insensitive() {
        assert_eq!(
            parse_color("test", "#AbCdEf").unwrap(),
            parse_color("test", "#abcdef").unwrap()
        );
    }

    #[test]
    fn rejects_malformed_colors() {
        for value in ["", "#", "00ff00", "#00ff0", "#wwwwww", "green", "#00ff00ff00"] {
            assert!(parse_color("test", value).is_err(), "accepted {value:?}");
        }
    }

    #[test]
    fn parses_lengths_with_and_without_suffix() {
        assert_eq!(parse_length("test", "1px").unwrap(), 1.0);
        assert_eq!(parse_length("test", "2").unwrap(), 2.0);
        assert_eq!(parse_length("test", "1.5px").unwrap(), 1.5);
        assert_eq!(parse_length("test", " 0px ").unwrap(), 0.0);
    }

    #[test]
    fn rejects_malformed_lengths() {
        for value in ["", "px", "thick", "-1px", "1em", "NaN"] {
            assert!(parse_length("test", value).is_err(), "accepted {value:?}");
        }
    }

    #[test]
    fn resolves_default_options() {
        let appearance = Appearance::resolve(&Options::default()).unwrap();
        assert_eq!(appearance.background, [0, 0, 0, 255]);
        assert_eq!(appearance.pixel_on, [0, 255, 0, 255]);
        assert_eq!(appearance.border_width, 1.0);
        assert_eq!(appearance.pixel_size, 10.0);
    }

    #[test]
    fn resolve_names_the_offending_field() {
        let options = Options {
            border_color: "dotted".to_string(),
            ..Options::default()
        };
        match Appearance::resolve(&options) {
            Err(AppearanceError::BadColor { field, .. }) => assert_eq!(field, "borderColor"),
            other => panic!("expected a color error, got {other:?}"),
        }
    }
}
