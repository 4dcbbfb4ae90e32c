use crate::forecast::error::CellError;
use std::num::ParseIntError;
use std::str::FromStr;

/// Trims `text`, removes a trailing `unit` and trims again, so `"12 °C"`,
/// `"12°C"` and `"12\u{a0}°C"` all become `"12"`. Text without the unit is only
/// trimmed.
pub fn strip_unit<'a>(text: &'a str, unit: &str) -> &'a str {
    let text = text.trim();
    text.strip_suffix(unit).unwrap_or(text).trim()
}

pub fn parse_int<T>(text: &str) -> Result<T, CellError>
where
    T: FromStr<Err = ParseIntError>,
{
    text.parse().map_err(|e| CellError::InvalidInteger {
        text: text.to_string(),
        source: e,
    })
}

pub fn parse_float(text: &str) -> Result<f32, CellError> {
    text.parse().map_err(|e| CellError::InvalidFloat {
        text: text.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_unit() {
        assert_eq!(strip_unit("12 °C", "°C"), "12");
        assert_eq!(strip_unit(" -3\u{a0}°C\n", "°C"), "-3");
        assert_eq!(strip_unit("1015 hPa", "hPa"), "1015");
        assert_eq!(strip_unit("60", "%"), "60");
        assert_eq!(strip_unit("", "mm"), "");
    }

    #[test]
    fn test_parse_int_ranges() {
        assert_eq!(parse_int::<i8>("-12"), Ok(-12));
        assert_eq!(parse_int::<i16>("1013"), Ok(1013));
        assert!(parse_int::<i8>("1013").is_err());
        assert!(matches!(
            parse_int::<i8>("12.5"),
            Err(CellError::InvalidInteger { text, .. }) if text == "12.5"
        ));
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("2.5"), Ok(2.5));
        assert!(parse_float("2,5").is_err());
    }
}
