//! Picks the text encoding of a fetched page.
//!
//! Meteociel serves Latin-1 and does not always say so in the `Content-Type`
//! header. The header charset wins when present, then a `<meta>` charset near the
//! top of the document, then windows-1252 (the superset browsers use for Latin-1).

use encoding_rs::{Encoding, WINDOWS_1252};
use log::debug;

// Same window browsers prescan for a meta charset.
const META_PRESCAN_BYTES: usize = 1024;

/// Decodes `body` to text using the encoding chosen from `content_type` and the
/// document itself.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(header_charset)
        .or_else(|| meta_charset(body))
        .unwrap_or(WINDOWS_1252);
    let (text, used, had_errors) = encoding.decode(body);
    if had_errors {
        debug!("Body is not valid {}, malformed bytes replaced", used.name());
    }
    text.into_owned()
}

fn header_charset(content_type: &str) -> Option<&'static Encoding> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        Encoding::for_label(value.trim().trim_matches(['"', '\'']).as_bytes())
    })
}

fn meta_charset(body: &[u8]) -> Option<&'static Encoding> {
    let head = &body[..body.len().min(META_PRESCAN_BYTES)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();
    let (_, rest) = head.split_once("charset=")?;
    let label: String = rest
        .trim_start_matches(['"', '\''])
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
        .collect();
    // A document cannot really declare UTF-16 from inside itself.
    Encoding::for_label(label.as_bytes()).map(Encoding::output_encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::UTF_8;

    const LATIN1_CELL: &[u8] = b"<td>23 \xb0C</td>";

    #[test]
    fn test_header_charset_wins() {
        let body = b"<meta charset=\"iso-8859-1\"><td>23 \xc2\xb0C</td>";
        let text = decode_body(body, Some("text/html; charset=UTF-8"));
        assert!(text.ends_with("<td>23 °C</td>"));
    }

    #[test]
    fn test_quoted_header_charset() {
        assert_eq!(header_charset("text/html; Charset=\"utf-8\""), Some(UTF_8));
        assert_eq!(header_charset("text/html"), None);
        assert_eq!(header_charset("text/html; charset=bogus"), None);
    }

    #[test]
    fn test_meta_charset_used_without_header_charset() {
        let mut body = b"<html><head><meta http-equiv=\"Content-Type\" \
                         content=\"text/html; charset=iso-8859-1\"></head>"
            .to_vec();
        body.extend_from_slice(LATIN1_CELL);
        let text = decode_body(&body, Some("text/html"));
        assert!(text.ends_with("<td>23 °C</td>"));
    }

    #[test]
    fn test_html5_meta_charset() {
        let body = b"<meta charset='utf-8'><td>23 \xc2\xb0C</td>";
        assert_eq!(meta_charset(body), Some(UTF_8));
        assert!(decode_body(body, None).ends_with("<td>23 °C</td>"));
    }

    #[test]
    fn test_meta_utf16_means_utf8() {
        assert_eq!(meta_charset(b"<meta charset=\"utf-16le\">"), Some(UTF_8));
    }

    #[test]
    fn test_undeclared_body_is_latin1() {
        assert_eq!(decode_body(LATIN1_CELL, None), "<td>23 °C</td>");
        assert_eq!(decode_body(LATIN1_CELL, Some("text/html")), "<td>23 °C</td>");
    }
}
