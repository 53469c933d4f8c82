//! Mapping local file names to wiki file names.

/// Derive the wiki file name from a directory entry name.
///
/// Entry names are percent-decoded so files saved from URLs
/// (`Caf%C3%A9%20sign.jpg`) upload as `Café sign.jpg`. Names without escapes
/// pass through unchanged. Escapes that do not form UTF-8 become U+FFFD, so
/// decoding never fails; the wiki decides whether the result is acceptable.
pub fn decode_upload_name(name: &str) -> String {
    let bytes = urlencoding::decode_binary(name.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_unchanged() {
        assert_eq!(decode_upload_name("a.jpg"), "a.jpg");
        assert_eq!(
            decode_upload_name("Scan 001 (front).png"),
            "Scan 001 (front).png"
        );
    }

    #[test]
    fn test_percent_escapes_decoded() {
        assert_eq!(decode_upload_name("Caf%C3%A9%20sign.jpg"), "Café sign.jpg");
        assert_eq!(decode_upload_name("100%25.png"), "100%.png");
    }

    #[test]
    fn test_plus_is_not_a_space() {
        assert_eq!(decode_upload_name("a+b.jpg"), "a+b.jpg");
    }

    #[test]
    fn test_invalid_utf8_replaced() {
        assert_eq!(decode_upload_name("bad%FF.jpg"), "bad\u{FFFD}.jpg");
    }

    #[test]
    fn test_blank_decoded_name_passes_through() {
        assert_eq!(decode_upload_name("%20"), " ");
    }
}
