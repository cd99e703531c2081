//! MIME type detection utilities

/// Guess MIME by inspecting bytes (magic numbers)
pub fn guess_mime_from_bytes(bytes: &[u8]) -> Option<String> {
    infer::get(bytes).map(|k| k.mime_type().to_string())
}

/// Guess MIME by file name (extension-based)
pub fn guess_mime_from_path(path: &str) -> Option<String> {
    mime_guess::from_path(path)
        .first_raw()
        .map(|s| s.to_string())
}

/// Content type for a multipart file part: prefer bytes, then the file
/// extension, then `text/plain` for UTF-8 text, otherwise octet-stream.
pub fn guess_content_type(bytes: &[u8], file_name: Option<&str>) -> String {
    if let Some(m) = guess_mime_from_bytes(bytes) {
        return m;
    }
    if let Some(name) = file_name
        && let Some(m) = guess_mime_from_path(name)
    {
        return m;
    }
    if std::str::from_utf8(bytes).is_ok() {
        return "text/plain".to_string();
    }
    "application/octet-stream".to_string()
}

/// Whether the bytes start with the gzip member header (ID1 ID2 CM).
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.len() > 3 && infer::archive::is_gz(bytes) && bytes[2] == 0x08
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_extension_is_plain() {
        assert_eq!(guess_content_type(b"hello", Some("content")), "text/plain");
    }

    #[test]
    fn extension_wins_over_text_fallback() {
        assert_eq!(guess_content_type(b"a,b\n1,2\n", Some("data.csv")), "text/csv");
    }

    #[test]
    fn binary_magic_wins() {
        let pdf = b"%PDF-1.4\n%...";
        assert_eq!(guess_content_type(pdf, Some("doc.txt")), "application/pdf");
    }

    #[test]
    fn detects_gzip_header() {
        assert!(is_gzip(&[0x1f, 0x8b, 0x08, 0x00, 0x00]));
        assert!(!is_gzip(b"{\"a\":1}"));
        assert!(!is_gzip(&[0x1f, 0x8b]));
    }

    #[test]
    fn unknown_binary_is_octet_stream() {
        assert_eq!(
            guess_content_type(&[0xff, 0xfe, 0x00, 0x9f], None),
            "application/octet-stream"
        );
    }
}
