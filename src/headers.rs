//! Custom header parsing and header name formatting.

/// Parses a comma-separated `key:value` header list.
///
/// Each segment is split on its first `:` only, so values may contain
/// colons (`Referer: http://x`). Keys and values are trimmed. Segments
/// without a colon or with an empty key are skipped without error.
#[must_use]
pub fn parse_custom_headers(raw: &str) -> Vec<(String, String)> {
    if raw.is_empty() {
        return Vec::new();
    }

    raw.split(',')
        .filter_map(|segment| {
            let (key, value) = segment.split_once(':')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Formats a header name in canonical MIME form.
///
/// The first letter and every letter following a hyphen are uppercased,
/// the rest lowercased: `x-request-id` becomes `X-Request-Id`. Names with
/// characters outside the HTTP token set are returned unchanged.
#[must_use]
pub fn canonical_header_key(name: &str) -> String {
    if !name.bytes().all(is_token_byte) {
        return name.to_string();
    }

    let mut upper = true;
    name.chars()
        .map(|c| {
            let mapped = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            mapped
        })
        .collect()
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^' | b'_'
                | b'`' | b'|' | b'~'
        )
}
