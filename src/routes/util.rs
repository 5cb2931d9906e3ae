//! Shared query/form parsing for route handlers.

/// Parse a URL-encoded form body into key-value pairs
/// (`key=value&key2=value2`, as HTMX posts them).
pub fn parse_form_body(body: &str) -> Vec<(String, String)> {
    if body.is_empty() {
        return Vec::new();
    }
    body.split('&')
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next()?;
            let val = parts.next().unwrap_or("");
            Some((percent_decode(key), percent_decode(val)))
        })
        .collect()
}

/// Parse a query string, tolerating a leading `?`.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    parse_form_body(query.strip_prefix('?').unwrap_or(query))
}

/// Percent-decode a URL-encoded value; `+` decodes to space.
pub fn percent_decode(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut bytes = input.bytes();
    while let Some(b) = bytes.next() {
        if b == b'%' {
            let hi = bytes.next().unwrap_or(b'0');
            let lo = bytes.next().unwrap_or(b'0');
            let hex = [hi, lo];
            if let Ok(s) = core::str::from_utf8(&hex) {
                if let Ok(val) = u8::from_str_radix(s, 16) {
                    result.push(val as char);
                    continue;
                }
            }
            result.push('%');
            result.push(hi as char);
            result.push(lo as char);
        } else if b == b'+' {
            result.push(' ');
        } else {
            result.push(b as char);
        }
    }
    result
}

/// Look up a value by key.
pub fn get_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Look up a numeric parameter, falling back when absent or malformed.
pub fn get_u64_param(params: &[(String, String)], key: &str, fallback: u64) -> u64 {
    get_param(params, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_form_body_splits_pairs() {
        let pairs = parse_form_body("action=start&seed=42&dir=left");
        assert_eq!(pairs.len(), 3);
        assert_eq!(get_param(&pairs, "action"), Some("start"));
        assert_eq!(get_param(&pairs, "dir"), Some("left"));
    }

    #[test]
    fn parse_form_body_empty_is_empty() {
        assert!(parse_form_body("").is_empty());
    }

    #[test]
    fn percent_decode_handles_hex_and_plus() {
        assert_eq!(percent_decode("hello%20world"), "hello world");
        assert_eq!(percent_decode("a%2Cb"), "a,b");
        assert_eq!(percent_decode("hello+world"), "hello world");
        assert_eq!(percent_decode("plain"), "plain");
    }

    #[test]
    fn parse_query_strips_question_mark() {
        let pairs = parse_query("?tab=honors");
        assert_eq!(get_param(&pairs, "tab"), Some("honors"));
    }

    #[test]
    fn get_u64_param_falls_back() {
        let pairs = parse_form_body("seed=99&bad=x");
        assert_eq!(get_u64_param(&pairs, "seed", 7), 99);
        assert_eq!(get_u64_param(&pairs, "bad", 7), 7);
        assert_eq!(get_u64_param(&pairs, "missing", 7), 7);
    }
}
