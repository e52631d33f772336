use axum::http::header::{CONTENT_RANGE, HeaderMap, HeaderValue};

pub const DEFAULT_PAGE_SIZE: u64 = 25;

/// Largest offset or limit the SQL drivers accept; they bind both as `i64`.
const MAX_BOUND: u64 = i64::MAX.unsigned_abs();

/// Parse a `[start, end]` range into `(offset, limit)`.
///
/// Unparseable or inverted ranges, and ranges starting past `i64::MAX`, fall
/// back to the first [`DEFAULT_PAGE_SIZE`] records. The limit is capped so it
/// also fits in an `i64`.
#[must_use]
pub fn parse_range(range: &str) -> (u64, u64) {
    let bounds: Vec<u64> = serde_json::from_str(range).unwrap_or_default();
    match bounds.as_slice() {
        [start, end] if end >= start && *start <= MAX_BOUND => {
            let limit = end.saturating_sub(*start).saturating_add(1).min(MAX_BOUND);
            (*start, limit)
        }
        _ => (0, DEFAULT_PAGE_SIZE),
    }
}

fn sanitize_resource_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_control())
        .collect()
}

/// Build the `Content-Range` header for a page of `resource_name`.
///
/// The end index is clamped to the last existing record.
#[must_use]
pub fn calculate_content_range(
    offset: u64,
    limit: u64,
    total_count: u64,
    resource_name: &str,
) -> HeaderMap {
    let last = offset
        .saturating_add(limit.max(1) - 1)
        .min(total_count.saturating_sub(1));
    let safe_name = sanitize_resource_name(resource_name);
    let content_range = format!("{safe_name} {offset}-{last}/{total_count}");

    let mut headers = HeaderMap::new();
    let value = HeaderValue::from_str(&content_range)
        .unwrap_or_else(|_| HeaderValue::from_static("items */0"));
    headers.insert(CONTENT_RANGE, value);
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(headers: &HeaderMap) -> &str {
        headers.get(CONTENT_RANGE).unwrap().to_str().unwrap()
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("[0,9]"), (0, 10));
        assert_eq!(parse_range("[5,5]"), (5, 1));
        assert_eq!(parse_range("[10, 19]"), (10, 10));
    }

    #[test]
    fn test_parse_range_fallbacks() {
        assert_eq!(parse_range("nonsense"), (0, DEFAULT_PAGE_SIZE));
        assert_eq!(parse_range("[9,0]"), (0, DEFAULT_PAGE_SIZE));
        assert_eq!(parse_range("[1]"), (0, DEFAULT_PAGE_SIZE));
        assert_eq!(parse_range("[-1,3]"), (0, DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn test_parse_range_full_u64_span_does_not_overflow() {
        assert_eq!(parse_range("[0,18446744073709551615]"), (0, MAX_BOUND));
        assert_eq!(
            parse_range("[9223372036854775807,18446744073709551615]"),
            (MAX_BOUND, MAX_BOUND)
        );
    }

    #[test]
    fn test_parse_range_offset_past_i64_falls_back() {
        assert_eq!(
            parse_range("[18446744073709551600,18446744073709551610]"),
            (0, DEFAULT_PAGE_SIZE)
        );
        assert_eq!(
            parse_range("[9223372036854775808,9223372036854775809]"),
            (0, DEFAULT_PAGE_SIZE)
        );
    }

    #[test]
    fn test_content_range_normal() {
        let headers = calculate_content_range(0, 10, 100, "users");
        assert_eq!(header(&headers), "users 0-9/100");
    }

    #[test]
    fn test_content_range_clamps_to_total() {
        let headers = calculate_content_range(0, 10, 3, "users");
        assert_eq!(header(&headers), "users 0-2/3");
    }

    #[test]
    fn test_content_range_zero_items() {
        let headers = calculate_content_range(0, 10, 0, "users");
        assert_eq!(header(&headers), "users 0-0/0");
    }

    #[test]
    fn test_content_range_strips_control_characters() {
        let headers = calculate_content_range(0, 10, 100, "users\r\nInjected: evil");
        let value = header(&headers);
        assert!(!value.contains('\r'));
        assert!(!value.contains('\n'));
    }

    #[test]
    fn test_content_range_large_numbers() {
        let headers = calculate_content_range(u64::MAX - 100, 10, u64::MAX, "users");
        assert!(header(&headers).starts_with("users "));
    }
}
