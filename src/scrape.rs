//! Extraction of single values from the flat `<tag>value</tag>` feed body.
//!
//! The solar feed is a flat XML-ish blob; each field of interest appears at
//! most once as `<tag>value</tag>` with no nesting or attributes. A full XML
//! parser buys nothing here, so extraction is a single linear scan for the
//! delimiter pair.
//!
//! Extraction never fails: any malformed or absent field yields the
//! [`UNKNOWN`] marker, which callers must treat as a valid "no data" value.
//! One missing tag does not affect any other field from the same blob.

/// Sentinel shown wherever a field cannot be determined.
pub const UNKNOWN: &str = "??";

/// Extract the trimmed value of `<tag>...</tag>` from `blob`.
///
/// Succeeds only when the opening delimiter is found past the start of the
/// blob, the closing delimiter follows it, and the closing delimiter lies
/// within bounds. A real feed body always starts with an XML preamble, so
/// requiring the opening tag at a position greater than zero costs nothing
/// and rejects truncated garbage. Every violation returns [`UNKNOWN`].
pub fn extract<'a>(blob: &'a str, tag: &str) -> &'a str {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");

    let Some(start) = blob.find(&open) else {
        return UNKNOWN;
    };
    if start == 0 {
        return UNKNOWN;
    }

    let value_start = start + open.len();
    let Some(rel_end) = blob[value_start..].find(&close) else {
        return UNKNOWN;
    };
    let value_end = value_start + rel_end;
    if value_end + close.len() > blob.len() {
        return UNKNOWN;
    }

    blob[value_start..value_end].trim()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Wrap a single field in a realistic blob: preamble in front, trailing
    /// content behind, the way the real feed delivers it.
    fn blob_with(tag: &str, value: &str) -> String {
        format!("<?xml version=\"1.0\"?>\n<solar><{tag}>{value}</{tag}></solar>")
    }

    #[test]
    fn test_extract_simple_value() {
        let blob = blob_with("solarflux", "123");
        assert_eq!(extract(&blob, "solarflux"), "123");
    }

    #[test]
    fn test_extract_trims_whitespace() {
        let blob = blob_with("kindex", "  3 \n");
        assert_eq!(extract(&blob, "kindex"), "3", "interior whitespace must be trimmed");
    }

    #[test]
    fn test_round_trip_any_plain_value() {
        for value in ["0", "42", "S3", "No Report", " padded "] {
            let blob = blob_with("field", value);
            assert_eq!(
                extract(&blob, "field"),
                value.trim(),
                "format-then-extract must return the trimmed value"
            );
        }
    }

    #[test]
    fn test_empty_blob_is_unknown() {
        assert_eq!(extract("", "aindex"), UNKNOWN);
    }

    #[test]
    fn test_missing_tag_is_unknown() {
        let blob = blob_with("solarflux", "123");
        assert_eq!(extract(&blob, "aindex"), UNKNOWN, "absent tag must yield the marker");
    }

    #[test]
    fn test_opening_tag_only_is_unknown() {
        assert_eq!(extract("preamble <aurora>4", "aurora"), UNKNOWN);
    }

    #[test]
    fn test_closing_before_opening_is_unknown() {
        assert_eq!(extract("x</kindex>3<kindex>", "kindex"), UNKNOWN);
    }

    #[test]
    fn test_tag_at_blob_start_is_unknown() {
        // No preamble: the opening delimiter sits at position zero, which the
        // scan treats as a truncated blob.
        assert_eq!(extract("<sunspots>88</sunspots>", "sunspots"), UNKNOWN);
    }

    #[test]
    fn test_one_bad_field_leaves_others_intact() {
        let blob = "<?xml?><solar><aindex>12</aindex><kindex>3</solar>";
        assert_eq!(extract(blob, "kindex"), UNKNOWN);
        assert_eq!(extract(blob, "aindex"), "12", "an unrelated malformed field must not bleed over");
    }

    #[test]
    fn test_empty_value_extracts_empty() {
        let blob = blob_with("geomagfield", "");
        assert_eq!(extract(&blob, "geomagfield"), "");
    }
}
