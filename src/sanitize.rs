/// Text sanitization helpers
///
/// Every free-text field submitted through the public forms passes through
/// [`clean_text`] before it is stored or rendered into an email: HTML tag
/// sequences are removed, whitespace runs collapse to single spaces and the
/// result is truncated to a per-field length cap.

/// Length cap for single-line fields (names, addresses, phone numbers)
pub const MAX_FIELD_LEN: usize = 200;

/// Length cap for the free-text message field
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Removes HTML tag sequences from the input
///
/// Everything from a `<` up to and including the matching `>` is dropped.
/// A `<` with no closing `>` drops the rest of the string, so the output
/// never contains `<`.
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;

    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }

    out
}

/// Collapses whitespace runs to single spaces and trims the ends
pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cleans a free-text field: strip tags, collapse whitespace, truncate
///
/// Truncation counts characters, not bytes, so multi-byte input cannot be
/// split inside a code point.
pub fn clean_text(input: &str, max_len: usize) -> String {
    let stripped = strip_tags(input);
    let collapsed = collapse_whitespace(&stripped);
    collapsed.chars().take(max_len).collect()
}

/// Cleans an optional field, mapping empty results to `None`
pub fn clean_optional(input: Option<String>, max_len: usize) -> Option<String> {
    let cleaned = clean_text(input.as_deref()?, max_len);
    if cleaned.is_empty() { None } else { Some(cleaned) }
}
