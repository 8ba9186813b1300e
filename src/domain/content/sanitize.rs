//! ASCII normalization for text sent to and received from content endpoints.

/// Replace typographic punctuation with ASCII equivalents and collapse any
/// remaining run of non-ASCII characters into a single space.
pub fn sanitize_text(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut in_non_ascii_run = false;

    for ch in text.chars() {
        let replacement = match ch {
            '\u{2018}' | '\u{2019}' => Some("'"),
            '\u{201C}' | '\u{201D}' => Some("\""),
            '\u{2013}' => Some("-"),
            '\u{2014}' => Some("--"),
            '\u{2026}' => Some("..."),
            _ => None,
        };

        if let Some(ascii) = replacement {
            output.push_str(ascii);
            in_non_ascii_run = false;
        } else if ch.is_ascii() {
            output.push(ch);
            in_non_ascii_run = false;
        } else if !in_non_ascii_run {
            output.push(' ');
            in_non_ascii_run = true;
        }
    }

    output
}
