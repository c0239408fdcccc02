/// Escape `content` for a single-quoted JavaScript string literal.
///
/// Backslashes are doubled, single quotes get a backslash, and each `\r\n` or
/// `\n` becomes the two characters `\n`. A lone `\r` is kept as is.
pub fn escape_content(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len() + content.len() / 8);
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                escaped.push_str("\\n");
            }
            other => escaped.push(other),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_content("<div>hello</div>"), "<div>hello</div>");
        assert_eq!(escape_content(""), "");
    }

    #[test]
    fn test_backslash_quote_and_crlf() {
        assert_eq!(escape_content("a\\b'c\r\nd"), "a\\\\b\\'c\\nd");
    }

    #[test]
    fn test_no_double_escaping() {
        // An already escaped quote gains a doubled backslash and a new escape
        assert_eq!(escape_content("\\'"), "\\\\\\'");
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(escape_content("a\nb"), "a\\nb");
        assert_eq!(escape_content("a\r\n\r\nb"), "a\\n\\nb");
        assert_eq!(escape_content("a\rb"), "a\rb");
        assert_eq!(escape_content("a\r\r\nb"), "a\r\\nb");
    }

    #[test]
    fn test_double_quotes_untouched() {
        assert_eq!(escape_content(r#"<a href="x">"#), r#"<a href="x">"#);
    }
}
