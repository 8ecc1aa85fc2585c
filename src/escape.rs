/// Escape a string for safe inclusion in HTML markup.
///
/// Disallowed-value lists come from administrator-editable configuration and
/// are rendered into requirement text, so every value passes through here
/// before it reaches the output.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_markup() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_html_ampersand_first() {
        assert_eq!(escape_html("a&b<c"), "a&amp;b&lt;c");
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("password123"), "password123");
    }

    #[test]
    fn test_escape_html_empty() {
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_html_quotes() {
        assert_eq!(escape_html(r#"he said "no""#), "he said &quot;no&quot;");
    }
}
