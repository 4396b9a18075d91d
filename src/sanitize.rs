/// Escapes the characters HTML assigns meaning to, so stored free text cannot
/// run as markup when a client renders it. Output-side only: the store keeps
/// the raw submitted text, and any other consumer of the tables sees it
/// unescaped.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_script_tags() {
        assert_eq!(
            escape_html("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn escape_handles_quotes_and_ampersands() {
        assert_eq!(
            escape_html(r#"a "b" & 'c'"#),
            "a &quot;b&quot; &amp; &#39;c&#39;"
        );
    }

    #[test]
    fn escape_passes_plain_text_through() {
        assert_eq!(escape_html("Grateful for coffee"), "Grateful for coffee");
    }

    #[test]
    fn escape_of_empty_string_is_empty() {
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn escape_handles_backticks() {
        assert_eq!(escape_html("`rm -rf`"), "&#96;rm -rf&#96;");
    }
}
