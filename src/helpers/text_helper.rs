const ESCAPED_NEWLINE: &str = "\\n";

pub struct TextHelper;

impl TextHelper {
    /// Turns every literal backslash-n pair into a real line break. The
    /// analysis service sometimes double-escapes newlines in `secure_code`.
    pub fn normalize_escaped_newlines(text: &str) -> String {
        text.replace(ESCAPED_NEWLINE, "\n")
    }

    /// Drops control characters, keeping line breaks and tabs, so service
    /// text cannot carry terminal escape sequences.
    pub fn strip_control_chars(text: &str) -> String {
        text.chars()
            .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
            .collect()
    }

    pub fn escape_html(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    /// Substitutes `{{KEY}}` placeholders in one pass, so substituted values
    /// are never scanned for placeholders themselves. Unknown keys are kept.
    pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            match after_open.find("}}") {
                Some(end) => {
                    let key = &after_open[..end];
                    match values.iter().find(|(name, _)| *name == key) {
                        Some((_, value)) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(key);
                            out.push_str("}}");
                        }
                    }
                    rest = &after_open[end + 2..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn splits_escaped_newlines_into_lines() {
        let normalized = TextHelper::normalize_escaped_newlines("a = 1\\nb = 2");
        assert_eq!(normalized, "a = 1\nb = 2");
        assert_eq!(normalized.lines().count(), 2);
    }

    #[test]
    fn leaves_other_escapes_alone() {
        assert_eq!(TextHelper::normalize_escaped_newlines("tab\\there"), "tab\\there");
        assert_eq!(TextHelper::normalize_escaped_newlines("real\nbreak"), "real\nbreak");
        assert_eq!(TextHelper::normalize_escaped_newlines("trailing\\"), "trailing\\");
    }

    #[test]
    fn double_backslash_keeps_the_first_one() {
        assert_eq!(TextHelper::normalize_escaped_newlines("x\\\\ny"), "x\\\ny");
    }

    #[test]
    fn strips_terminal_escapes_but_keeps_layout() {
        assert_eq!(
            TextHelper::strip_control_chars("\x1b[2Jred\x07\r\n\tindented"),
            "[2Jred\n\tindented"
        );
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            TextHelper::escape_html("<script>alert('x') & \"y\"</script>"),
            "&lt;script&gt;alert(&#39;x&#39;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
    }

    #[test]
    fn template_values_are_not_rescanned() {
        let filled = TextHelper::fill_template(
            "<p>{{A}}</p><p>{{B}}</p>{{UNKNOWN}}{{",
            &[("A", "{{B}}"), ("B", "two")],
        );
        assert_eq!(filled, "<p>{{B}}</p><p>two</p>{{UNKNOWN}}{{");
    }

    proptest! {
        #[test]
        fn text_without_backslashes_is_untouched(text in "[^\\\\]*") {
            prop_assert_eq!(TextHelper::normalize_escaped_newlines(&text), text);
        }

        #[test]
        fn each_escape_becomes_one_newline(parts in proptest::collection::vec("[a-z =0-9]*", 1..6)) {
            let joined = parts.join("\\n");
            let normalized = TextHelper::normalize_escaped_newlines(&joined);
            prop_assert_eq!(normalized, parts.join("\n"));
        }
    }
}
