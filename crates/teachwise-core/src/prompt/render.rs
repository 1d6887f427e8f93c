//! `{{name}}` placeholder substitution.

/// Replaces every `{{name}}` in `template` with the matching value from
/// `vars` in a single left-to-right pass.
///
/// Substituted values are copied verbatim and never scanned again, so user
/// text containing `{{...}}` cannot pull in other variables. Unknown
/// placeholders are left in place.
pub(crate) fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let value = after.find("}}").and_then(|end| {
            let key = &after[..end];
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, end))
        });
        match value {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_repeated_placeholders() {
        let out = render("{{a}} and {{b}} and {{a}}", &[("a", "x"), ("b", "y")]);
        assert_eq!(out, "x and y and x");
    }

    #[test]
    fn values_are_not_rescanned() {
        let out = render("Q: {{q}}", &[("q", "{{secret}}"), ("secret", "leaked")]);
        assert_eq!(out, "Q: {{secret}}");
    }

    #[test]
    fn unknown_and_unterminated_placeholders_survive() {
        assert_eq!(render("{{missing}} {{a}}", &[("a", "1")]), "{{missing}} 1");
        assert_eq!(render("tail {{open", &[("open", "x")]), "tail {{open");
    }

    #[test]
    fn single_braces_are_literal() {
        let out = render("{\n  \"n\": {{n}}\n}", &[("n", "3")]);
        assert_eq!(out, "{\n  \"n\": 3\n}");
    }
}
