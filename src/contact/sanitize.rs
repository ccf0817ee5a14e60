//! Markup stripping for free-text contact input.

use regex::Regex;
use std::sync::LazyLock;

/// A `<script ...>` element up to and including the first closing tag.
static SCRIPT_BLOCK: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script\s*>"));

/// Any angle-bracket tag.
static TAG: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"<[^>]*>"));

/// An opening `<script` that never closes; swallows the rest of the input.
static DANGLING_SCRIPT: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?is)<script.*$"));

/// Strip script blocks and tag markup from `input`, then trim it.
///
/// Deterministic and total: the patterns are compile-time constants, and if one
/// somehow failed to compile that pass is skipped rather than panicking.
///
/// The result is a fixed point: `sanitize_input(&sanitize_input(s)) == sanitize_input(s)`.
/// After tag stripping, any `<` left over has no `>` after it, so no later pass
/// can match again.
#[must_use]
pub fn sanitize_input(input: &str) -> String {
    let without_scripts = replace_all(&SCRIPT_BLOCK, input);
    let without_tags = replace_all(&TAG, &without_scripts);
    let without_dangling = replace_all(&DANGLING_SCRIPT, &without_tags);
    without_dangling.trim().to_string()
}

fn replace_all(pattern: &LazyLock<Result<Regex, regex::Error>>, text: &str) -> String {
    match pattern.as_ref() {
        Ok(re) => re.replace_all(text, "").into_owned(),
        Err(e) => {
            tracing::error!("Sanitizer pattern failed to compile: {e}");
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hello <script>alert(\"xss\")</script> World", "Hello  World")]
    #[case("This is safe content with <b>bold</b> text", "This is safe content with bold text")]
    #[case("  padded  ", "padded")]
    #[case("<SCRIPT type=\"text/javascript\">x()</SCRIPT>after", "after")]
    #[case("a <script>\nmulti\nline\n</script> b", "a  b")]
    #[case("5 < 6 and 7 > 3", "5  3")]
    #[case("1 < 2", "1 < 2")]
    #[case("", "")]
    fn test_sanitize_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_input(input), expected);
    }

    #[test]
    fn test_unterminated_script_is_dropped() {
        assert_eq!(sanitize_input("hi <script>steal()"), "hi");
        assert_eq!(
            sanitize_input("<script>a</script>keep<script src=x"),
            "keep"
        );
    }

    #[test]
    fn test_script_removed_before_tags() {
        // Tag stripping alone would leave the script body behind.
        assert_eq!(sanitize_input("<script>body</script>"), "");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(sanitize_input("Jane Doe"), "Jane Doe");
        assert_eq!(sanitize_input("jane@example.com"), "jane@example.com");
    }

    proptest! {
        #[test]
        fn prop_sanitize_is_idempotent(input in any::<String>()) {
            let once = sanitize_input(&input);
            prop_assert_eq!(sanitize_input(&once), once);
        }

        #[test]
        fn prop_sanitize_is_idempotent_on_markup(input in "[a-zA-Z <>/\"=]{0,64}") {
            let once = sanitize_input(&input);
            prop_assert_eq!(sanitize_input(&once), once);
        }

        #[test]
        fn prop_no_script_survives(
            prefix in "[a-z <>/]{0,16}",
            body in "[a-z <>]{0,16}",
            suffix in "[a-z <>/]{0,16}",
        ) {
            let input = format!("{prefix}<script>{body}</script>{suffix}");
            let output = sanitize_input(&input).to_lowercase();
            prop_assert!(!output.contains("<script"));
        }

        #[test]
        fn prop_output_is_trimmed(input in any::<String>()) {
            let output = sanitize_input(&input);
            prop_assert_eq!(output.trim(), output.as_str());
        }
    }
}
