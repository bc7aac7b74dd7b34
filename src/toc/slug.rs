use crate::utils::text::is_heading_whitespace;

/// Generate an anchor id from heading text
///
/// Lowercases the text, turns every whitespace character into a hyphen and
/// then drops anything outside `[a-z-]`. Whitespace runs are not collapsed,
/// so two spaces give two hyphens. Nothing is deduplicated and an all-symbol
/// heading yields an empty id.
pub fn generate_id_from_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if is_heading_whitespace(c) { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_from_text() {
        let test_cases = vec![
            ("Vulkan notes", "vulkan-notes"),
            ("Table of contents", "table-of-contents"),
            ("Install SDK", "install-sdk"),
            ("Setup", "setup"),
            ("pre-built binaries", "pre-built-binaries"),
            ("C++ & Vulkan 1.3", "c--vulkan-"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(generate_id_from_text(input), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_whitespace_runs_are_not_collapsed() {
        assert_eq!(generate_id_from_text("a  b"), "a--b");
        assert_eq!(generate_id_from_text("a\tb"), "a-b");
    }

    #[test]
    fn test_drops_digits_punctuation_and_non_ascii() {
        assert_eq!(generate_id_from_text("Step 2: draw!"), "step--draw");
        assert_eq!(generate_id_from_text("Überblick"), "berblick");
        assert_eq!(generate_id_from_text("snake_case"), "snakecase");
        assert_eq!(generate_id_from_text("1.2.3 !?"), "-");
    }

    #[test]
    fn test_all_symbol_heading_is_empty() {
        assert_eq!(generate_id_from_text("!?#"), "");
        assert_eq!(generate_id_from_text("42"), "");
        assert_eq!(generate_id_from_text(""), "");
    }

    #[test]
    fn test_is_deterministic() {
        let text = "Swapchain Recreation (resize)";
        assert_eq!(generate_id_from_text(text), generate_id_from_text(text));
        assert_eq!(generate_id_from_text(text), "swapchain-recreation-resize");
    }
}
