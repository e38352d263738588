//! Language-code to display-name mapping.

/// Resolve a language code (or an already-resolved name) to the display
/// string used in the prompt. Unknown values fall back to English.
pub fn display_language(code: &str) -> &'static str {
    match code {
        "en" | "English" => "English",
        "hi" | "Hindi" => "Hindi (हिंदी)",
        "mr" | "Marathi" => "Marathi (मराठी)",
        _ => "English",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_resolve() {
        assert_eq!(display_language("en"), "English");
        assert_eq!(display_language("hi"), "Hindi (हिंदी)");
        assert_eq!(display_language("mr"), "Marathi (मराठी)");
    }

    #[test]
    fn test_resolved_names_pass_through() {
        assert_eq!(display_language("Hindi"), "Hindi (हिंदी)");
        assert_eq!(display_language("Marathi"), "Marathi (मराठी)");
    }

    #[test]
    fn test_unknown_falls_back_to_english() {
        assert_eq!(display_language("fr"), "English");
        assert_eq!(display_language(""), "English");
    }
}
