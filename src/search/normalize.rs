use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Lowercase, strip accents, trim. "  Água Clara " -> "agua clara".
pub fn normalize_text(input: &str) -> String {
    input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}
