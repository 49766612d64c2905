/// Sentinel returned when no language can be detected.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Detects the language of a piece of free text.
///
/// Returns the ISO 639-3 code of the best-guess language (e.g. `"eng"`,
/// `"spa"`). Detection is fully deterministic: the same input always yields
/// the same code across runs. Empty, whitespace-only, or otherwise
/// undetectable input returns [`UNKNOWN_LANGUAGE`] rather than failing.
///
/// # Example
///
/// ```
/// use tastecli::enrich::detect_language;
///
/// assert_eq!(detect_language(""), "unknown");
/// ```
pub fn detect_language(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return UNKNOWN_LANGUAGE.to_string();
    }

    match whatlang::detect(trimmed) {
        Some(info) => info.lang().code().to_string(),
        None => UNKNOWN_LANGUAGE.to_string(),
    }
}
