//! Filename component sanitization.

/// Sanitize one component of a generated filename.
///
/// Path separators, reserved characters and control characters become `_`,
/// so the result can never name a different directory. Empty input maps to
/// `unknown`.
pub fn sanitize_component(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        "unknown".to_string()
    } else {
        sanitized
    }
}
