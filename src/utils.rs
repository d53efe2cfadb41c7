pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fallback title for quizzes whose document carries none.
pub fn quiz_title(title: Option<&str>) -> &str {
    title.unwrap_or("Imported Quiz")
}
