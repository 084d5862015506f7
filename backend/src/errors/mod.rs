use thiserror::Error;

/// Errors raised by the scheduling and rating core when an input cannot be
/// turned into a meaningful result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("pool size must be at least 1, got {0}")]
    InvalidPoolSize(usize),

    #[error("unknown match format: {0}")]
    UnknownFormat(String),
}

/// Add context to file read errors
pub fn read_context(path: &std::path::Path) -> String {
    format!("Failed to read {}", path.display())
}

/// Add context to file write errors
pub fn write_context(path: &std::path::Path) -> String {
    format!("Failed to write {}", path.display())
}

/// Add context to parse errors, keeping a short preview of the offending input
pub fn parse_context(path: &std::path::Path, contents: &str) -> String {
    let preview: String = contents.chars().take(200).collect();
    format!(
        "Failed to parse JSON from {}. First 200 chars: {}",
        path.display(),
        preview
    )
}
