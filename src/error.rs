use thiserror::Error;

/// Failures around the scorer. Scoring itself is total; these come from
/// reading input and rendering output.
#[derive(Error, Debug)]
pub enum DiagnosticError {
    #[error("IO Error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty input in {0}: please paste text to continue")]
    EmptyInput(String),
}

pub type Result<T> = std::result::Result<T, DiagnosticError>;
