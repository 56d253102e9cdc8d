use thiserror::Error;

/// Crate error type.
///
/// All fallible library operations return [`Result`] with this enum so callers
/// can distinguish generation failures from clipboard failures and handle each
/// explicitly.
#[derive(Error, Debug)]
pub enum Error {
    /// The derived character pool contained no characters to draw from.
    #[error("character set is empty, nothing to sample from")]
    EmptyCharset,

    /// Clipboard access failed or was denied by the host environment.
    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO errors from the interactive session.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for passmith operations.
pub type Result<T> = std::result::Result<T, Error>;
