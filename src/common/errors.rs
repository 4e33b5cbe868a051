use std::path::PathBuf;
use thiserror::Error;

/// Typed errors for winsweep operations.
/// `anyhow` handles the CLI boundary; these let modules be precise
/// about failures that callers may want to match on.
#[derive(Debug, Error)]
pub enum SweepError {
    /// No category with this identifier in the registry
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    /// An analyze or clean pass is already running
    #[error("another operation is already running")]
    Busy,

    /// Refusing to touch a protected path
    #[error("refusing to clean protected path '{0}'")]
    ProtectedPath(PathBuf),
}
