//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Command error: {0}")]
    Command(#[from] crate::commands::CommandError),

    #[error("Remote error: {0}")]
    Remote(#[from] crate::remote::RemoteError),

    #[error("Panel cannot be opened: {0}")]
    PanelUnavailable(String),

    #[error("Operation not supported by this panel")]
    Unsupported,
}
