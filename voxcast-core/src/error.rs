use thiserror::Error;

/// Error taxonomy surfaced by the handler. Nothing here is retried; the
/// first failure short-circuits straight to the response.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Client input malformed or out of bounds. Maps to a 400 with the
    /// message passed through verbatim.
    #[error("{0}")]
    Validation(String),

    /// A synthesis or storage collaborator failed. Maps to a 500 with the
    /// collaborator-supplied detail.
    #[error("provider error: {0}")]
    Provider(anyhow::Error),

    /// Anything else. Maps to a 500.
    #[error("unexpected error: {0}")]
    Unexpected(anyhow::Error),
}
