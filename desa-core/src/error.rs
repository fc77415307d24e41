use thiserror::Error;

/// Failure classes surfaced by the client. `Display` of a value is exactly
/// the text a view renders; nothing here escalates past the view that caused
/// it.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Login or registration was rejected by the backend. Carries only a
    /// generic user-facing message, never backend detail.
    #[error("{0}")]
    Authentication(String),

    /// A required field failed the client-side check. Nothing was sent.
    #[error("{0}")]
    Validation(String),

    /// An authorized call came back with a failure status. `body` holds the
    /// raw backend text when the backend supplied one. A failed request never
    /// changes session state, even when the token itself was the problem.
    #[error("{body}")]
    Request { status: u16, body: String },

    /// The fetch itself failed before any response could be classified.
    #[error("{0}")]
    Network(String),
}
