//! Service error type shared by the collaborator contracts.

use thiserror::Error;

/// Failure surfaced by an external collaborator call.
///
/// All failures are recoverable: the editor reports them through the
/// notification sink and keeps its prior state. Variants are clonable and
/// comparable so they can travel inside editor messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The collaborator could not be reached.
    #[error("service unavailable: {0}")]
    Unavailable(String),
    /// The collaborator rejected the request.
    #[error("request rejected: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let err = ServiceError::Unavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "service unavailable: connection refused");
    }
}
