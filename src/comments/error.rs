use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommentsError {
    /// A single package was asked for and it has no comment.
    #[error("There are no comments in the composer.json file for the package {package}")]
    NotFound { package: String },

    /// The host sent an event whose operation kind is not install, update or uninstall.
    #[error("Unknown operation: {operation}")]
    UnknownOperation { operation: String },

    #[error("invalid package event: {reason}")]
    InvalidEvent { reason: String },
}

impl CommentsError {
    #[must_use]
    pub fn not_found(package: impl Into<String>) -> Self {
        Self::NotFound {
            package: package.into(),
        }
    }

    #[must_use]
    pub fn unknown_operation(operation: impl Into<String>) -> Self {
        Self::UnknownOperation {
            operation: operation.into(),
        }
    }

    #[must_use]
    pub fn invalid_event(reason: impl Into<String>) -> Self {
        Self::InvalidEvent {
            reason: reason.into(),
        }
    }
}
