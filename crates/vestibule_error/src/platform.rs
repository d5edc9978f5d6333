//! Errors raised by calls against the remote chat platform.

/// Classification of a failed remote call.
///
/// Nothing in Vestibule retries, so the classification only shapes log output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PlatformErrorKind {
    /// The bot lacks the permission required for the call.
    #[display("Permission denied: {_0}")]
    PermissionDenied(String),

    /// The target object no longer exists.
    #[display("Not found: {_0}")]
    NotFound(String),

    /// The platform rejected the call because of rate limiting.
    #[display("Rate limited: {_0}")]
    RateLimited(String),

    /// The platform answered with some other error status.
    #[display("Request rejected with status {status}: {message}")]
    Rejected {
        /// HTTP status code returned by the platform
        status: u16,
        /// Message returned by the platform
        message: String,
    },

    /// The call never produced a platform answer (network, gateway, decoding).
    #[display("Transport failure: {_0}")]
    Transport(String),
}

/// Remote platform error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Platform Error: {} at line {} in {}", kind, line, file)]
pub struct PlatformError {
    kind: PlatformErrorKind,
    line: u32,
    file: &'static str,
}

impl PlatformError {
    /// Create a new platform error with caller location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use vestibule_error::{PlatformError, PlatformErrorKind};
    ///
    /// let err = PlatformError::new(PlatformErrorKind::NotFound("Unknown Channel".into()));
    /// assert!(err.to_string().contains("Unknown Channel"));
    /// ```
    #[track_caller]
    pub fn new(kind: PlatformErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PlatformErrorKind {
        &self.kind
    }
}
