//! Top-level error wrapper types.

use crate::{ConfigError, PlatformError};

/// Every error condition a Vestibule operation can surface.
///
/// # Examples
///
/// ```
/// use vestibule_error::{ConfigError, VestibuleError};
///
/// let err: VestibuleError = ConfigError::new("No portal channel names configured").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VestibuleErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Remote platform call failed
    #[from(PlatformError)]
    Platform(PlatformError),
}

/// Vestibule error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vestibule_error::{ConfigError, VestibuleErrorKind, VestibuleResult};
///
/// fn load() -> VestibuleResult<()> {
///     Err(ConfigError::new("Missing token"))?
/// }
///
/// let err = load().unwrap_err();
/// assert!(matches!(err.kind(), VestibuleErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vestibule Error: {}", _0)]
pub struct VestibuleError(Box<VestibuleErrorKind>);

impl VestibuleError {
    /// Create a new error from a kind.
    pub fn new(kind: VestibuleErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VestibuleErrorKind {
        &self.0
    }

    /// Whether this error came from configuration rather than the platform.
    pub fn is_config(&self) -> bool {
        matches!(self.kind(), VestibuleErrorKind::Config(_))
    }
}

// Generic From implementation for any type that converts to VestibuleErrorKind
impl<T> From<T> for VestibuleError
where
    T: Into<VestibuleErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vestibule operations.
pub type VestibuleResult<T> = std::result::Result<T, VestibuleError>;
