//! Error types for Vestibule.
//!
//! This crate provides the foundation error types used throughout the Vestibule workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vestibule_error::{PlatformError, PlatformErrorKind, VestibuleResult};
//!
//! fn create_category() -> VestibuleResult<u64> {
//!     Err(PlatformError::new(PlatformErrorKind::PermissionDenied(
//!         "Missing Permissions".to_string(),
//!     )))?
//! }
//!
//! match create_category() {
//!     Ok(id) => println!("Created {}", id),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod platform;

pub use config::ConfigError;
pub use error::{VestibuleError, VestibuleErrorKind, VestibuleResult};
pub use platform::{PlatformError, PlatformErrorKind};
