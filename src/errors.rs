//! Centralized error handling.
//!
//! The store itself never fails: mutations on unresolved ids are silent
//! no-ops and readers render fallback labels. Errors exist only at the
//! caller-side seams - required-field validation of creation payloads and
//! parsing role strings from form input.

use thiserror::Error;
use validator::Validate;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("unknown role: {0}")]
    UnknownRole(String),
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Run a payload's required-field checks before handing it to the store.
///
/// Views call this on `New*` payloads; the store accepts whatever it is
/// given.
pub fn ensure_valid<T: Validate>(payload: &T) -> AppResult<()> {
    payload.validate()?;
    Ok(())
}
