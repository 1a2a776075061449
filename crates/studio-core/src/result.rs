//! Convenience result type alias for Studio.

use crate::error::AppError;

/// A specialized `Result` type for Studio operations.
pub type AppResult<T> = Result<T, AppError>;
