//! Result type alias for toggle operations

use crate::error::TogglerError;

/// Standard Result type for toggle operations
pub type Result<T> = std::result::Result<T, TogglerError>;
