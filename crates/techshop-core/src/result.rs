//! Result type aliases for Techshop.

use crate::ShopError;

/// A specialized `Result` type for Techshop operations.
pub type ShopResult<T> = Result<T, ShopError>;
