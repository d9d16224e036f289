//! Product status value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Listing status of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    /// Product is on sale.
    #[default]
    Active,
    /// Product is hidden from the storefront but kept in the catalog.
    Inactive,
    /// Product is soft-deleted.
    Deleted,
}

impl ProductStatus {
    /// Parses the database representation. Unknown values are treated as
    /// `Inactive` so a bad row never ends up on sale.
    #[must_use]
    pub fn from_db(value: &str) -> Self {
        match value.trim_matches(' ').to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "deleted" => Self::Deleted,
            _ => Self::Inactive,
        }
    }

    /// Returns the database / wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Deleted => "deleted",
        }
    }

    /// Whether the product is visible to shoppers.
    #[must_use]
    pub const fn is_listed(&self) -> bool {
        matches!(self, Self::Active)
    }

    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Active, Self::Inactive, Self::Deleted]
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
