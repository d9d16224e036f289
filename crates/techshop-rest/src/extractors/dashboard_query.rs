//! Dashboard listing query parameters.

use serde::Deserialize;
use techshop_core::{PageRequest, ProductStatus};
use utoipa::IntoParams;
use validator::Validate;

/// Query parameters of the dashboard product listing.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// Zero-based page index, at most 1 000 000 (default 0).
    #[serde(default)]
    #[validate(range(max = 1_000_000, message = "page must be at most 1000000"))]
    pub page: Option<usize>,
    /// Page size, 1 to 100 (default 20).
    #[serde(default)]
    #[validate(range(min = 1, max = 100, message = "size must be between 1 and 100"))]
    pub size: Option<usize>,
    /// Restrict the listing to one status.
    #[serde(default)]
    pub status: Option<ProductStatus>,
}

impl From<&DashboardQuery> for PageRequest {
    fn from(query: &DashboardQuery) -> Self {
        PageRequest::new(
            query.page.unwrap_or(0),
            query.size.unwrap_or(PageRequest::DEFAULT_SIZE),
        )
    }
}
