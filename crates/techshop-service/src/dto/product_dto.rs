//! Product dashboard DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use techshop_core::{CategoryId, ProductId, ProductStatus};
use utoipa::ToSchema;

/// One row of the admin dashboard product table.
///
/// Built from a [`techshop_core::Product`] by
/// [`ProductListMapper`](crate::ProductListMapper). Serialised in camelCase
/// for the dashboard frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDashboardResponse {
    pub id: ProductId,
    pub name: String,
    /// `null` when the product is uncategorised.
    pub category_id: Option<CategoryId>,
    /// Empty when the product has no brand.
    pub brand: String,
    #[schema(value_type = String, example = "7.00")]
    pub import_price: Decimal,
    #[schema(value_type = String, example = "9.99")]
    pub selling_price: Decimal,
    pub quantity: i32,
    /// Image URL or base64 payload; empty when the product has no image.
    pub image: String,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A page of dashboard rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDashboardListResponse {
    pub products: Vec<ProductDashboardResponse>,
    pub page: usize,
    pub size: usize,
    pub total_elements: u64,
    pub total_pages: u64,
}

/// Catalog counters shown above the dashboard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductCountResponse {
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
}
