//! Product service trait definition.

use crate::dto::{ProductCountResponse, ProductDashboardListResponse, ProductDashboardResponse};
use async_trait::async_trait;
use techshop_core::{Interface, PageRequest, ProductId, ProductStatus, ShopResult};

/// Read-side operations backing the admin product dashboard.
#[async_trait]
pub trait ProductService: Interface + Send + Sync {
    /// Gets one dashboard row. Fails with `NotFound` for unknown or deleted
    /// products.
    async fn get_dashboard_product(&self, id: ProductId) -> ShopResult<ProductDashboardResponse>;

    /// Lists dashboard rows with pagination.
    async fn list_dashboard_products(&self, page: PageRequest) -> ShopResult<ProductDashboardListResponse>;

    /// Lists dashboard rows with the given status.
    async fn list_dashboard_products_by_status(
        &self,
        status: ProductStatus,
        page: PageRequest,
    ) -> ShopResult<ProductDashboardListResponse>;

    /// Counts products, overall and per listing status.
    async fn count_products(&self) -> ShopResult<ProductCountResponse>;
}
