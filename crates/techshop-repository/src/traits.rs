//! Repository trait definitions.

use async_trait::async_trait;
use techshop_core::{Interface, Page, PageRequest, Product, ProductId, ProductStatus, ShopResult};

/// Read accessor for catalog products.
///
/// Soft-deleted products are invisible through every method.
#[async_trait]
pub trait ProductRepository: Interface + Send + Sync {
    /// Finds a product by ID.
    async fn find_by_id(&self, id: ProductId) -> ShopResult<Option<Product>>;

    /// Finds all products ordered by ID.
    async fn find_all(&self, page: PageRequest) -> ShopResult<Page<Product>>;

    /// Finds products with the given status, ordered by ID.
    async fn find_by_status(&self, status: ProductStatus, page: PageRequest) -> ShopResult<Page<Product>>;

    /// Counts all products.
    async fn count(&self) -> ShopResult<u64>;

    /// Counts products with the given status.
    async fn count_by_status(&self, status: ProductStatus) -> ShopResult<u64>;
}
