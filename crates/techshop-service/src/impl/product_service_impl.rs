//! Product service implementations.

use crate::dto::{ProductCountResponse, ProductDashboardListResponse, ProductDashboardResponse};
use crate::mappers::ProductListMapper;
use crate::product_service::ProductService;
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use techshop_core::{PageRequest, ProductId, ProductStatus, ShopError, ShopResult};
use techshop_repository::ProductRepository;
use tracing::debug;

async fn get_dashboard_product(
    repository: &dyn ProductRepository,
    id: ProductId,
) -> ShopResult<ProductDashboardResponse> {
    debug!("Getting dashboard product: {}", id);

    let product = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ShopError::not_found("Product", id))?;

    Ok(ProductListMapper::to_dto(&product))
}

async fn list_dashboard_products(
    repository: &dyn ProductRepository,
    page: PageRequest,
) -> ShopResult<ProductDashboardListResponse> {
    debug!("Listing dashboard products, page: {}, size: {}", page.page, page.size);

    let products = repository.find_all(page).await?;
    Ok(ProductListMapper::to_list_response(&products))
}

async fn list_dashboard_products_by_status(
    repository: &dyn ProductRepository,
    status: ProductStatus,
    page: PageRequest,
) -> ShopResult<ProductDashboardListResponse> {
    debug!(
        "Listing dashboard products with status {}, page: {}, size: {}",
        status, page.page, page.size
    );

    let products = repository.find_by_status(status, page).await?;
    Ok(ProductListMapper::to_list_response(&products))
}

async fn count_products(repository: &dyn ProductRepository) -> ShopResult<ProductCountResponse> {
    Ok(ProductCountResponse {
        total: repository.count().await?,
        active: repository.count_by_status(ProductStatus::Active).await?,
        inactive: repository.count_by_status(ProductStatus::Inactive).await?,
    })
}

/// Generic product service implementation (non-DI).
pub struct ProductServiceImpl<R: ProductRepository> {
    product_repository: Arc<R>,
}

impl<R: ProductRepository> ProductServiceImpl<R> {
    /// Creates a new product service.
    pub fn new(product_repository: Arc<R>) -> Self {
        Self { product_repository }
    }
}

#[async_trait]
impl<R: ProductRepository + 'static> ProductService for ProductServiceImpl<R> {
    async fn get_dashboard_product(&self, id: ProductId) -> ShopResult<ProductDashboardResponse> {
        get_dashboard_product(self.product_repository.as_ref(), id).await
    }

    async fn list_dashboard_products(&self, page: PageRequest) -> ShopResult<ProductDashboardListResponse> {
        list_dashboard_products(self.product_repository.as_ref(), page).await
    }

    async fn list_dashboard_products_by_status(
        &self,
        status: ProductStatus,
        page: PageRequest,
    ) -> ShopResult<ProductDashboardListResponse> {
        list_dashboard_products_by_status(self.product_repository.as_ref(), status, page).await
    }

    async fn count_products(&self) -> ShopResult<ProductCountResponse> {
        count_products(self.product_repository.as_ref()).await
    }
}

/// Shaku-injectable product service.
#[derive(Component)]
#[shaku(interface = ProductService)]
pub struct ProductServiceComponent {
    #[shaku(inject)]
    product_repository: Arc<dyn ProductRepository>,
}

#[async_trait]
impl ProductService for ProductServiceComponent {
    async fn get_dashboard_product(&self, id: ProductId) -> ShopResult<ProductDashboardResponse> {
        get_dashboard_product(self.product_repository.as_ref(), id).await
    }

    async fn list_dashboard_products(&self, page: PageRequest) -> ShopResult<ProductDashboardListResponse> {
        list_dashboard_products(self.product_repository.as_ref(), page).await
    }

    async fn list_dashboard_products_by_status(
        &self,
        status: ProductStatus,
        page: PageRequest,
    ) -> ShopResult<ProductDashboardListResponse> {
        list_dashboard_products_by_status(self.product_repository.as_ref(), status, page).await
    }

    async fn count_products(&self) -> ShopResult<ProductCountResponse> {
        count_products(self.product_repository.as_ref()).await
    }
}

impl std::fmt::Debug for ProductServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductServiceComponent").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::sync::Mutex;
    use techshop_core::{Page, Product};

    /// In-memory repository for testing.
    struct InMemoryProductRepository {
        products: Mutex<Vec<Product>>,
    }

    impl InMemoryProductRepository {
        fn with_products(products: Vec<Product>) -> Self {
            Self {
                products: Mutex::new(products),
            }
        }

        fn visible(&self) -> Vec<Product> {
            let mut products: Vec<Product> = self
                .products
                .lock()
                .unwrap()
                .iter()
                .filter(|p| !p.is_deleted())
                .cloned()
                .collect();
            products.sort_by_key(|p| p.id);
            products
        }
    }

    #[async_trait]
    impl ProductRepository for InMemoryProductRepository {
        async fn find_by_id(&self, id: ProductId) -> ShopResult<Option<Product>> {
            Ok(self.visible().into_iter().find(|p| p.id == id))
        }

        async fn find_all(&self, page: PageRequest) -> ShopResult<Page<Product>> {
            Ok(Page::from_slice(&self.visible(), page))
        }

        async fn find_by_status(&self, status: ProductStatus, page: PageRequest) -> ShopResult<Page<Product>> {
            let matching: Vec<Product> =
                self.visible().into_iter().filter(|p| p.status == status).collect();
            Ok(Page::from_slice(&matching, page))
        }

        async fn count(&self) -> ShopResult<u64> {
            Ok(self.visible().len() as u64)
        }

        async fn count_by_status(&self, status: ProductStatus) -> ShopResult<u64> {
            Ok(self.visible().iter().filter(|p| p.status == status).count() as u64)
        }
    }

    fn product(id: i64, status: ProductStatus) -> Product {
        Product::builder(ProductId::new(id), format!("Product {id}"))
            .selling_price(Decimal::new(id * 100, 2))
            .quantity(10)
            .status(status)
            .build()
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(3, ProductStatus::Active),
            product(1, ProductStatus::Active),
            product(2, ProductStatus::Inactive),
            product(4, ProductStatus::Deleted),
            product(5, ProductStatus::Active),
        ]
    }

    fn service() -> ProductServiceImpl<InMemoryProductRepository> {
        ProductServiceImpl::new(Arc::new(InMemoryProductRepository::with_products(catalog())))
    }

    #[tokio::test]
    async fn test_get_dashboard_product() {
        let view = service().get_dashboard_product(ProductId::new(2)).await.unwrap();
        assert_eq!(view.id, ProductId::new(2));
        assert_eq!(view.name, "Product 2");
        assert_eq!(view.selling_price, Decimal::new(200, 2));
        assert_eq!(view.status, ProductStatus::Inactive);
        assert_eq!(view.brand, "");
    }

    #[tokio::test]
    async fn test_get_unknown_product_is_not_found() {
        let err = service().get_dashboard_product(ProductId::new(99)).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert!(err.to_string().contains("99"));
    }

    #[tokio::test]
    async fn test_get_deleted_product_is_not_found() {
        let err = service().get_dashboard_product(ProductId::new(4)).await.unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_list_dashboard_products_paginates() {
        let service = service();

        let first = service.list_dashboard_products(PageRequest::new(0, 3)).await.unwrap();
        let ids: Vec<i64> = first.products.iter().map(|p| p.id.into_inner()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(first.total_elements, 4);
        assert_eq!(first.total_pages, 2);

        let second = service.list_dashboard_products(PageRequest::new(1, 3)).await.unwrap();
        assert_eq!(second.products.len(), 1);
        assert_eq!(second.products[0].id, ProductId::new(5));
    }

    #[tokio::test]
    async fn test_list_by_status() {
        let list = service()
            .list_dashboard_products_by_status(ProductStatus::Active, PageRequest::first())
            .await
            .unwrap();
        assert_eq!(list.products.len(), 3);
        assert!(list.products.iter().all(|p| p.status == ProductStatus::Active));

        let deleted = service()
            .list_dashboard_products_by_status(ProductStatus::Deleted, PageRequest::first())
            .await
            .unwrap();
        assert!(deleted.products.is_empty());
    }

    #[tokio::test]
    async fn test_count_products() {
        let counts = service().count_products().await.unwrap();
        assert_eq!(
            counts,
            ProductCountResponse {
                total: 4,
                active: 3,
                inactive: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_concurrent_lookups_return_their_own_product() {
        let service = Arc::new(service());
        let ids = [1_i64, 2, 3, 5];

        let handles: Vec<_> = ids
            .iter()
            .map(|&id| {
                let service = Arc::clone(&service);
                tokio::spawn(async move { service.get_dashboard_product(ProductId::new(id)).await })
            })
            .collect();

        for (id, handle) in ids.iter().zip(handles) {
            let view = handle.await.unwrap().unwrap();
            assert_eq!(view.id, ProductId::new(*id));
            assert_eq!(view.name, format!("Product {id}"));
        }
    }
}
