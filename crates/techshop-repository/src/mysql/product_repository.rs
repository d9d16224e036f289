//! MySQL product repository implementation.

use crate::{traits::ProductRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use techshop_core::{
    CategoryId, Page, PageRequest, Product, ProductId, ProductStatus, ShopError, ShopResult,
};
use tracing::debug;

const SELECT_PRODUCTS: &str = r"
    SELECT id, name, category_id, brand, description, import_price, selling_price,
           quantity, image, attributes, status, created_at, updated_at
    FROM products";

/// The status column classified the same way as `ProductStatus::from_db`:
/// anything that is not `active` or `deleted` counts as `inactive`.
const NORMALIZED_STATUS: &str = "CASE LOWER(TRIM(status)) \
     WHEN 'active' THEN 'active' \
     WHEN 'deleted' THEN 'deleted' \
     ELSE 'inactive' END";

fn visible_filter() -> String {
    format!("{NORMALIZED_STATUS} <> 'deleted'")
}

fn status_filter() -> String {
    format!("{NORMALIZED_STATUS} = ? AND {NORMALIZED_STATUS} <> 'deleted'")
}

/// MySQL product repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = ProductRepository)]
pub struct MySqlProductRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlProductRepository {
    /// Creates a new MySQL product repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a product.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    category_id: Option<i64>,
    brand: Option<String>,
    description: Option<String>,
    import_price: Decimal,
    selling_price: Decimal,
    quantity: i32,
    image: Option<String>,
    attributes: Option<Value>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = ShopError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let attributes = match row.attributes {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map),
            Some(other) => {
                return Err(ShopError::Internal(format!(
                    "Product {} has non-object attributes: {}",
                    row.id, other
                )))
            }
        };

        Ok(Product {
            id: ProductId::new(row.id),
            name: row.name,
            category_id: row.category_id.map(CategoryId::new),
            brand: row.brand,
            description: row.description,
            import_price: row.import_price,
            selling_price: row.selling_price,
            quantity: row.quantity,
            image: row.image,
            attributes,
            status: ProductStatus::from_db(&row.status),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn to_u64(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}

fn rows_to_page(rows: Vec<ProductRow>, page: PageRequest, total: i64) -> ShopResult<Page<Product>> {
    let products = rows
        .into_iter()
        .map(Product::try_from)
        .collect::<ShopResult<Vec<_>>>()?;
    Ok(Page::new(products, page.page, page.size, to_u64(total)))
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find_by_id(&self, id: ProductId) -> ShopResult<Option<Product>> {
        debug!("Finding product by id: {}", id);

        let sql = format!("{SELECT_PRODUCTS} WHERE id = ? AND {}", visible_filter());
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Product::try_from).transpose()
    }

    async fn find_all(&self, page: PageRequest) -> ShopResult<Page<Product>> {
        debug!("Finding all products, page: {}, size: {}", page.page, page.size);

        let count_sql = format!("SELECT COUNT(*) FROM products WHERE {}", visible_filter());
        let total: i64 = sqlx::query_scalar(&count_sql)
            .fetch_one(self.pool.inner())
            .await?;

        let sql = format!(
            "{SELECT_PRODUCTS} WHERE {} ORDER BY id LIMIT ? OFFSET ?",
            visible_filter()
        );
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(page.limit() as u64)
            .bind(page.offset() as u64)
            .fetch_all(self.pool.inner())
            .await?;

        rows_to_page(rows, page, total)
    }

    async fn find_by_status(&self, status: ProductStatus, page: PageRequest) -> ShopResult<Page<Product>> {
        debug!(
            "Finding products by status: {}, page: {}, size: {}",
            status, page.page, page.size
        );

        let count_sql = format!("SELECT COUNT(*) FROM products WHERE {}", status_filter());
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(status.as_str())
            .fetch_one(self.pool.inner())
            .await?;

        let sql = format!(
            "{SELECT_PRODUCTS} WHERE {} ORDER BY id LIMIT ? OFFSET ?",
            status_filter()
        );
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(status.as_str())
            .bind(page.limit() as u64)
            .bind(page.offset() as u64)
            .fetch_all(self.pool.inner())
            .await?;

        rows_to_page(rows, page, total)
    }

    async fn count(&self) -> ShopResult<u64> {
        let sql = format!("SELECT COUNT(*) FROM products WHERE {}", visible_filter());
        let count: i64 = sqlx::query_scalar(&sql)
            .fetch_one(self.pool.inner())
            .await?;
        Ok(to_u64(count))
    }

    async fn count_by_status(&self, status: ProductStatus) -> ShopResult<u64> {
        let sql = format!("SELECT COUNT(*) FROM products WHERE {}", status_filter());
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(status.as_str())
            .fetch_one(self.pool.inner())
            .await?;
        Ok(to_u64(count))
    }
}

impl std::fmt::Debug for MySqlProductRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlProductRepository").finish_non_exhaustive()
    }
}
