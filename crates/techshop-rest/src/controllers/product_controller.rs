//! Product dashboard controller.

use crate::{
    extractors::{DashboardQuery, ValidatedQuery},
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use techshop_core::{PageRequest, ProductId, ShopError};
use techshop_service::{ProductCountResponse, ProductDashboardListResponse, ProductDashboardResponse};
use tracing::debug;

/// Creates the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(list_dashboard_products))
        .route("/dashboard/count", get(count_products))
        .route("/dashboard/:id", get(get_dashboard_product))
}

/// List products for the admin dashboard.
#[utoipa::path(
    get,
    path = "/api/v1/products/dashboard",
    tag = "products",
    params(DashboardQuery),
    responses(
        (status = 200, description = "A page of dashboard rows", body = ProductDashboardListResponse),
        (status = 400, description = "Invalid query", body = techshop_core::ErrorResponse)
    )
)]
pub async fn list_dashboard_products(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<DashboardQuery>,
) -> ApiResult<ProductDashboardListResponse> {
    debug!("List dashboard products request: {:?}", query);

    let page = PageRequest::from(&query);
    let response = match query.status {
        Some(status) => {
            state
                .product_service
                .list_dashboard_products_by_status(status, page)
                .await?
        }
        None => state.product_service.list_dashboard_products(page).await?,
    };
    ok(response)
}

/// Get one dashboard row by product ID.
#[utoipa::path(
    get,
    path = "/api/v1/products/dashboard/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Dashboard row", body = ProductDashboardResponse),
        (status = 400, description = "Malformed product ID", body = techshop_core::ErrorResponse),
        (status = 404, description = "Product not found", body = techshop_core::ErrorResponse)
    )
)]
pub async fn get_dashboard_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ProductDashboardResponse> {
    debug!("Get dashboard product request: {}", id);

    let product_id = parse_product_id(&id)?;
    let response = state.product_service.get_dashboard_product(product_id).await?;
    ok(response)
}

/// Catalog counters for the dashboard header.
#[utoipa::path(
    get,
    path = "/api/v1/products/dashboard/count",
    tag = "products",
    responses(
        (status = 200, description = "Product counters", body = ProductCountResponse)
    )
)]
pub async fn count_products(State(state): State<AppState>) -> ApiResult<ProductCountResponse> {
    debug!("Count products request");

    let response = state.product_service.count_products().await?;
    ok(response)
}

fn parse_product_id(id: &str) -> Result<ProductId, ShopError> {
    id.parse::<ProductId>()
        .map_err(|_| ShopError::validation(format!("Invalid product ID: {id}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id("42").unwrap(), ProductId::new(42));
        assert_eq!(parse_product_id(" 7 ").unwrap(), ProductId::new(7));
    }

    #[test]
    fn test_parse_invalid_product_id() {
        let err = parse_product_id("abc").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("abc"));
    }
}
