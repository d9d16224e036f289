//! OpenAPI documentation configuration.

use crate::controllers::health_controller::{ComponentHealth, HealthResponse, ReadinessResponse};
use techshop_core::{CategoryId, ErrorResponse, FieldError, ProductId, ProductStatus};
use techshop_service::{ProductCountResponse, ProductDashboardListResponse, ProductDashboardResponse};
use utoipa::OpenApi;

/// OpenAPI documentation for the Techshop admin API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Techshop Admin API",
        version = "1.0.0",
        description = "Product dashboard API for the Techshop admin console",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::product_controller::list_dashboard_products,
        crate::controllers::product_controller::get_dashboard_product,
        crate::controllers::product_controller::count_products,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ProductId,
            CategoryId,
            ProductStatus,
            ErrorResponse,
            FieldError,
            ProductDashboardResponse,
            ProductDashboardListResponse,
            ProductCountResponse,
            HealthResponse,
            ReadinessResponse,
            ComponentHealth,
        )
    ),
    tags(
        (name = "products", description = "Product dashboard endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
