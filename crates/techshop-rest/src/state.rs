//! Application state for Axum handlers.

use shaku::{HasComponent, Module};
use std::sync::Arc;
use techshop_core::HealthCheck;
use techshop_service::ProductService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<dyn ProductService>,
    /// Dependencies checked by the readiness endpoint.
    pub health_checks: Arc<Vec<Arc<dyn HealthCheck>>>,
}

impl AppState {
    /// Creates a new application state with no readiness checks.
    pub fn new(product_service: Arc<dyn ProductService>) -> Self {
        Self {
            product_service,
            health_checks: Arc::new(Vec::new()),
        }
    }

    /// Resolves the services from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn ProductService>,
    {
        Self::new(module.resolve())
    }

    /// Registers a dependency for the readiness endpoint.
    #[must_use]
    pub fn with_health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        Arc::make_mut(&mut self.health_checks).push(check);
        self
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let checks: Vec<&str> = self.health_checks.iter().map(|c| c.name()).collect();
        f.debug_struct("AppState")
            .field("health_checks", &checks)
            .finish_non_exhaustive()
    }
}
