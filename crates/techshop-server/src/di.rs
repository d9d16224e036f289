//! Dependency injection module using Shaku.
//!
//! `AdminModule` wires the MySQL pool, the product repository and the
//! product service for a single-process deployment.

use shaku::{module, HasComponent};
use std::sync::Arc;
use techshop_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, MySqlProductRepository,
};
use techshop_service::{ProductService, ProductServiceComponent};

module! {
    pub AdminModule {
        components = [
            DatabasePool,
            MySqlProductRepository,
            ProductServiceComponent,
        ],
        providers = [],
    }
}

impl AdminModule {
    /// Resolves the product service.
    pub fn product_service(&self) -> Arc<dyn ProductService> {
        HasComponent::<dyn ProductService>::resolve(self)
    }
}

/// Builds the admin module around an already connected pool.
///
/// The module's `DatabasePool` shares connections with `db_pool`.
pub fn build_admin_module(db_pool: &DatabasePool) -> Arc<AdminModule> {
    let module = AdminModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .build();

    Arc::new(module)
}
