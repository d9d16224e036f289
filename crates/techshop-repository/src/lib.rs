//! # Techshop Repository
//!
//! Read access to the product catalog.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ProductRepository>  (domain interface)
//! MySqlProductRepository            (SQLx)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! MySQL
//! ```

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;
