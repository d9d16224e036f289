//! Custom Axum extractors.

mod dashboard_query;
mod validated;

pub use dashboard_query::*;
pub use validated::*;
