//! Value objects.

mod product_status;

pub use product_status::*;
