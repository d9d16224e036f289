//! Entity-DTO mappers.

mod product_list_mapper;

pub use product_list_mapper::*;
