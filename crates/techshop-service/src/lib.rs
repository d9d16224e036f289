//! # Techshop Service
//!
//! Product dashboard service layer. Reads catalog products through the
//! repository and converts them into dashboard views with
//! [`mappers::ProductListMapper`].

pub mod dto;
pub mod r#impl;
pub mod mappers;
pub mod product_service;

pub use dto::*;
pub use mappers::*;
pub use product_service::*;
pub use r#impl::{ProductServiceComponent, ProductServiceImpl};
