//! # Techshop Server Library
//!
//! Dependency injection wiring and startup utilities for the Techshop
//! admin server.

pub mod di;
pub mod startup;
