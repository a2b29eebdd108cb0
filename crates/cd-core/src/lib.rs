//! # cd-core
//!
//! Core types, configuration, and utilities for Content Delivery RS.
//!
//! This crate provides the foundational building blocks used across the other crates:
//! - Common error types and the `CdResult` alias
//! - Connection configuration and search route selection
//! - Paging arithmetic shared by the query session

pub mod error;
pub mod pagination;
pub mod config;

pub use error::*;
pub use pagination::*;
pub use config::{ConfigError, DeliveryConfig, SearchRoute};
