//! `tally-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging).

pub mod decimal;
pub mod entity;
pub mod error;

pub use bigdecimal::BigDecimal;
pub use decimal::parse_decimal;
pub use entity::{Entity, position_by_id};
pub use error::{DomainError, DomainResult};
