//! Billing table domain module.
//!
//! Line items, keyed groups of line items and their exact decimal totals,
//! implemented purely as deterministic domain logic (no IO, no logging).

pub mod aggregator;
pub mod group;
pub mod input;
pub mod item;

pub use aggregator::{append_items, compute_total};
pub use group::{GroupKey, LineItemGroup};
pub use input::{LineItemGroupInput, LineItemInput, NumericInput};
pub use item::LineItem;
