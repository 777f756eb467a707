//! Unvalidated input shapes and their conversion into domain values.
//!
//! This is where numeric text enters the system, so it is also where
//! [`DomainError::MalformedNumericInput`] is raised.

use serde::Deserialize;

use tally_core::{BigDecimal, DomainError, DomainResult, parse_decimal};

use crate::group::{GroupKey, LineItemGroup};
use crate::item::LineItem;

/// A price or quantity as supplied by the caller.
///
/// Decimal strings are the exact encoding. JSON integers are accepted since
/// `serde_json` holds them as `i64`/`u64`. Fractional or out-of-range JSON numbers
/// have already been rounded to `f64` by the JSON parser, so they are kept as
/// [`NumericInput::Other`] together with `null`, booleans, arrays and objects, and
/// rejected by [`NumericInput::parse`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum NumericInput {
    Text(String),
    Integer(serde_json::Number),
    Other(serde_json::Value),
}

impl NumericInput {
    pub fn parse(&self, field: &str) -> DomainResult<BigDecimal> {
        match self {
            NumericInput::Text(raw) => parse_decimal(field, raw),
            NumericInput::Integer(n) => parse_decimal(field, &n.to_string()),
            NumericInput::Other(value) => {
                Err(DomainError::malformed_numeric(field, value.to_string()))
            }
        }
    }
}

impl From<serde_json::Value> for NumericInput {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(raw) => NumericInput::Text(raw),
            serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => NumericInput::Integer(n),
            other => NumericInput::Other(other),
        }
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

/// Raw line item: `{"name": ..., "price": ..., "quantity": ...}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineItemInput {
    pub name: String,
    pub price: NumericInput,
    pub quantity: NumericInput,
}

impl TryFrom<LineItemInput> for LineItem {
    type Error = DomainError;

    fn try_from(input: LineItemInput) -> Result<Self, Self::Error> {
        let unit_price = input.price.parse("price")?;
        let quantity = input.quantity.parse("quantity")?;
        Ok(LineItem::new(input.name, unit_price, quantity))
    }
}

/// Raw group: `{"key": ..., "items": [...]}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineItemGroupInput {
    pub key: String,
    #[serde(default)]
    pub items: Vec<LineItemInput>,
}

impl LineItemGroupInput {
    /// Convert, reporting the index of the first item that fails to parse.
    pub fn into_group(self) -> Result<LineItemGroup, (Option<usize>, DomainError)> {
        if self.key.trim().is_empty() {
            return Err((None, DomainError::validation("group key must not be empty")));
        }

        let items = self
            .items
            .into_iter()
            .enumerate()
            .map(|(idx, raw)| LineItem::try_from(raw).map_err(|e| (Some(idx), e)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LineItemGroup::new(GroupKey::new(self.key), items))
    }
}

impl TryFrom<LineItemGroupInput> for LineItemGroup {
    type Error = DomainError;

    fn try_from(input: LineItemGroupInput) -> Result<Self, Self::Error> {
        input.into_group().map_err(|(_, e)| e)
    }
}
