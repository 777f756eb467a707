use bigdecimal::BigDecimal;

/// A single priced, quantified entry.
///
/// Prices and quantities are exact decimals; fractional quantities (weights,
/// lengths) are allowed. Negative values are not rejected here.
///
/// Untrusted values come in through [`crate::LineItemInput`], which checks every
/// price and quantity before building a `LineItem`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    name: String,
    unit_price: BigDecimal,
    quantity: BigDecimal,
}

impl LineItem {
    pub fn new(name: impl Into<String>, unit_price: BigDecimal, quantity: BigDecimal) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> &BigDecimal {
        &self.unit_price
    }

    pub fn quantity(&self) -> &BigDecimal {
        &self.quantity
    }

    /// `unit_price × quantity`, exact.
    pub fn line_total(&self) -> BigDecimal {
        &self.unit_price * &self.quantity
    }
}
