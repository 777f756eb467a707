//! Exact decimal parsing at the input boundary.
//!
//! Prices and quantities enter the system as text. They are parsed straight into
//! [`BigDecimal`] so no binary floating-point value ever sits between the input and
//! the arithmetic. A value that does not parse is reported as
//! [`DomainError::MalformedNumericInput`]; it is never coerced to zero.
//!
//! The decimal scale (digits after the point, or a negative exponent for large
//! magnitudes) is bounded by [`MAX_SCALE`] so products and sums of accepted
//! values stay within `BigDecimal`'s `i64` scale.

use core::str::FromStr;

use bigdecimal::{BigDecimal, Zero};

use crate::error::{DomainError, DomainResult};

/// Largest accepted absolute decimal scale of a parsed value.
pub const MAX_SCALE: i64 = 1_000;

/// Parse `raw` as an exact decimal, naming `field` in the error on failure.
///
/// Surrounding whitespace is ignored. Plain (`"19.99"`, `"-3"`) and exponent
/// (`"1.5e2"`) notation are accepted; values whose scale exceeds [`MAX_SCALE`]
/// in either direction are rejected.
pub fn parse_decimal(field: &str, raw: &str) -> DomainResult<BigDecimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::malformed_numeric(field, raw));
    }

    let value =
        BigDecimal::from_str(trimmed).map_err(|_| DomainError::malformed_numeric(field, raw))?;

    let (_, scale) = value.as_bigint_and_exponent();
    if scale.unsigned_abs() > MAX_SCALE.unsigned_abs() {
        return Err(DomainError::malformed_numeric(field, raw));
    }

    Ok(value)
}

/// Exact zero, the identity of decimal addition.
pub fn zero() -> BigDecimal {
    BigDecimal::zero()
}
