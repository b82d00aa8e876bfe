//! # Input Validation
//!
//! Operator input arrives as text, from prompts or from command-line flags. It is
//! parsed here, once, before anything reaches the record operations:
//!
//! ```text
//!   "10"   ──parse_quantity──▶ 10
//!   "-3"   ──parse_quantity──▶ Err(Validation { field: "quantity", .. })
//!   "1,50" ──parse_price─────▶ 1.5
//!   "abc"  ──parse_price─────▶ Err(Validation { field: "price", .. })
//! ```
//!
//! Values that are not numbers are rejected instead of being stored as sentinels.

use crate::error::{InventoryError, Result};

pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(InventoryError::validation("name", "must not be empty"));
    }
    Ok(())
}

/// Parses a product id: a positive integer.
pub fn parse_id(input: &str) -> Result<u64> {
    let input = input.trim();
    match input.parse::<u64>() {
        Ok(0) => Err(InventoryError::validation("id", "must be a positive integer")),
        Ok(id) => Ok(id),
        Err(_) => Err(InventoryError::validation(
            "id",
            format!("'{}' is not a positive integer", input),
        )),
    }
}

/// Parses a stock quantity: a whole number, zero or more.
pub fn parse_quantity(input: &str) -> Result<i64> {
    let input = input.trim();
    let quantity = input.parse::<i64>().map_err(|_| {
        InventoryError::validation("quantity", format!("'{}' is not a whole number", input))
    })?;
    if quantity < 0 {
        return Err(InventoryError::validation("quantity", "must not be negative"));
    }
    Ok(quantity)
}

/// Parses a price: a finite decimal, zero or more. Accepts `,` as the decimal separator.
pub fn parse_price(input: &str) -> Result<f64> {
    let input = input.trim();
    let normalized = input.replacen(',', ".", 1);
    let price = normalized
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| {
            InventoryError::validation("price", format!("'{}' is not a number", input))
        })?;
    if price < 0.0 {
        return Err(InventoryError::validation("price", "must not be negative"));
    }
    // "-0" parses as -0.0
    Ok(price + 0.0)
}

/// Parses an optional field: blank input means "no value".
pub fn parse_optional<T>(input: &str, parse: impl Fn(&str) -> Result<T>) -> Result<Option<T>> {
    if input.trim().is_empty() {
        Ok(None)
    } else {
        parse(input).map(Some)
    }
}
