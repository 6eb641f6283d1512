//! Validation helpers for inventory inputs
//!
//! These return plain `&'static str` messages; the backend translates
//! failures into its error type with the offending field attached.

use rust_decimal::Decimal;

use crate::models::TransactionType;

/// A transaction quantity must be strictly positive
pub fn validate_quantity(quantity: i32) -> Result<(), &'static str> {
    if quantity <= 0 {
        return Err("Quantity must be positive");
    }
    Ok(())
}

/// A money amount must be non-negative
pub fn validate_money(amount: Decimal) -> Result<(), &'static str> {
    if amount < Decimal::ZERO {
        return Err("Amount cannot be negative");
    }
    Ok(())
}

/// A low-stock threshold must be non-negative
pub fn validate_threshold(threshold: i32) -> Result<(), &'static str> {
    if threshold < 0 {
        return Err("Threshold cannot be negative");
    }
    Ok(())
}

/// Unit cost/price must be populated consistently with the transaction type:
/// a purchase supplies a unit cost, a sale supplies a unit price. The
/// opposite field may be absent; when present it must still be non-negative.
pub fn validate_amounts_for_type(
    transaction_type: TransactionType,
    unit_cost: Option<Decimal>,
    unit_price: Option<Decimal>,
) -> Result<(), &'static str> {
    match transaction_type {
        TransactionType::Purchase => {
            if unit_cost.is_none() {
                return Err("A purchase requires a unit cost");
            }
        }
        TransactionType::Sale => {
            if unit_price.is_none() {
                return Err("A sale requires a unit price");
            }
        }
    }
    if let Some(cost) = unit_cost {
        if cost < Decimal::ZERO {
            return Err("Unit cost cannot be negative");
        }
    }
    if let Some(price) = unit_price {
        if price < Decimal::ZERO {
            return Err("Unit price cannot be negative");
        }
    }
    Ok(())
}
