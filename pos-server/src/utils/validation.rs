//! Input validation helpers
//!
//! Centralized text length constants and validation functions shared by the
//! catalog and order operations.

use shared::error::ErrorCode;

use crate::utils::PosError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: menu item, table id, customer
pub const MAX_NAME_LEN: usize = 200;

/// Short labels: menu category
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Order notes (dietary restrictions etc.)
pub const MAX_NOTE_LEN: usize = 500;

// ── Numeric limits ──────────────────────────────────────────────────

/// Maximum allowed menu price
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Maximum allowed quantity per order line
pub const MAX_QUANTITY: i64 = 9999;

/// Maximum seats per table
pub const MAX_SEATS: i64 = 1000;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), PosError> {
    if value.trim().is_empty() {
        return Err(PosError::Validation(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        ));
    }
    validate_text_len(value, field, max_len)
}

/// Validate that a string is within the length limit.
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), PosError> {
    if value.chars().count() > max_len {
        return Err(PosError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        )));
    }
    Ok(())
}

/// Price must be finite, non-negative and below [`MAX_PRICE`]
pub fn validate_price(price: f64) -> Result<(), PosError> {
    if !price.is_finite() || price < 0.0 {
        return Err(PosError::Validation(
            ErrorCode::InvalidPrice,
            format!("price must be a non-negative number, got {price}"),
        ));
    }
    if price > MAX_PRICE {
        return Err(PosError::Validation(
            ErrorCode::InvalidPrice,
            format!("price exceeds maximum allowed ({MAX_PRICE}), got {price}"),
        ));
    }
    Ok(())
}

/// Seat count in `1..=MAX_SEATS`
pub fn validate_seats(seats: i64) -> Result<u32, PosError> {
    if !(1..=MAX_SEATS).contains(&seats) {
        return Err(PosError::Validation(
            ErrorCode::InvalidSeats,
            format!("seats must be between 1 and {MAX_SEATS}, got {seats}"),
        ));
    }
    // bounded above
    Ok(seats as u32)
}
