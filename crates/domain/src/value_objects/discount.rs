//! Discount value type
//!
//! A closed tagged union: a promo code is either a percentage off the order
//! total or a fixed amount off. Every consumption site matches exhaustively,
//! so adding a variant forces a compile-time review of display and
//! calculation code.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a discount value cannot be constructed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DiscountError {
    /// No discount type was selected in the submission form
    #[error("no discount type selected")]
    KindNotSelected,

    /// Raw input did not parse as a number
    #[error("discount value is not a number: {0:?}")]
    NotANumber(String),

    /// Percentage outside (0, 100]
    #[error("percentage must be greater than 0 and at most 100, got {0}")]
    PercentageOutOfRange(f64),

    /// Fixed amount must be strictly positive
    #[error("fixed amount must be greater than 0, got {0}")]
    NonPositiveAmount(f64),
}

/// A validated discount, constructed only through the checked constructors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Discount {
    /// Percentage off the order total, in (0, 100]
    Percentage(f64),
    /// Fixed amount off the order total, > 0, in the catalog's currency unit
    FixedAmount(f64),
}

impl Discount {
    /// Create a percentage discount.
    ///
    /// # Errors
    ///
    /// Returns `DiscountError::PercentageOutOfRange` unless
    /// `0 < value <= 100` (non-finite values are rejected).
    pub fn percentage(value: f64) -> Result<Self, DiscountError> {
        if !value.is_finite() || value <= 0.0 || value > 100.0 {
            return Err(DiscountError::PercentageOutOfRange(value));
        }
        Ok(Self::Percentage(value))
    }

    /// Create a fixed-amount discount.
    ///
    /// # Errors
    ///
    /// Returns `DiscountError::NonPositiveAmount` unless `value > 0`
    /// (non-finite values are rejected).
    pub fn fixed_amount(value: f64) -> Result<Self, DiscountError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DiscountError::NonPositiveAmount(value));
        }
        Ok(Self::FixedAmount(value))
    }

    /// Parse raw form input as a percentage discount.
    ///
    /// # Errors
    ///
    /// Returns `DiscountError::NotANumber` when the trimmed input does not
    /// parse, otherwise the bound checks of [`Discount::percentage`].
    pub fn parse_percentage(raw: &str) -> Result<Self, DiscountError> {
        Self::percentage(parse_number(raw)?)
    }

    /// Parse raw form input as a fixed-amount discount.
    ///
    /// # Errors
    ///
    /// Returns `DiscountError::NotANumber` when the trimmed input does not
    /// parse, otherwise the bound checks of [`Discount::fixed_amount`].
    pub fn parse_fixed_amount(raw: &str) -> Result<Self, DiscountError> {
        Self::fixed_amount(parse_number(raw)?)
    }

    /// Amount saved on an order of the given total.
    ///
    /// A fixed amount never exceeds the order total.
    pub fn apply_to(&self, order_total: f64) -> f64 {
        match self {
            Self::Percentage(pct) => order_total * pct / 100.0,
            Self::FixedAmount(amount) => amount.min(order_total),
        }
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage(pct) => write!(f, "{}% off", pct),
            Self::FixedAmount(amount) => write!(f, "{} off", amount),
        }
    }
}

fn parse_number(raw: &str) -> Result<f64, DiscountError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| DiscountError::NotANumber(raw.to_string()))
}
