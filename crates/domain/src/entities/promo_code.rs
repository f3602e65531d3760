//! PromoCode entity - the validated result of a completed submission
//!
//! Constructed only through [`PromoCode::create`], which enforces every
//! invariant up front. Once built, the entity is never mutated by this
//! subsystem; vote counters and the verification flag are owned by the
//! interaction subsystem downstream.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::{PromoCodeId, UserId};
use crate::value_objects::{CodeValue, Description, Discount, DiscountError, ServiceName};

/// Enumerated reasons a promo code cannot be constructed from submission
/// input. Checked in order; the first failure wins.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CreationFailure {
    /// Promo code blank after trimming
    #[error("promo code cannot be empty")]
    EmptyCode,

    /// Service name blank after trimming
    #[error("service name cannot be empty")]
    EmptyServiceName,

    /// Promo code over the `CodeValue` length limit
    #[error("promo code is too long")]
    CodeTooLong,

    /// Service name over the `ServiceName` length limit
    #[error("service name is too long")]
    ServiceNameTooLong,

    /// Minimum order amount missing, unparsable, or not positive
    #[error("minimum order amount must be greater than zero")]
    InvalidMinimumAmount,

    /// End date missing or not strictly after the start date
    #[error("end date must be after start date")]
    InvalidDateRange,

    /// Free-text description over the length limit
    #[error("description is too long")]
    DescriptionTooLong,

    /// Bound violation inside the discount value itself
    #[error(transparent)]
    Discount(#[from] DiscountError),
}

/// Raw input for [`PromoCode::create`].
///
/// Field values arrive as the wizard collected them; normalization and
/// validation happen in the constructor. The discount is already a validated
/// [`Discount`] because its bounds are enforced by that type before this
/// constructor is reached.
#[derive(Debug, Clone)]
pub struct NewPromoCode {
    pub code: String,
    pub service_name: String,
    pub discount: Discount,
    pub minimum_order_amount: f64,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    pub author_id: UserId,
    pub first_use_only: bool,
    pub one_time_use: bool,
    pub description: Option<String>,
}

/// A declared promo code for a service, validated at construction.
///
/// Identity is deterministic: the same (service, code) pair always derives
/// the same [`PromoCodeId`], which the backend uses for deduplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoCode {
    pub id: PromoCodeId,
    pub code: CodeValue,
    pub service_name: ServiceName,
    pub discount: Discount,
    pub minimum_order_amount: f64,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    pub author_id: UserId,
    pub description: Option<Description>,
    /// Code only works on a customer's first order with the service
    pub first_use_only: bool,
    /// Code can be redeemed once per account
    pub one_time_use: bool,
    pub upvotes: u32,
    pub downvotes: u32,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl PromoCode {
    /// Build a validated promo code from raw submission input.
    ///
    /// Pure apart from the creation timestamp: no I/O, no persistence.
    ///
    /// # Errors
    ///
    /// Returns the first applicable [`CreationFailure`], checked in order:
    /// blank code, blank service name, non-positive minimum order amount,
    /// end date not after start date, overlong code, overlong service
    /// name, overlong description.
    pub fn create(input: NewPromoCode) -> Result<Self, CreationFailure> {
        if input.code.trim().is_empty() {
            return Err(CreationFailure::EmptyCode);
        }
        if input.service_name.trim().is_empty() {
            return Err(CreationFailure::EmptyServiceName);
        }
        if input.minimum_order_amount.is_nan() || input.minimum_order_amount <= 0.0 {
            return Err(CreationFailure::InvalidMinimumAmount);
        }
        if input.valid_until <= input.valid_from {
            return Err(CreationFailure::InvalidDateRange);
        }

        // Blankness was checked above, so the only remaining newtype
        // failure is the length cap.
        let code = CodeValue::new(input.code).map_err(|_| CreationFailure::CodeTooLong)?;
        let service_name = ServiceName::new(input.service_name)
            .map_err(|_| CreationFailure::ServiceNameTooLong)?;
        let description = match input.description {
            Some(text) if !text.trim().is_empty() => Some(
                Description::new(text).map_err(|_| CreationFailure::DescriptionTooLong)?,
            ),
            _ => None,
        };

        let id = PromoCodeId::derive(service_name.as_str(), code.as_str());

        Ok(Self {
            id,
            code,
            service_name,
            discount: input.discount,
            minimum_order_amount: input.minimum_order_amount,
            valid_from: input.valid_from,
            valid_until: input.valid_until,
            author_id: input.author_id,
            description,
            first_use_only: input.first_use_only,
            one_time_use: input.one_time_use,
            upvotes: 0,
            downvotes: 0,
            is_verified: false,
            created_at: Utc::now(),
        })
    }

    /// Net community score: upvotes minus downvotes.
    pub fn vote_score(&self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }

    /// True when `date` falls inside the validity window (inclusive).
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.valid_from <= date && date <= self.valid_until
    }
}
