//! Validated value objects for the promo-code domain.

mod discount;
mod names;

pub use discount::{Discount, DiscountError};
pub use names::{
    CodeValue, Description, ServiceName, MAX_CODE_LENGTH, MAX_DESCRIPTION_LENGTH,
    MAX_SERVICE_NAME_LENGTH,
};
