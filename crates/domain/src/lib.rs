extern crate self as promovote_domain;

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{CreationFailure, NewPromoCode, PromoCode};
pub use error::DomainError;
pub use ids::{PromoCodeId, UserId};
pub use value_objects::{
    CodeValue, Description, Discount, DiscountError, ServiceName, MAX_CODE_LENGTH,
    MAX_DESCRIPTION_LENGTH, MAX_SERVICE_NAME_LENGTH,
};
