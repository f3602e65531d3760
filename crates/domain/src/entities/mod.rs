//! Domain entities.

mod promo_code;

pub use promo_code::{CreationFailure, NewPromoCode, PromoCode};
