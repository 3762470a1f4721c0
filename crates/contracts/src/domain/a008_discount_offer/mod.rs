pub mod aggregate;

pub use aggregate::{discount_percentage, DiscountOfferDto, DiscountOfferPayload, DiscountedProduct};
