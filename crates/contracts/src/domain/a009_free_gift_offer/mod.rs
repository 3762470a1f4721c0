pub mod aggregate;

pub use aggregate::{FreeGiftDto, FreeGiftOffer, FreeGiftPayload};
