pub mod aggregate;

pub use aggregate::{Gender, Product, ProductDto, ProductPayload};
