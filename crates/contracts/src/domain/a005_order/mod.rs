pub mod aggregate;

pub use aggregate::{GiftProduct, Order, OrderLine, OrderStatusPatch};
