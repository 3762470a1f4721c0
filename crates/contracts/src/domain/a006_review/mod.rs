pub mod aggregate;

pub use aggregate::{Review, ReviewDto};
