//! Product Details UI Module
//!
//! - model.rs: service calls; images are uploaded as one batch before saving
//! - view_model.rs: form state, brand/category options, commands
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
