//! Brand Details UI Module
//!
//! MVVM split:
//! - model.rs: service calls (fetch, upload + save)
//! - view_model.rs: form state and commands
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::BrandDetails;
pub use view_model::BrandDetailsViewModel;
