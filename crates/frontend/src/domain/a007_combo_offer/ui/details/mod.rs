//! Combo builder
//!
//! - model.rs: submission (parallel image upload, then create)
//! - view_model.rs: draft state; derivation runs inside the selection handler
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::ComboBuilder;
pub use view_model::ComboBuilderViewModel;
