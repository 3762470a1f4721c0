//! Navigation zone.
pub mod sidebar;

pub use sidebar::Sidebar;
