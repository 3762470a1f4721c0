//! Working area: tab bar plus the pages of opened tabs.
pub mod tabs;

pub use tabs::Tabs;
