//! Tab management module
//!
//! - `page`: TabPage wrapper around the content of one tab
//! - `registry`: tab.key → View mapping
//! - `tab_labels`: tab keys and titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{
    detail_tab_label, details_key, entity_label, list_key, new_key, tab_label_for_key,
};
