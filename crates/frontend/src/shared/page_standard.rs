//! Page categories and the id format of tab pages.
//!
//! A page root carries `id="{entity}--{category}"` (e.g. `"a001_brand--list"`)
//! so the id copied from the DOM inspector leads straight to `domain/a001_brand/`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageCategory {
    /// Paged table or card grid of records.
    List,
    /// Create or edit form of one record.
    Detail,
    /// Store-wide administration (settings).
    System,
}

impl PageCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Detail => "detail",
            PageCategory::System => "system",
        }
    }

    /// Root class with the BEM modifier of the category.
    pub fn root_class(self) -> &'static str {
        match self {
            PageCategory::List => "page",
            PageCategory::Detail => "page page--detail",
            PageCategory::System => "page page--system",
        }
    }
}

pub const PAGE_CAT_LIST: PageCategory = PageCategory::List;
pub const PAGE_CAT_DETAIL: PageCategory = PageCategory::Detail;
pub const PAGE_CAT_SYSTEM: PageCategory = PageCategory::System;

/// `true` when the id has a non-empty entity part and the suffix of `category`.
pub fn is_valid_page_id(id: &str, category: PageCategory) -> bool {
    matches!(id.split_once("--"), Some((entity, suffix)) if !entity.is_empty() && suffix == category.as_str())
}
