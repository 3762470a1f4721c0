//! Root element of every page rendered inside a tab.

use super::page_standard::{is_valid_page_id, PageCategory};
use leptos::prelude::*;

/// Sets `id`, `data-page-category` and the category class on the page root.
#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a001_brand--list"`.
    page_id: &'static str,
    category: PageCategory,
    /// Extra classes appended to the category class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(
        is_valid_page_id(page_id, category),
        "page id {page_id} does not match category {}",
        category.as_str()
    );
    let root_class = match class {
        "" => category.root_class().to_string(),
        extra => format!("{} {extra}", category.root_class()),
    };

    view! {
        <div id=page_id class=root_class data-page-category=category.as_str()>
            {children()}
        </div>
    }
}
