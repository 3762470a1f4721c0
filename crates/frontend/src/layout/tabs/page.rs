//! Body of one opened tab.
//!
//! Inactive panels are hidden, not unmounted: list scroll positions and
//! half-filled forms survive switching between tabs.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key.clone());
    let is_active =
        Memo::new(move |_| key.with_value(|k| tabs_store.active.get().as_deref() == Some(k.as_str())));

    log::debug!("tab panel mounted: {}", tab.key);
    let dropped = tab.key.clone();
    on_cleanup(move || log::debug!("tab panel dropped: {}", dropped));

    let content = render_tab_content(&tab.key, tabs_store);

    view! {
        <section
            role="tabpanel"
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active.get()
            aria-hidden=move || (!is_active.get()).to_string()
            data-tab-key=tab.key
        >
            {content}
        </section>
    }
}
