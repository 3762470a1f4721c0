use super::entity_table::state::FooterInfo;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Table footer: "x of total row(s)", "Page n of m" and prev/next buttons.
///
/// Figures are only shown once the first page has arrived, so the footer
/// never renders a made-up page count.
#[component]
pub fn PaginationControls(
    /// Loaded page figures, `None` while loading or after a failure
    #[prop(into)]
    info: Signal<Option<FooterInfo>>,

    #[prop(into)] can_go_previous: Signal<bool>,

    #[prop(into)] can_go_next: Signal<bool>,

    on_previous: Callback<()>,

    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || match info.get() {
                    Some(f) => format!("{} of {} row(s)", f.shown, f.total),
                    None => String::new(),
                }}
            </span>
            <span class="pagination-info">
                {move || match info.get() {
                    Some(f) => format!("Page {} of {}", f.page_index, f.total_pages),
                    None => String::new(),
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_previous.run(())
                disabled=move || !can_go_previous.get()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || !can_go_next.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
