use crate::shared::components::ui::badge::{Badge as UiBadge, Tone};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use contracts::shared::table::CellContent;
use leptos::prelude::*;

/// Shown when an image cell has no usable URL.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

/// Renders one resolved cell.
#[component]
pub fn EntityCell(
    content: CellContent,
    /// Edit button handler; no edit button without it
    #[prop(optional_no_strip)]
    on_edit: Option<Callback<String>>,
    on_delete: Callback<String>,
    /// Id of the row whose deletion is in flight
    #[prop(into)]
    busy_id: Signal<Option<String>>,
) -> impl IntoView {
    match content {
        CellContent::Thumbnail { src } => view! {
            <img
                class="table__thumb"
                src=src.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
                alt=""
                loading="lazy"
            />
        }
        .into_any(),
        CellContent::Badge { label, on } => view! {
            <UiBadge tone=Tone::flag(on)>
                {label}
            </UiBadge>
        }
        .into_any(),
        CellContent::DateTime(raw) => view! {
            <span class="table__date">{format_datetime(&raw)}</span>
        }
        .into_any(),
        CellContent::Text(text) => view! { <span>{text}</span> }.into_any(),
        CellContent::Actions { id: None } => {
            log::warn!("row without an id, actions hidden");
            ().into_any()
        }
        CellContent::Actions { id: Some(id) } => {
            let edit_button = on_edit.map(|on_edit| {
                let id = id.clone();
                view! {
                    <button
                        class="button button--icon"
                        title="Edit"
                        on:click=move |_| on_edit.run(id.clone())
                    >
                        {icon("edit")}
                    </button>
                }
            });
            let busy_for = id.clone();
            let is_busy = move || busy_id.with(|busy| busy.as_deref() == Some(busy_for.as_str()));
            view! {
                <div class="table__actions">
                    {edit_button}
                    <button
                        class="button button--icon button--danger"
                        title="Delete"
                        disabled=is_busy
                        on:click=move |_| on_delete.run(id.clone())
                    >
                        {icon("trash")}
                    </button>
                </div>
            }
            .into_any()
        }
    }
}
