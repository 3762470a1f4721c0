use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, details_key, entity_label, new_key};
use crate::shared::components::entity_table::EntityTable;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::shared::entity_registry::EntityKind;
use contracts::shared::table::TableConfig;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let config = TableConfig::new("category", "Manage Categories", new_key(EntityKind::Category))
        .selector("Image", "imageUrl")
        .selector("Name", "name")
        .selector("Description", "description")
        .selector("Edit", "edit");

    let on_edit = Callback::new(move |id: String| {
        tabs_store.open_tab(
            &details_key(EntityKind::Category, &id),
            &detail_tab_label(&entity_label(EntityKind::Category), &id),
        );
    });

    view! {
        <PageFrame page_id="a002_category--list" category=PAGE_CAT_LIST>
            <EntityTable config=config on_edit=on_edit />
        </PageFrame>
    }
}
