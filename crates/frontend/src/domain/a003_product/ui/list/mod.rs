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
pub fn ProductList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let config = TableConfig::new("product", "Manage Products", new_key(EntityKind::Product))
        .selector("Image", "imagesArr")
        .selector("Name", "name")
        .selector("Short Description", "shortDescription")
        .selector("Price (Tk)", "price")
        .selector("Discount Price (Tk)", "discountPrice")
        .selector("Ratings (0-5)", "rating")
        .selector("Edit", "edit");

    let on_edit = Callback::new(move |id: String| {
        tabs_store.open_tab(
            &details_key(EntityKind::Product, &id),
            &detail_tab_label(&entity_label(EntityKind::Product), &id),
        );
    });

    view! {
        <PageFrame page_id="a003_product--list" category=PAGE_CAT_LIST>
            <EntityTable config=config on_edit=on_edit />
        </PageFrame>
    }
}
