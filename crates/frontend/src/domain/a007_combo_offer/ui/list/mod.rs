use crate::shared::components::entity_table::EntityTable;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::layout::tabs::new_key;
use contracts::shared::entity_registry::EntityKind;
use contracts::shared::table::TableConfig;
use leptos::prelude::*;

/// Combos are immutable once created: rows only offer delete.
#[component]
#[allow(non_snake_case)]
pub fn ComboOfferList() -> impl IntoView {
    let config = TableConfig::new("combo-offer", "Manage Combo", new_key(EntityKind::ComboOffer))
        .selector("Image", "imagesArr")
        .selector("Name", "name")
        .selector("Price (Tk)", "price")
        .selector("Discount Price (Tk)", "discountPrice")
        .selector("Action", "edit");

    view! {
        <PageFrame page_id="a007_combo_offer--list" category=PAGE_CAT_LIST>
            <EntityTable config=config />
        </PageFrame>
    }
}
