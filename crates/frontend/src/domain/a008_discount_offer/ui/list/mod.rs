use crate::layout::tabs::new_key;
use crate::shared::components::entity_table::EntityTable;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::shared::entity_registry::EntityKind;
use contracts::shared::table::TableConfig;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn DiscountOfferList() -> impl IntoView {
    let config = TableConfig::new(
        "discount-offer",
        "Manage Percentage Offer",
        new_key(EntityKind::DiscountOffer),
    )
    .selector("Name", "name")
    .selector("Price (Tk)", "price")
    .selector("Discount Price (Tk)", "discountPrice")
    .selector("Discount Amount", "discountAmount")
    .selector("Action", "edit");

    view! {
        <PageFrame page_id="a008_discount_offer--list" category=PAGE_CAT_LIST>
            <EntityTable config=config />
        </PageFrame>
    }
}
