use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, details_key, entity_label, list_key};
use crate::shared::components::entity_table::EntityTable;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::shared::entity_registry::EntityKind;
use contracts::shared::table::{ColumnKind, TableConfig};
use leptos::prelude::*;

fn order_table() -> TableConfig {
    TableConfig::new("order", "Manage order", list_key(EntityKind::Order))
        .admin()
        .selector("Date", "created")
        .selector("Amount (Tk)", "totalAmount")
        .selector("Customer", "customerName")
        .selector("Phone", "customerPhone")
        .column(
            "Confirmation",
            ColumnKind::Badge {
                field: "isConfirmed",
                on: "Confirmed",
                off: "Pending",
            },
        )
        .column(
            "Delivery",
            ColumnKind::Badge {
                field: "isShipped",
                on: "Shipped",
                off: "Not shipped",
            },
        )
        .selector("Action", "edit")
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let on_edit = Callback::new(move |id: String| {
        tabs_store.open_tab(
            &details_key(EntityKind::Order, &id),
            &detail_tab_label(&entity_label(EntityKind::Order), &id),
        );
    });

    view! {
        <PageFrame page_id="a005_order--list" category=PAGE_CAT_LIST>
            <EntityTable config=order_table() on_edit=on_edit />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table::{resolve_cell, CellContent};
    use serde_json::json;

    #[test]
    fn test_order_table_is_read_mostly() {
        let config = order_table();
        assert!(config.validate().is_ok());
        assert!(!config.shows_create());
    }

    #[test]
    fn test_status_badges() {
        let config = order_table();
        let order = json!({"_id": "o1", "isConfirmed": true, "isShipped": false});
        let badges: Vec<_> = config
            .columns
            .iter()
            .map(|c| resolve_cell(&c.kind, &order))
            .filter(|cell| matches!(cell, CellContent::Badge { .. }))
            .collect();
        assert_eq!(
            badges,
            vec![
                CellContent::Badge { label: "Confirmed", on: true },
                CellContent::Badge { label: "Not shipped", on: false },
            ]
        );
    }
}
