use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, details_key, entity_label, new_key};
use crate::shared::components::entity_table::EntityTable;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::shared::entity_registry::EntityKind;
use contracts::shared::table::TableConfig;
use leptos::prelude::*;

fn brand_table() -> TableConfig {
    TableConfig::new("brand", "Manage Brands", new_key(EntityKind::Brand))
        .selector("Logo", "logoUrl")
        .selector("Name", "name")
        .selector("Description", "description")
        .selector("Edit", "edit")
}

#[component]
#[allow(non_snake_case)]
pub fn BrandList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let on_edit = Callback::new(move |id: String| {
        tabs_store.open_tab(
            &details_key(EntityKind::Brand, &id),
            &detail_tab_label(&entity_label(EntityKind::Brand), &id),
        );
    });

    view! {
        <PageFrame page_id="a001_brand--list" category=PAGE_CAT_LIST>
            <EntityTable config=brand_table() on_edit=on_edit />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table::ColumnKind;

    #[test]
    fn test_brand_table_columns() {
        let config = brand_table();
        assert!(config.validate().is_ok());
        let kinds: Vec<_> = config.columns.iter().map(|c| c.kind.clone()).collect();
        assert_eq!(kinds[0], ColumnKind::Image { field: "logoUrl" });
        assert_eq!(kinds[3], ColumnKind::Action);
    }
}
