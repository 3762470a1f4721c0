//! Navigation menu: groups of list pages, each item opens (or focuses) a tab.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::SYS_GENERAL_SETTINGS;
use crate::layout::tabs::{list_key, tab_label_for_key};
use crate::shared::icons::icon;
use contracts::shared::entity_registry::EntityKind;
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct MenuItem {
    tab_key: &'static str,
    icon: &'static str,
}

impl MenuItem {
    fn page(tab_key: &'static str, icon: &'static str) -> Self {
        Self { tab_key, icon }
    }

    fn list(kind: EntityKind, icon: &'static str) -> Self {
        Self::page(list_key(kind), icon)
    }

    fn label(self) -> &'static str {
        tab_label_for_key(self.tab_key)
    }
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
}

fn menu() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "products",
            items: vec![
                MenuItem::list(EntityKind::Brand, "brands"),
                MenuItem::list(EntityKind::Category, "categories"),
                MenuItem::list(EntityKind::Product, "products"),
            ],
        },
        MenuGroup {
            id: "offers",
            label: "Offers",
            icon: "percent",
            items: vec![
                MenuItem::list(EntityKind::ComboOffer, "combo"),
                MenuItem::list(EntityKind::DiscountOffer, "percent"),
                MenuItem::list(EntityKind::FreeGiftOffer, "gift"),
            ],
        },
        MenuGroup {
            id: "site",
            label: "Site",
            icon: "banners",
            items: vec![
                MenuItem::list(EntityKind::Banner, "banners"),
                MenuItem::list(EntityKind::Review, "reviews"),
            ],
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "orders",
            items: vec![MenuItem::list(EntityKind::Order, "orders")],
        },
        MenuGroup {
            id: "settings",
            label: "Settings",
            icon: "settings",
            items: vec![MenuItem::page(SYS_GENERAL_SETTINGS, "settings")],
        },
    ]
}

/// Every group starts expanded; `collapsed` holds the ids folded by the operator.
#[component]
pub fn Sidebar() -> impl IntoView {
    let collapsed = RwSignal::new(HashSet::<&'static str>::new());

    view! {
        <nav class="app-sidebar__content">
            {menu()
                .into_iter()
                .map(|group| view! { <SidebarGroup group=group collapsed=collapsed /> })
                .collect_view()}
        </nav>
    }
}

#[component]
fn SidebarGroup(group: MenuGroup, collapsed: RwSignal<HashSet<&'static str>>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let id = group.id;
    let is_open = move || collapsed.with(|set| !set.contains(id));
    let toggle = move |_| {
        collapsed.update(|set| {
            if !set.remove(id) {
                set.insert(id);
            }
        })
    };

    let items = group
        .items
        .into_iter()
        .map(|item| {
            let is_active = move || ctx.active.get().as_deref() == Some(item.tab_key);
            view! {
                <div
                    class="app-sidebar__item app-sidebar__item--child"
                    class:app-sidebar__item--active=is_active
                    on:click=move |_| ctx.open_tab(item.tab_key, item.label())
                >
                    <div class="app-sidebar__item-content">
                        {icon(item.icon)}
                        <span>{item.label()}</span>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="app-sidebar__group" data-group=id>
            <div class="app-sidebar__item" on:click=toggle>
                <div class="app-sidebar__item-content">
                    {icon(group.icon)}
                    <span>{group.label}</span>
                </div>
                <div class="app-sidebar__chevron" class:app-sidebar__chevron--expanded=is_open>
                    {icon("chevron-right")}
                </div>
            </div>
            <div class="app-sidebar__children" class:hidden=move || !is_open()>
                {items}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entity_list_is_reachable_from_the_menu() {
        let keys: Vec<&str> = menu()
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|item| item.tab_key))
            .collect();
        for kind in EntityKind::ALL {
            assert!(keys.contains(&list_key(kind)), "{:?} missing", kind);
        }
        assert!(keys.contains(&SYS_GENERAL_SETTINGS));
    }

    #[test]
    fn test_menu_labels_are_not_empty() {
        for group in menu() {
            for item in group.items {
                assert!(!item.label().is_empty(), "{} has no label", item.tab_key);
            }
        }
    }
}
