//! Tab content registry: the mapping tab.key → View.
//!
//! Every tab key the app can open is handled here.

use super::tab_labels::{list_key, parse_details_key, SYS_GENERAL_SETTINGS};
use crate::domain::a001_brand::ui::details::BrandDetails;
use crate::domain::a001_brand::ui::list::BrandList;
use crate::domain::a002_category::ui::details::CategoryDetails;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_product::ui::details::ProductDetails;
use crate::domain::a003_product::ui::list::ProductList;
use crate::domain::a004_banner::ui::details::BannerDetails;
use crate::domain::a004_banner::ui::list::BannerList;
use crate::domain::a005_order::ui::details::OrderDetails;
use crate::domain::a005_order::ui::list::OrderList;
use crate::domain::a006_review::ui::details::ReviewDetails;
use crate::domain::a006_review::ui::list::ReviewList;
use crate::domain::a007_combo_offer::ui::details::ComboBuilder;
use crate::domain::a007_combo_offer::ui::list::ComboOfferList;
use crate::domain::a008_discount_offer::ui::details::DiscountOfferDetails;
use crate::domain::a008_discount_offer::ui::list::DiscountOfferList;
use crate::domain::a009_free_gift_offer::ui::details::FreeGiftDetails;
use crate::domain::a009_free_gift_offer::ui::list::FreeGiftView;
use crate::layout::global_context::AppGlobalContext;
use crate::system::settings::ui::GeneralSettingsPage;
use contracts::shared::entity_registry::EntityKind;
use leptos::logging::log;
use leptos::prelude::*;

/// Callback closing the tab `key` and returning to `list`.
fn back_to_list(tabs_store: AppGlobalContext, key: &str, list: &'static str) -> Callback<()> {
    let key = key.to_string();
    Callback::new(move |_| tabs_store.close_and_open(&key, list))
}

/// Callback closing the form tab `key` after a save and showing `list`.
fn saved(tabs_store: AppGlobalContext, key: &str, list: &'static str) -> Callback<()> {
    let key = key.to_string();
    Callback::new(move |_| tabs_store.finish_form(&key, list))
}

/// Renders the content of a tab by its key.
///
/// # Arguments
/// * `key` - unique tab key (e.g. "a001_brand", "a005_order_details_42")
/// * `tabs_store` - context used by forms to close themselves
///
/// # Returns
/// AnyView with the tab content, or a placeholder for unknown keys
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    if let Some((kind, id)) = parse_details_key(key) {
        return render_details(kind, id.to_string(), key, tabs_store);
    }

    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Catalog
        // ═══════════════════════════════════════════════════════════════════
        "a001_brand" => view! { <BrandList /> }.into_any(),
        "a001_brand_new" => {
            let list = list_key(EntityKind::Brand);
            view! {
                <BrandDetails
                    id=None
                    on_saved=saved(tabs_store, key, list)
                    on_cancel=back_to_list(tabs_store, key, list)
                />
            }
            .into_any()
        }
        "a002_category" => view! { <CategoryList /> }.into_any(),
        "a002_category_new" => {
            let list = list_key(EntityKind::Category);
            view! {
                <CategoryDetails
                    id=None
                    on_saved=saved(tabs_store, key, list)
                    on_cancel=back_to_list(tabs_store, key, list)
                />
            }
            .into_any()
        }
        "a003_product" => view! { <ProductList /> }.into_any(),
        "a003_product_new" => {
            let list = list_key(EntityKind::Product);
            view! {
                <ProductDetails
                    id=None
                    on_saved=saved(tabs_store, key, list)
                    on_cancel=back_to_list(tabs_store, key, list)
                />
            }
            .into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // Offers
        // ═══════════════════════════════════════════════════════════════════
        "a007_combo_offer" => view! { <ComboOfferList /> }.into_any(),
        "a007_combo_offer_new" => {
            let list = list_key(EntityKind::ComboOffer);
            view! {
                <ComboBuilder
                    on_saved=saved(tabs_store, key, list)
                    on_cancel=back_to_list(tabs_store, key, list)
                />
            }
            .into_any()
        }
        "a008_discount_offer" => view! { <DiscountOfferList /> }.into_any(),
        "a008_discount_offer_new" => {
            let list = list_key(EntityKind::DiscountOffer);
            view! {
                <DiscountOfferDetails
                    on_saved=saved(tabs_store, key, list)
                    on_cancel=back_to_list(tabs_store, key, list)
                />
            }
            .into_any()
        }
        "a009_free_gift_offer" => view! { <FreeGiftView /> }.into_any(),
        "a009_free_gift_offer_new" => {
            let list = list_key(EntityKind::FreeGiftOffer);
            view! {
                <FreeGiftDetails
                    on_saved=saved(tabs_store, key, list)
                    on_cancel=back_to_list(tabs_store, key, list)
                />
            }
            .into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // Site
        // ═══════════════════════════════════════════════════════════════════
        "a004_banner" => view! { <BannerList /> }.into_any(),
        "a004_banner_new" => {
            let list = list_key(EntityKind::Banner);
            view! {
                <BannerDetails
                    on_saved=saved(tabs_store, key, list)
                    on_cancel=back_to_list(tabs_store, key, list)
                />
            }
            .into_any()
        }
        "a006_review" => view! { <ReviewList /> }.into_any(),
        "a006_review_new" => {
            let list = list_key(EntityKind::Review);
            view! {
                <ReviewDetails
                    on_saved=saved(tabs_store, key, list)
                    on_cancel=back_to_list(tabs_store, key, list)
                />
            }
            .into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // Sales
        // ═══════════════════════════════════════════════════════════════════
        "a005_order" => view! { <OrderList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // System
        // ═══════════════════════════════════════════════════════════════════
        SYS_GENERAL_SETTINGS => view! { <GeneralSettingsPage /> }.into_any(),

        _ => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}

fn render_details(kind: EntityKind, id: String, key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let list = list_key(kind);
    let on_saved = saved(tabs_store, key, list);
    let on_close = back_to_list(tabs_store, key, list);
    log!("✅ Creating {} details for id: {}", kind.name(), id);
    match kind {
        EntityKind::Brand => {
            view! { <BrandDetails id=Some(id) on_saved=on_saved on_cancel=on_close /> }.into_any()
        }
        EntityKind::Category => {
            view! { <CategoryDetails id=Some(id) on_saved=on_saved on_cancel=on_close /> }.into_any()
        }
        EntityKind::Product => {
            view! { <ProductDetails id=Some(id) on_saved=on_saved on_cancel=on_close /> }.into_any()
        }
        EntityKind::Order => {
            view! { <OrderDetails id=id on_deleted=on_saved on_close=on_close /> }.into_any()
        }
        other => {
            log!("⚠️ {} has no detail view", other.name());
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
