//! Tab keys and labels, the single source of truth for both.
//!
//! Key scheme: `{aggregate}` for lists, `{aggregate}_new` for create forms
//! and `{aggregate}_details_{id}` for edit/detail views.

use contracts::domain::a001_brand::Brand;
use contracts::domain::a002_category::Category;
use contracts::domain::a003_product::Product;
use contracts::domain::a004_banner::Banner;
use contracts::domain::a005_order::Order;
use contracts::domain::a006_review::Review;
use contracts::domain::a007_combo_offer::ComboOffer;
use contracts::domain::a008_discount_offer::DiscountedProduct;
use contracts::domain::common::AggregateRoot;
use contracts::shared::entity_registry::EntityKind;

pub const SYS_GENERAL_SETTINGS: &str = "sys_general_settings";

/// Tab key of the entity list.
pub fn list_key(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Brand => "a001_brand",
        EntityKind::Category => "a002_category",
        EntityKind::Product => "a003_product",
        EntityKind::Banner => "a004_banner",
        EntityKind::Order => "a005_order",
        EntityKind::Review => "a006_review",
        EntityKind::ComboOffer => "a007_combo_offer",
        EntityKind::DiscountOffer => "a008_discount_offer",
        EntityKind::FreeGiftOffer => "a009_free_gift_offer",
    }
}

/// Tab key of the create form.
pub fn new_key(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Brand => "a001_brand_new",
        EntityKind::Category => "a002_category_new",
        EntityKind::Product => "a003_product_new",
        EntityKind::Banner => "a004_banner_new",
        EntityKind::Order => "a005_order_new",
        EntityKind::Review => "a006_review_new",
        EntityKind::ComboOffer => "a007_combo_offer_new",
        EntityKind::DiscountOffer => "a008_discount_offer_new",
        EntityKind::FreeGiftOffer => "a009_free_gift_offer_new",
    }
}

pub fn details_key(kind: EntityKind, id: &str) -> String {
    format!("{}_details_{}", list_key(kind), id)
}

/// Splits a details key into its entity and record id.
pub fn parse_details_key(key: &str) -> Option<(EntityKind, &str)> {
    EntityKind::ALL.into_iter().find_map(|kind| {
        key.strip_prefix(list_key(kind))
            .and_then(|rest| rest.strip_prefix("_details_"))
            .filter(|id| !id.is_empty())
            .map(|id| (kind, id))
    })
}

/// Readable tab title for the given key. Fallback: empty string.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Lists ─────────────────────────────────────────────────────────
        "a001_brand" => Brand::list_name(),
        "a002_category" => Category::list_name(),
        "a003_product" => Product::list_name(),
        "a004_banner" => Banner::list_name(),
        "a005_order" => Order::list_name(),
        "a006_review" => Review::list_name(),
        "a007_combo_offer" => ComboOffer::list_name(),
        "a008_discount_offer" => DiscountedProduct::list_name(),
        "a009_free_gift_offer" => "Free gift",

        // ── Create forms ──────────────────────────────────────────────────
        "a001_brand_new" => "New brand",
        "a002_category_new" => "New category",
        "a003_product_new" => "New product",
        "a004_banner_new" => "New banner",
        "a006_review_new" => "New review",
        "a007_combo_offer_new" => "New combo offer",
        "a008_discount_offer_new" => "New percentage offer",
        "a009_free_gift_offer_new" => "New free gift",

        // ── System ────────────────────────────────────────────────────────
        SYS_GENERAL_SETTINGS => "General settings",

        _ => "",
    }
}

/// Title of a detail tab: «<entity> · <identifier>».
///
/// Example: `detail_tab_label("Brand", "Acme")` → `"Brand · Acme"`
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

/// Capitalized singular entity name for detail tab titles.
pub fn entity_label(kind: EntityKind) -> String {
    let name = kind.element_name();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_key_round_trip() {
        let key = details_key(EntityKind::Order, "64f1c0");
        assert_eq!(key, "a005_order_details_64f1c0");
        assert_eq!(parse_details_key(&key), Some((EntityKind::Order, "64f1c0")));
        assert_eq!(parse_details_key("a005_order"), None);
        assert_eq!(parse_details_key("a005_order_details_"), None);
        assert_eq!(parse_details_key("a005_order_new"), None);
    }

    #[test]
    fn test_every_list_has_a_label() {
        for kind in EntityKind::ALL {
            assert!(!tab_label_for_key(list_key(kind)).is_empty(), "{:?}", kind);
        }
        assert_eq!(tab_label_for_key("unknown"), "");
    }

    #[test]
    fn test_entity_label() {
        assert_eq!(entity_label(EntityKind::ComboOffer), "Combo offer");
        assert_eq!(
            detail_tab_label(&entity_label(EntityKind::Brand), "Acme"),
            "Brand · Acme"
        );
    }
}
