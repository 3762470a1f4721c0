use crate::domain::common::AggregateRoot;
use crate::shared::entity_registry::EntityKind;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Customer order. Orders are placed by the storefront; the admin only
/// confirms, ships or deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub customer_address: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub delivery_charge: f64,
    #[serde(default)]
    pub is_confirmed: bool,
    #[serde(default)]
    pub is_shipped: bool,
    #[serde(default)]
    pub products: Vec<OrderLine>,
    #[serde(default)]
    pub free_gift_eligible: bool,
    #[serde(default)]
    pub gift_product: Option<GiftProduct>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GiftProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
}

impl Order {
    /// Gift to show on the detail page, only when the order earned one.
    pub fn earned_gift(&self) -> Option<&GiftProduct> {
        self.gift_product
            .as_ref()
            .filter(|gift| self.free_gift_eligible && !gift.name.is_empty())
    }

    pub fn toggle_confirmed(&self) -> OrderStatusPatch {
        OrderStatusPatch {
            is_confirmed: Some(!self.is_confirmed),
            is_shipped: None,
        }
    }

    pub fn toggle_shipped(&self) -> OrderStatusPatch {
        OrderStatusPatch {
            is_confirmed: None,
            is_shipped: Some(!self.is_shipped),
        }
    }

    /// Applies a patch the server has confirmed.
    pub fn apply(&mut self, patch: &OrderStatusPatch) {
        if let Some(confirmed) = patch.is_confirmed {
            self.is_confirmed = confirmed;
        }
        if let Some(shipped) = patch.is_shipped {
            self.is_shipped = shipped;
        }
    }
}

impl AggregateRoot for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.customer_name
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn kind() -> EntityKind {
        EntityKind::Order
    }

    fn list_name() -> &'static str {
        "Orders"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Partial update of the two status flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_confirmed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_shipped: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Order {
        serde_json::from_str(
            r#"{
                "_id": "o1",
                "customerName": "Rahim",
                "customerPhone": "0170000000",
                "totalAmount": 1200,
                "deliveryCharge": 60,
                "isConfirmed": false,
                "isShipped": false,
                "products": [{"productId": "p1", "name": "Shoe", "quantity": 2, "price": 500}],
                "freeGiftEligible": true,
                "giftProduct": {"name": "Sock", "imageUrl": "s.png"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_toggle_patch_touches_one_flag() {
        let order = order();
        let patch = order.toggle_confirmed();
        assert_eq!(
            serde_json::to_value(patch).unwrap(),
            serde_json::json!({"isConfirmed": true})
        );

        let mut confirmed = order.clone();
        confirmed.apply(&patch);
        assert!(confirmed.is_confirmed);
        assert!(!confirmed.is_shipped);
    }

    #[test]
    fn test_earned_gift() {
        let mut order = order();
        assert_eq!(order.earned_gift().map(|g| g.name.as_str()), Some("Sock"));
        order.free_gift_eligible = false;
        assert!(order.earned_gift().is_none());
        assert_eq!(order.products[0].quantity, 2);
    }
}
