use crate::domain::common::AggregateRoot;
use crate::shared::entity_registry::EntityKind;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Combo offer: several products sold together under one price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComboOffer {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount_price: f64,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub images: Vec<String>,
}

impl AggregateRoot for ComboOffer {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn kind() -> EntityKind {
        EntityKind::ComboOffer
    }

    fn list_name() -> &'static str {
        "Combo offers"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create request of a combo offer. Built by [`super::ComboDraft::to_payload`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboPayload {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub short_description: String,
    /// One brand per member, in selection order.
    #[serde(rename = "brandsId")]
    pub brand_ids: Vec<String>,
    pub category_ids: Vec<String>,
    pub price: f64,
    pub discount_price: f64,
    pub in_stock: bool,
    pub images: Vec<String>,
}
