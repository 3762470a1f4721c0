use crate::domain::common::AggregateRoot;
use crate::shared::entity_registry::EntityKind;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, rename = "type")]
    pub banner_type: String,
    #[serde(default)]
    pub asset: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl AggregateRoot for Banner {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.title
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn kind() -> EntityKind {
        EntityKind::Banner
    }

    fn list_name() -> &'static str {
        "Banners"
    }
}

/// Where a banner click leads: an offer listing or a site page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BannerType {
    #[default]
    Page,
    Offer,
}

impl BannerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerType::Page => "page",
            BannerType::Offer => "offer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "page" => Some(BannerType::Page),
            "offer" => Some(BannerType::Offer),
            _ => None,
        }
    }
}

/// Offer kinds a banner of type `offer` can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerAsset {
    Combo,
    Discount,
}

impl BannerAsset {
    pub const ALL: [BannerAsset; 2] = [BannerAsset::Combo, BannerAsset::Discount];

    pub fn as_str(&self) -> &'static str {
        match self {
            BannerAsset::Combo => "combo",
            BannerAsset::Discount => "discount",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BannerAsset::Combo => "Combo",
            BannerAsset::Discount => "Discount",
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerDto {
    pub title: String,
    pub image_url: String,
    pub is_active: bool,
    #[serde(rename = "type")]
    pub banner_type: BannerType,
    /// Offer kind (`combo`/`discount`) or a page path, depending on the type.
    pub asset: String,
}

impl Default for BannerDto {
    fn default() -> Self {
        Self {
            title: String::new(),
            image_url: String::new(),
            is_active: true,
            banner_type: BannerType::Page,
            asset: String::new(),
        }
    }
}

impl BannerDto {
    /// Switching the type invalidates the previous asset.
    pub fn set_type(&mut self, banner_type: BannerType) {
        if self.banner_type != banner_type {
            self.asset.clear();
        }
        self.banner_type = banner_type;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Banner title is required".into());
        }
        match self.banner_type {
            BannerType::Offer => {
                if !BannerAsset::ALL.iter().any(|a| a.as_str() == self.asset) {
                    return Err("Please select an offer".into());
                }
            }
            BannerType::Page => {
                if self.asset.trim().is_empty() {
                    return Err("Please enter a page path".into());
                }
            }
        }
        Ok(())
    }
}

/// Body of the active/inactive toggle.
pub fn toggle_patch(banner: &Banner) -> serde_json::Value {
    serde_json::json!({ "isActive": !banner.is_active })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_banner_requires_known_asset() {
        let mut dto = BannerDto {
            title: "Summer".into(),
            ..Default::default()
        };
        dto.set_type(BannerType::Offer);
        assert!(dto.validate().is_err());
        dto.asset = "combo".into();
        assert!(dto.validate().is_ok());

        dto.set_type(BannerType::Page);
        assert!(dto.asset.is_empty());
        dto.asset = "/products".into();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_decodes_and_toggles() {
        let raw = r#"{"_id":"b1","title":"Sale","imageUrl":"s.png","isActive":true,"type":"offer","asset":"discount","createdAt":"2024-01-01T00:00:00.000Z","__v":0}"#;
        let banner: Banner = serde_json::from_str(raw).unwrap();
        assert_eq!(banner.banner_type, "offer");
        assert_eq!(toggle_patch(&banner), serde_json::json!({"isActive": false}));

        let payload = serde_json::to_value(BannerDto::default()).unwrap();
        assert_eq!(payload["type"], "page");
        assert_eq!(payload["isActive"], true);
    }
}
