use crate::domain::common::AggregateRoot;
use crate::shared::entity_registry::EntityKind;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Brand as returned by `/brand/get/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl AggregateRoot for Brand {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn kind() -> EntityKind {
        EntityKind::Brand
    }

    fn list_name() -> &'static str {
        "Brands"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update payload of a brand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BrandDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub website_url: String,
    pub is_featured: bool,
    pub logo_url: String,
}

impl BrandDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Brand name is required".into());
        }
        Ok(())
    }
}

impl From<&Brand> for BrandDto {
    fn from(brand: &Brand) -> Self {
        Self {
            id: Some(brand.id.clone()).filter(|id| !id.is_empty()),
            name: brand.name.clone(),
            description: brand.description.clone(),
            website_url: brand.website_url.clone(),
            is_featured: brand.is_featured,
            logo_url: brand.logo_url.clone(),
        }
    }
}
