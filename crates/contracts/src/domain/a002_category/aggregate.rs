use crate::domain::common::AggregateRoot;
use crate::shared::entity_registry::EntityKind;
use crate::shared::slug::slugify;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl AggregateRoot for Category {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn kind() -> EntityKind {
        EntityKind::Category
    }

    fn list_name() -> &'static str {
        "Categories"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub is_featured: bool,
    pub image_url: String,
}

impl CategoryDto {
    /// Sets the name and keeps the slug in step with it.
    pub fn set_name(&mut self, name: String) {
        self.slug = slugify(&name);
        self.name = name;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Category name is required".into());
        }
        if self.slug.is_empty() {
            return Err("Category name must contain letters or digits".into());
        }
        Ok(())
    }
}

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        Self {
            id: Some(category.id.clone()).filter(|id| !id.is_empty()),
            name: category.name.clone(),
            slug: category.slug.clone(),
            description: category.description.clone(),
            is_featured: category.is_featured,
            image_url: category.image_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_follows_name() {
        let mut dto = CategoryDto::default();
        dto.set_name("Men's Shoes".into());
        assert_eq!(dto.slug, "mens-shoes");
        assert!(dto.validate().is_ok());

        dto.set_name("!!!".into());
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_payload_field_names() {
        let dto = CategoryDto {
            id: Some("c1".into()),
            name: "Shoes".into(),
            slug: "shoes".into(),
            image_url: "i.png".into(),
            ..Default::default()
        };
        let payload = serde_json::to_value(&dto).unwrap();
        assert_eq!(payload["imageUrl"], "i.png");
        assert_eq!(payload["isFeatured"], false);
        assert!(payload.get("id").is_none());
    }
}
