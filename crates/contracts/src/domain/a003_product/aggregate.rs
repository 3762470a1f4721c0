use crate::domain::common::{one_or_many, AggregateRoot, Reference};
use crate::shared::entity_registry::EntityKind;
use crate::shared::slug::slugify;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Product with its brand and categories populated by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub brand_id: Option<Reference>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub category_ids: Vec<Reference>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl Product {
    pub fn brand_ref_id(&self) -> Option<&str> {
        self.brand_id.as_ref().map(Reference::id)
    }

    /// First category; products are created with exactly one.
    pub fn category_ref_id(&self) -> Option<&str> {
        self.category_ids.first().map(Reference::id)
    }
}

impl AggregateRoot for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn kind() -> EntityKind {
        EntityKind::Product
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Product form. `tags` is edited as comma separated text and `category_id`
/// as a single select; both are expanded in [`ProductDto::to_payload`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDto {
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub short_description: String,
    pub brand_id: String,
    pub category_id: String,
    pub price: String,
    pub in_stock: bool,
    pub images: Vec<String>,
    pub tags: String,
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub short_description: String,
    pub brand_id: String,
    pub category_ids: Vec<String>,
    pub price: f64,
    pub in_stock: bool,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl ProductDto {
    pub fn set_name(&mut self, name: String) {
        self.slug = slugify(&name);
        self.name = name;
    }

    pub fn parsed_price(&self) -> Result<f64, String> {
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a valid price", self.price))?;
        if price < 0.0 || !price.is_finite() {
            return Err("Price cannot be negative".into());
        }
        Ok(price)
    }

    pub fn parsed_tags(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name is required".into());
        }
        if self.brand_id.is_empty() {
            return Err("Please select a brand".into());
        }
        if self.category_id.is_empty() {
            return Err("Please select a category".into());
        }
        self.parsed_price()?;
        Ok(())
    }

    /// Request body; `images` are the already uploaded URLs.
    pub fn to_payload(&self, images: Vec<String>) -> Result<ProductPayload, String> {
        self.validate()?;
        Ok(ProductPayload {
            name: self.name.trim().to_string(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            short_description: self.short_description.clone(),
            brand_id: self.brand_id.clone(),
            category_ids: vec![self.category_id.clone()],
            price: self.parsed_price()?,
            in_stock: self.in_stock,
            images,
            tags: self.parsed_tags(),
            gender: self.gender,
        })
    }
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()).filter(|id| !id.is_empty()),
            name: product.name.clone(),
            slug: product.slug.clone(),
            description: product.description.clone(),
            short_description: product.short_description.clone(),
            brand_id: product.brand_ref_id().unwrap_or_default().to_string(),
            category_id: product.category_ref_id().unwrap_or_default().to_string(),
            price: product.price.to_string(),
            in_stock: product.in_stock,
            images: product.images.clone(),
            tags: product.tags.join(", "),
            gender: product.gender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = r#"{
        "_id": "p1",
        "name": "Shoe",
        "slug": "shoe",
        "description": "<p>Leather</p>",
        "shortDescription": "Leather shoe",
        "brandId": {"_id": "b1", "name": "Acme"},
        "categoryIds": {"_id": "c1", "name": "Footwear"},
        "price": 500,
        "discountPrice": 450,
        "inStock": true,
        "images": ["a.png"],
        "tags": ["summer", "men"],
        "gender": "male",
        "rating": 4.5
    }"#;

    #[test]
    fn test_decodes_populated_product() {
        let product: Product = serde_json::from_str(RAW).unwrap();
        assert_eq!(product.brand_ref_id(), Some("b1"));
        assert_eq!(product.category_ref_id(), Some("c1"));
        assert_eq!(product.price, 500.0);
        assert_eq!(product.gender, Some(Gender::Male));
    }

    #[test]
    fn test_form_to_payload() {
        let product: Product = serde_json::from_str(RAW).unwrap();
        let mut dto = ProductDto::from(&product);
        assert_eq!(dto.tags, "summer, men");
        dto.tags = " summer ,, men,kids ".into();
        dto.price = "520.5".into();

        let payload = dto.to_payload(vec!["b.png".into()]).unwrap();
        assert_eq!(payload.tags, vec!["summer", "men", "kids"]);
        assert_eq!(payload.category_ids, vec!["c1"]);
        assert_eq!(payload.price, 520.5);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["brandId"], "b1");
        assert_eq!(json["shortDescription"], "Leather shoe");
        assert_eq!(json["gender"], "male");
    }

    #[test]
    fn test_validation() {
        let mut dto = ProductDto::default();
        dto.set_name("Red Shoe".into());
        assert_eq!(dto.slug, "red-shoe");
        assert!(dto.validate().is_err());

        dto.brand_id = "b1".into();
        dto.category_id = "c1".into();
        dto.price = "abc".into();
        assert!(dto.validate().is_err());
        dto.price = "-1".into();
        assert!(dto.validate().is_err());
        dto.price = "10".into();
        assert!(dto.validate().is_ok());
    }
}
