//! Combo builder model.
//!
//! A combo's name, slug, description, price and foreign keys are derived
//! from the ordered product selection. The remaining fields are entered by
//! the operator and live in [`ComboOverrides`], which derivation never
//! touches.

use super::aggregate::ComboPayload;
use crate::domain::a003_product::Product;
use crate::shared::slug::slugify;

/// Snapshot of a selected product, as far as derivation needs it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComboMember {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: f64,
    pub brand_id: String,
    pub category_id: String,
}

impl From<&Product> for ComboMember {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            slug: product.slug.clone(),
            description: product.description.clone(),
            price: product.price,
            brand_id: product.brand_ref_id().unwrap_or_default().to_string(),
            category_id: product.category_ref_id().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DerivedCombo {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: f64,
    pub brand_ids: Vec<String>,
    pub category_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComboOverrides {
    pub short_description: String,
    pub discount_price: f64,
    pub in_stock: bool,
    /// Uploaded image URLs; filled right before the create call.
    pub images: Vec<String>,
}

impl Default for ComboOverrides {
    fn default() -> Self {
        Self {
            short_description: String::new(),
            discount_price: 0.0,
            in_stock: true,
            images: Vec::new(),
        }
    }
}

/// Derives the combo fields from an ordered selection.
///
/// Pure: the result depends on nothing but `selection`. Brand and category
/// ids keep one entry per member, duplicates included.
pub fn derive_composite(selection: &[ComboMember]) -> DerivedCombo {
    if selection.is_empty() {
        return DerivedCombo::default();
    }

    let count = selection.len();
    let names: Vec<&str> = selection.iter().map(|m| m.name.as_str()).collect();
    let slugs: Vec<&str> = selection.iter().map(|m| m.slug.as_str()).collect();

    DerivedCombo {
        name: format!("{} - {} in 1 combo.", names.join("+"), count),
        slug: format!("{} - {} in 1 combo", slugs.join("+"), count),
        description: selection.iter().map(|m| m.description.as_str()).collect(),
        price: selection.iter().map(|m| m.price).sum(),
        brand_ids: selection.iter().map(|m| m.brand_id.clone()).collect(),
        category_ids: selection.iter().map(|m| m.category_id.clone()).collect(),
    }
}

/// State of the combo builder form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComboDraft {
    selection: Vec<ComboMember>,
    derived: DerivedCombo,
    pub overrides: ComboOverrides,
}

impl ComboDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &[ComboMember] {
        &self.selection
    }

    pub fn derived(&self) -> &DerivedCombo {
        &self.derived
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.iter().any(|m| m.id == id)
    }

    /// Replaces the selection and re-derives every derived field.
    pub fn set_selection(&mut self, selection: Vec<ComboMember>) {
        self.derived = derive_composite(&selection);
        self.selection = selection;
    }

    /// Adds the member at the end, or removes it when already selected.
    pub fn toggle_member(&mut self, member: ComboMember) {
        let mut selection = self.selection.clone();
        match selection.iter().position(|m| m.id == member.id) {
            Some(index) => {
                selection.remove(index);
            }
            None => selection.push(member),
        }
        self.set_selection(selection);
    }

    /// Slug sent to the server. `+` joins are word boundaries.
    pub fn submission_slug(&self) -> String {
        slugify(&self.derived.slug.replace('+', " "))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.selection.is_empty() {
            return Err("Select at least one product".into());
        }
        if self.overrides.short_description.trim().is_empty() {
            return Err("Short description is required".into());
        }
        if self.overrides.discount_price < 0.0 || !self.overrides.discount_price.is_finite() {
            return Err("Discount price cannot be negative".into());
        }
        Ok(())
    }

    /// Create request with the uploaded image URLs.
    pub fn to_payload(&self, images: Vec<String>) -> Result<ComboPayload, String> {
        self.validate()?;
        Ok(ComboPayload {
            name: self.derived.name.clone(),
            slug: self.submission_slug(),
            description: self.derived.description.clone(),
            short_description: self.overrides.short_description.trim().to_string(),
            brand_ids: self.derived.brand_ids.clone(),
            category_ids: self.derived.category_ids.clone(),
            price: self.derived.price,
            discount_price: self.overrides.discount_price,
            in_stock: self.overrides.in_stock,
            images,
        })
    }

    /// Clears everything after a successful create.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
