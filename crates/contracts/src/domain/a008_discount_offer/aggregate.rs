use crate::domain::common::AggregateRoot;
use crate::shared::entity_registry::EntityKind;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Row of the percentage offer list: a product with the offer applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DiscountedProduct {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount_price: f64,
    #[serde(default)]
    pub discount_amount: f64,
}

impl AggregateRoot for DiscountedProduct {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn kind() -> EntityKind {
        EntityKind::DiscountOffer
    }

    fn list_name() -> &'static str {
        "Percentage offers"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiscountOfferDto {
    /// Selected product ids in selection order.
    pub products: Vec<String>,
    /// Raw text of the percentage input.
    pub percentage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountOfferPayload {
    pub percentage: f64,
    pub products: Vec<String>,
}

impl DiscountOfferDto {
    pub fn toggle_product(&mut self, id: &str) {
        match self.products.iter().position(|p| p == id) {
            Some(index) => {
                self.products.remove(index);
            }
            None => self.products.push(id.to_string()),
        }
    }

    pub fn validate(&self) -> Result<f64, String> {
        if self.products.is_empty() {
            return Err("Select at least one product".into());
        }
        let percentage: f64 = self
            .percentage
            .trim()
            .parse()
            .map_err(|_| "Enter the offer percentage".to_string())?;
        if percentage == 0.0 {
            return Err("You can't set 0% offer.".into());
        }
        if !(0.0..=100.0).contains(&percentage) {
            return Err("Percentage must be between 0 and 100".into());
        }
        Ok(percentage)
    }

    pub fn to_payload(&self) -> Result<DiscountOfferPayload, String> {
        let percentage = self.validate()?;
        Ok(DiscountOfferPayload {
            percentage,
            products: self.products.clone(),
        })
    }
}

/// Percentage that brings `current` down to `target`, rounded to two
/// decimals. `None` when the current price is not positive.
pub fn discount_percentage(current: f64, target: f64) -> Option<f64> {
    if current.is_nan() || current <= 0.0 || !target.is_finite() {
        return None;
    }
    let raw = (current - target) / current * 100.0;
    Some((raw * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_percent_rejected() {
        let mut dto = DiscountOfferDto::default();
        dto.toggle_product("p1");
        dto.percentage = "0".into();
        assert_eq!(dto.validate(), Err("You can't set 0% offer.".into()));

        dto.percentage = "abc".into();
        assert!(dto.validate().is_err());
        dto.percentage = "150".into();
        assert!(dto.validate().is_err());

        dto.percentage = "12.5".into();
        let payload = dto.to_payload().unwrap();
        assert_eq!(payload.percentage, 12.5);
        assert_eq!(payload.products, vec!["p1"]);
    }

    #[test]
    fn test_toggle_product() {
        let mut dto = DiscountOfferDto::default();
        dto.toggle_product("p1");
        dto.toggle_product("p2");
        dto.toggle_product("p1");
        assert_eq!(dto.products, vec!["p2"]);
        dto.percentage = "10".into();
        dto.products.clear();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_discount_percentage() {
        assert_eq!(discount_percentage(1000.0, 850.0), Some(15.0));
        assert_eq!(discount_percentage(300.0, 200.0), Some(33.33));
        assert_eq!(discount_percentage(0.0, 10.0), None);
        assert_eq!(discount_percentage(-5.0, 1.0), None);
    }
}
