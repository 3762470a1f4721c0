use crate::domain::a003_product::Product;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// The single free gift offer, embedded in the general settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FreeGiftOffer {
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub buy_above: f64,
    #[serde(default)]
    pub applicable: bool,
}

impl FreeGiftOffer {
    /// The offer is shown only when it is applicable and names a product.
    pub fn active_product(&self) -> Option<&Product> {
        self.product.as_ref().filter(|_| self.applicable)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FreeGiftDto {
    pub product: Option<String>,
    /// Raw text of the shopping amount input.
    pub buy_above: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeGiftPayload {
    pub product: String,
    pub buy_above: f64,
    pub applicable: bool,
}

impl FreeGiftDto {
    pub fn to_payload(&self) -> Result<FreeGiftPayload, String> {
        let product = self
            .product
            .clone()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| "Select the gift product".to_string())?;
        let buy_above: f64 = self
            .buy_above
            .trim()
            .parse()
            .map_err(|_| "Enter the shopping amount".to_string())?;
        if buy_above == 0.0 {
            return Err("You can't set 0tk range for free gift.".into());
        }
        if buy_above < 0.0 || !buy_above.is_finite() {
            return Err("Shopping amount cannot be negative".into());
        }
        Ok(FreeGiftPayload {
            product,
            buy_above,
            applicable: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_threshold_rejected() {
        let mut dto = FreeGiftDto {
            product: Some("p1".into()),
            buy_above: "0".into(),
        };
        assert_eq!(
            dto.to_payload(),
            Err("You can't set 0tk range for free gift.".into())
        );

        dto.buy_above = "2000".into();
        let payload = dto.to_payload().unwrap();
        assert!(payload.applicable);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"product": "p1", "buyAbove": 2000.0, "applicable": true})
        );

        dto.product = None;
        assert!(dto.to_payload().is_err());
    }

    #[test]
    fn test_active_product() {
        let offer: FreeGiftOffer = serde_json::from_str(
            r#"{"product":{"_id":"p1","name":"Sock","images":["s.png"]},"buyAbove":1500,"applicable":true}"#,
        )
        .unwrap();
        assert_eq!(offer.active_product().map(|p| p.name.as_str()), Some("Sock"));

        let inactive = FreeGiftOffer {
            applicable: false,
            ..offer
        };
        assert!(inactive.active_product().is_none());
    }
}
