use crate::domain::common::AggregateRoot;
use crate::shared::entity_registry::EntityKind;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Customer review copied from the shop's Facebook page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub profile_image_url: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub review_date: String,
    #[serde(default)]
    pub is_visible: bool,
}

impl AggregateRoot for Review {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.customer_name
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn kind() -> EntityKind {
        EntityKind::Review
    }

    fn list_name() -> &'static str {
        "Reviews"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub customer_name: String,
    pub profile_image_url: String,
    pub message: String,
    /// `YYYY-MM-DD` as entered in the date input.
    pub review_date: String,
    pub is_visible: bool,
}

impl Default for ReviewDto {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            profile_image_url: String::new(),
            message: String::new(),
            review_date: String::new(),
            is_visible: true,
        }
    }
}

impl ReviewDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.customer_name.trim().is_empty() {
            return Err("Customer name is required".into());
        }
        if self.message.trim().is_empty() {
            return Err("Review message is required".into());
        }
        if chrono::NaiveDate::parse_from_str(&self.review_date, "%Y-%m-%d").is_err() {
            return Err("Please pick the review date".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_validation() {
        let mut dto = ReviewDto {
            customer_name: "Karim".into(),
            message: "Great service".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
        dto.review_date = "2024-03-05".into();
        assert!(dto.validate().is_ok());
        dto.message = "   ".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_payload_names() {
        let payload = serde_json::to_value(ReviewDto::default()).unwrap();
        assert_eq!(payload["isVisible"], true);
        assert!(payload.get("profileImageUrl").is_some());
        assert!(payload.get("reviewDate").is_some());
    }
}
