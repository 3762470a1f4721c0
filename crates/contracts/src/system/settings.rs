//! Site wide settings edited on the "General" page.

use crate::domain::a009_free_gift_offer::FreeGiftOffer;
use serde::{Deserialize, Serialize};

pub const GENERAL_GET_PATH: &str = "/general/get";
pub const GENERAL_UPDATE_PATH: &str = "/general/update";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SocialLinks {
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub instagram: String,
}

/// General settings document as the API returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub about_us: String,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default, skip_serializing)]
    pub free_gift: Option<FreeGiftOffer>,
}

impl GeneralSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.site_name.trim().is_empty() {
            return Err("Site name is required".into());
        }
        if !self.contact_email.is_empty() && !self.contact_email.contains('@') {
            return Err("Contact email is not valid".into());
        }
        Ok(())
    }

    /// Update body; the free gift is managed by its own endpoints.
    pub fn with_logo(&self, logo_url: String) -> Self {
        Self {
            logo_url,
            free_gift: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_with_free_gift() {
        let raw = r#"{
            "siteName": "Deshi Mart",
            "logoUrl": "logo.png",
            "socialLinks": {"facebook": "fb.com/deshi"},
            "freeGift": {"product": {"_id": "p1", "name": "Sock"}, "buyAbove": 1500, "applicable": true}
        }"#;
        let settings: GeneralSettings = serde_json::from_str(raw).unwrap();
        assert_eq!(settings.social_links.facebook, "fb.com/deshi");
        assert_eq!(settings.social_links.instagram, "");
        assert!(settings.free_gift.as_ref().unwrap().applicable);

        let body = serde_json::to_value(settings.with_logo("new.png".into())).unwrap();
        assert_eq!(body["logoUrl"], "new.png");
        assert!(body.get("freeGift").is_none());
        assert_eq!(body["socialLinks"]["facebook"], "fb.com/deshi");
    }

    #[test]
    fn test_validation() {
        let mut settings = GeneralSettings::default();
        assert!(settings.validate().is_err());
        settings.site_name = "Deshi Mart".into();
        settings.contact_email = "nope".into();
        assert!(settings.validate().is_err());
        settings.contact_email = "hi@deshi.com".into();
        assert!(settings.validate().is_ok());
    }
}
