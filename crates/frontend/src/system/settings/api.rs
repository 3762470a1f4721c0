use crate::shared::api::{to_payload, HttpEntityService};
use crate::shared::error::AdminError;
use crate::shared::upload::{upload_or_keep, ImageHost};
use contracts::system::settings::{GeneralSettings, GENERAL_GET_PATH, GENERAL_UPDATE_PATH};

pub async fn fetch_settings(service: &HttpEntityService) -> Result<GeneralSettings, AdminError> {
    service.get(GENERAL_GET_PATH).await
}

/// Validates and swaps in a newly uploaded logo. The returned document is
/// the update body.
pub async fn prepare_update<H: ImageHost + ?Sized>(
    host: &H,
    settings: &GeneralSettings,
    logo: Option<&H::File>,
) -> Result<GeneralSettings, AdminError> {
    settings.validate().map_err(AdminError::Validation)?;
    let logo_url = upload_or_keep(host, logo, &settings.logo_url).await?;
    Ok(settings.with_logo(logo_url))
}

pub async fn save_settings<H: ImageHost + ?Sized>(
    service: &HttpEntityService,
    host: &H,
    settings: &GeneralSettings,
    logo: Option<&H::File>,
) -> Result<String, AdminError> {
    let body = prepare_update(host, settings, logo).await?;
    service.put(GENERAL_UPDATE_PATH, &to_payload(&body)?).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::upload::tests::FakeHost;
    use futures::executor::block_on;

    fn settings() -> GeneralSettings {
        GeneralSettings {
            site_name: "Deshi Mart".into(),
            logo_url: "https://i.ibb.co/old.png".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_logo_replaces_old() {
        let host = FakeHost::failing(&[]);
        let body = block_on(prepare_update(&host, &settings(), Some(&"new.png"))).unwrap();
        assert_eq!(body.logo_url, "https://i.ibb.co/new.png");
        assert_eq!(body.site_name, "Deshi Mart");
    }

    #[test]
    fn test_logo_kept_without_upload() {
        let host = FakeHost::failing(&[]);
        let body = block_on(prepare_update(&host, &settings(), None)).unwrap();
        assert_eq!(body.logo_url, "https://i.ibb.co/old.png");
        assert!(host.uploaded.borrow().is_empty());
    }

    #[test]
    fn test_invalid_settings_skip_upload() {
        let host = FakeHost::failing(&[]);
        let invalid = GeneralSettings {
            site_name: String::new(),
            ..settings()
        };
        let result = block_on(prepare_update(&host, &invalid, Some(&"new.png")));
        assert!(matches!(result, Err(AdminError::Validation(_))));
        assert!(host.uploaded.borrow().is_empty());
    }
}
