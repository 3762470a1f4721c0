use crate::shared::api::{decode_record, to_payload, EntityService};
use crate::shared::error::AdminError;
use crate::shared::upload::{upload_or_keep, ImageHost};
use contracts::domain::a001_brand::{Brand, BrandDto};
use contracts::shared::entity_registry::EntityKind;

pub async fn fetch_by_id<S: EntityService + ?Sized>(
    service: &S,
    id: &str,
) -> Result<Brand, AdminError> {
    decode_record(service.fetch_by_id(EntityKind::Brand, id).await?)
}

/// Uploads the picked logo (if any), then creates or updates the brand.
pub async fn save_form<S, H>(
    service: &S,
    host: &H,
    dto: &BrandDto,
    logo: Option<&H::File>,
) -> Result<String, AdminError>
where
    S: EntityService + ?Sized,
    H: ImageHost + ?Sized,
{
    dto.validate().map_err(AdminError::Validation)?;
    let logo_url = upload_or_keep(host, logo, &dto.logo_url).await?;
    let payload = to_payload(&BrandDto {
        logo_url,
        ..dto.clone()
    })?;
    match &dto.id {
        Some(id) => service.update(EntityKind::Brand, id, &payload).await,
        None => service.create(EntityKind::Brand, &payload).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::RecordingService;
    use crate::shared::upload::tests::FakeHost;
    use futures::executor::block_on;
    use serde_json::json;

    fn acme() -> BrandDto {
        BrandDto {
            name: "Acme".into(),
            description: "Tools".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_uploads_logo_first() {
        let service = RecordingService::default();
        let host = FakeHost::failing(&[]);
        block_on(save_form(&service, &host, &acme(), Some(&"acme.png"))).unwrap();

        let call = service.last().unwrap();
        assert_eq!(call.op, "create");
        assert_eq!(
            call.payload.unwrap()["logoUrl"],
            json!("https://i.ibb.co/acme.png")
        );
    }

    #[test]
    fn test_edit_keeps_current_logo() {
        let service = RecordingService::default();
        let host = FakeHost::failing(&[]);
        let dto = BrandDto {
            id: Some("b1".into()),
            logo_url: "https://i.ibb.co/old.png".into(),
            ..acme()
        };
        block_on(save_form(&service, &host, &dto, None)).unwrap();

        let call = service.last().unwrap();
        assert_eq!(call.op, "update");
        assert_eq!(call.id.as_deref(), Some("b1"));
        assert_eq!(call.payload.unwrap()["logoUrl"], json!("https://i.ibb.co/old.png"));
        assert!(host.uploaded.borrow().is_empty());
    }

    #[test]
    fn test_failed_upload_skips_save() {
        let service = RecordingService::default();
        let host = FakeHost::failing(&["acme.png"]);
        let result = block_on(save_form(&service, &host, &acme(), Some(&"acme.png")));
        assert!(matches!(result, Err(AdminError::Upload(_))));
        assert!(service.ops().is_empty());
    }

    #[test]
    fn test_invalid_form_makes_no_calls() {
        let service = RecordingService::default();
        let host = FakeHost::failing(&[]);
        let dto = BrandDto::default();
        let result = block_on(save_form(&service, &host, &dto, Some(&"acme.png")));
        assert!(matches!(result, Err(AdminError::Validation(_))));
        assert!(service.ops().is_empty());
        assert!(host.uploaded.borrow().is_empty());
    }
}
