use crate::shared::api::{decode_record, to_payload, EntityService};
use crate::shared::error::AdminError;
use crate::shared::upload::{upload_all, ImageHost};
use contracts::domain::a003_product::{Product, ProductDto};
use contracts::shared::entity_registry::EntityKind;

pub async fn fetch_by_id<S: EntityService + ?Sized>(
    service: &S,
    id: &str,
) -> Result<Product, AdminError> {
    decode_record(service.fetch_by_id(EntityKind::Product, id).await?)
}

/// Newly picked images replace the stored ones; with nothing picked the
/// stored list is kept.
pub async fn save_form<S, H>(
    service: &S,
    host: &H,
    dto: &ProductDto,
    files: &[H::File],
) -> Result<String, AdminError>
where
    S: EntityService + ?Sized,
    H: ImageHost + ?Sized,
{
    dto.validate().map_err(AdminError::Validation)?;
    let images = if files.is_empty() {
        dto.images.clone()
    } else {
        upload_all(host, files).await?
    };
    let payload = to_payload(&dto.to_payload(images).map_err(AdminError::Validation)?)?;
    match &dto.id {
        Some(id) => service.update(EntityKind::Product, id, &payload).await,
        None => service.create(EntityKind::Product, &payload).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::RecordingService;
    use crate::shared::error::UploadError;
    use crate::shared::upload::tests::FakeHost;
    use futures::executor::block_on;
    use serde_json::json;

    fn shoe() -> ProductDto {
        let mut dto = ProductDto {
            brand_id: "b1".into(),
            category_id: "c1".into(),
            price: "500".into(),
            tags: "summer, sale".into(),
            ..Default::default()
        };
        dto.set_name("Running Shoe".into());
        dto
    }

    #[test]
    fn test_create_with_uploaded_images() {
        let service = RecordingService::default();
        let host = FakeHost::failing(&[]);
        block_on(save_form(&service, &host, &shoe(), &["a.png", "b.png"])).unwrap();

        let call = service.last().unwrap();
        assert_eq!(call.op, "create");
        let payload = call.payload.unwrap();
        assert_eq!(
            payload["images"],
            json!(["https://i.ibb.co/a.png", "https://i.ibb.co/b.png"])
        );
        assert_eq!(payload["slug"], json!("running-shoe"));
        assert_eq!(payload["categoryIds"], json!(["c1"]));
        assert_eq!(payload["tags"], json!(["summer", "sale"]));
        assert_eq!(payload["price"], json!(500.0));
    }

    #[test]
    fn test_edit_without_new_images_keeps_stored_ones() {
        let service = RecordingService::default();
        let host = FakeHost::failing(&[]);
        let dto = ProductDto {
            id: Some("p1".into()),
            images: vec!["https://i.ibb.co/old.png".into()],
            ..shoe()
        };
        block_on(save_form(&service, &host, &dto, &[])).unwrap();

        let call = service.last().unwrap();
        assert_eq!(call.op, "update");
        assert_eq!(call.payload.unwrap()["images"], json!(["https://i.ibb.co/old.png"]));
    }

    #[test]
    fn test_partial_upload_failure_aborts() {
        let service = RecordingService::default();
        let host = FakeHost::failing(&["b.png"]);
        let result = block_on(save_form(&service, &host, &shoe(), &["a.png", "b.png", "c.png"]));
        assert_eq!(
            result,
            Err(AdminError::Upload(UploadError::Batch { failed: 1, total: 3 }))
        );
        assert!(service.ops().is_empty());
    }

    #[test]
    fn test_bad_price_is_a_validation_error() {
        let service = RecordingService::default();
        let host = FakeHost::failing(&[]);
        let dto = ProductDto {
            price: "abc".into(),
            ..shoe()
        };
        let result = block_on(save_form(&service, &host, &dto, &["a.png"]));
        assert!(matches!(result, Err(AdminError::Validation(_))));
        assert!(host.uploaded.borrow().is_empty());
    }
}
