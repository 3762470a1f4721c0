use crate::shared::api::{decode_record, to_payload, EntityService};
use crate::shared::error::AdminError;
use crate::shared::upload::{upload_or_keep, ImageHost};
use contracts::domain::a002_category::{Category, CategoryDto};
use contracts::shared::entity_registry::EntityKind;

pub async fn fetch_by_id<S: EntityService + ?Sized>(
    service: &S,
    id: &str,
) -> Result<Category, AdminError> {
    decode_record(service.fetch_by_id(EntityKind::Category, id).await?)
}

pub async fn save_form<S, H>(
    service: &S,
    host: &H,
    dto: &CategoryDto,
    image: Option<&H::File>,
) -> Result<String, AdminError>
where
    S: EntityService + ?Sized,
    H: ImageHost + ?Sized,
{
    dto.validate().map_err(AdminError::Validation)?;
    let image_url = upload_or_keep(host, image, &dto.image_url).await?;
    let payload = to_payload(&CategoryDto {
        image_url,
        ..dto.clone()
    })?;
    match &dto.id {
        Some(id) => service.update(EntityKind::Category, id, &payload).await,
        None => service.create(EntityKind::Category, &payload).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::RecordingService;
    use crate::shared::upload::tests::FakeHost;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_create_sends_derived_slug() {
        let service = RecordingService::default();
        let host = FakeHost::failing(&[]);
        let mut dto = CategoryDto::default();
        dto.set_name("Men's Shoes".into());
        block_on(save_form(&service, &host, &dto, Some(&"shoes.png"))).unwrap();

        let payload = service.last().unwrap().payload.unwrap();
        assert_eq!(payload["slug"], json!("mens-shoes"));
        assert_eq!(payload["imageUrl"], json!("https://i.ibb.co/shoes.png"));
    }

    #[test]
    fn test_load_decodes_category() {
        let service = RecordingService::with_record(json!({
            "_id": "c1",
            "name": "Shoes",
            "slug": "shoes",
            "isFeatured": true
        }));
        let category = block_on(fetch_by_id(&service, "c1")).unwrap();
        assert_eq!(category.slug, "shoes");
        assert!(category.is_featured);
        assert_eq!(service.last().unwrap().id.as_deref(), Some("c1"));
    }
}
