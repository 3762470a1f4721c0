use crate::shared::api::{to_payload, EntityService};
use crate::shared::error::AdminError;
use crate::shared::upload::{upload_or_keep, ImageHost};
use contracts::domain::a006_review::ReviewDto;
use contracts::shared::entity_registry::EntityKind;

/// The profile image is optional.
pub async fn create<S, H>(
    service: &S,
    host: &H,
    dto: &ReviewDto,
    avatar: Option<&H::File>,
) -> Result<String, AdminError>
where
    S: EntityService + ?Sized,
    H: ImageHost + ?Sized,
{
    dto.validate().map_err(AdminError::Validation)?;
    let profile_image_url = upload_or_keep(host, avatar, &dto.profile_image_url).await?;
    let payload = to_payload(&ReviewDto {
        profile_image_url,
        ..dto.clone()
    })?;
    service.create(EntityKind::Review, &payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::RecordingService;
    use crate::shared::upload::tests::FakeHost;
    use futures::executor::block_on;
    use serde_json::json;

    fn review() -> ReviewDto {
        ReviewDto {
            customer_name: "Karim".into(),
            message: "Fast delivery".into(),
            review_date: "2024-03-01".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_without_avatar() {
        let service = RecordingService::default();
        let host = FakeHost::failing(&[]);
        block_on(create(&service, &host, &review(), None)).unwrap();

        let payload = service.last().unwrap().payload.unwrap();
        assert_eq!(payload["reviewDate"], json!("2024-03-01"));
        assert_eq!(payload["profileImageUrl"], json!(""));
        assert_eq!(payload["isVisible"], json!(true));
    }

    #[test]
    fn test_missing_date_is_rejected_before_upload() {
        let service = RecordingService::default();
        let host = FakeHost::failing(&[]);
        let dto = ReviewDto {
            review_date: String::new(),
            ..review()
        };
        let result = block_on(create(&service, &host, &dto, Some(&"karim.png")));
        assert!(matches!(result, Err(AdminError::Validation(_))));
        assert!(host.uploaded.borrow().is_empty());
    }
}
