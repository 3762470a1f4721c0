use crate::shared::api::{to_payload, EntityService};
use crate::shared::error::AdminError;
use crate::shared::upload::ImageHost;
use contracts::domain::a004_banner::BannerDto;
use contracts::shared::entity_registry::EntityKind;

/// Banners always come with a freshly uploaded image.
pub async fn create<S, H>(
    service: &S,
    host: &H,
    dto: &BannerDto,
    image: Option<&H::File>,
) -> Result<String, AdminError>
where
    S: EntityService + ?Sized,
    H: ImageHost + ?Sized,
{
    dto.validate().map_err(AdminError::Validation)?;
    let image = image.ok_or_else(|| AdminError::validation("Please select a banner image"))?;
    let image_url = host.upload(image).await?;
    let payload = to_payload(&BannerDto {
        image_url,
        ..dto.clone()
    })?;
    service.create(EntityKind::Banner, &payload).await
}
