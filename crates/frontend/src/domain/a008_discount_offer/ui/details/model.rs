use crate::shared::api::{to_payload, EntityService};
use crate::shared::error::AdminError;
use contracts::domain::a008_discount_offer::DiscountOfferDto;
use contracts::shared::entity_registry::EntityKind;

/// Applies one percentage to every selected product.
pub async fn create<S: EntityService + ?Sized>(
    service: &S,
    dto: &DiscountOfferDto,
) -> Result<String, AdminError> {
    let payload = dto.to_payload().map_err(AdminError::Validation)?;
    service
        .create(EntityKind::DiscountOffer, &to_payload(&payload)?)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::RecordingService;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_create_offer() {
        let service = RecordingService::default();
        let mut dto = DiscountOfferDto {
            percentage: "15".into(),
            ..Default::default()
        };
        dto.toggle_product("p1");
        dto.toggle_product("p2");
        block_on(create(&service, &dto)).unwrap();

        let call = service.last().unwrap();
        assert_eq!(call.kind, EntityKind::DiscountOffer);
        assert_eq!(
            call.payload,
            Some(json!({"percentage": 15.0, "products": ["p1", "p2"]}))
        );
    }

    #[test]
    fn test_zero_percent_never_reaches_the_server() {
        let service = RecordingService::default();
        let mut dto = DiscountOfferDto {
            percentage: "0".into(),
            ..Default::default()
        };
        dto.toggle_product("p1");
        let result = block_on(create(&service, &dto));
        assert_eq!(result, Err(AdminError::validation("You can't set 0% offer.")));
        assert!(service.ops().is_empty());
    }
}
