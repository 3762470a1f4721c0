use crate::shared::api::{to_payload, EntityService};
use crate::shared::error::AdminError;
use contracts::domain::a009_free_gift_offer::FreeGiftDto;
use contracts::shared::entity_registry::EntityKind;

pub async fn create<S: EntityService + ?Sized>(
    service: &S,
    dto: &FreeGiftDto,
) -> Result<String, AdminError> {
    let payload = dto.to_payload().map_err(AdminError::Validation)?;
    service
        .create(EntityKind::FreeGiftOffer, &to_payload(&payload)?)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::RecordingService;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_create_marks_offer_applicable() {
        let service = RecordingService::default();
        let dto = FreeGiftDto {
            product: Some("p1".into()),
            buy_above: "1500".into(),
        };
        block_on(create(&service, &dto)).unwrap();
        assert_eq!(
            service.last().unwrap().payload,
            Some(json!({"product": "p1", "buyAbove": 1500.0, "applicable": true}))
        );
    }

    #[test]
    fn test_zero_threshold_is_rejected() {
        let service = RecordingService::default();
        let dto = FreeGiftDto {
            product: Some("p1".into()),
            buy_above: "0".into(),
        };
        assert_eq!(
            block_on(create(&service, &dto)),
            Err(AdminError::validation("You can't set 0tk range for free gift."))
        );
        assert!(service.ops().is_empty());
    }
}
