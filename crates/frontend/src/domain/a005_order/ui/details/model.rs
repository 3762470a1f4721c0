use crate::shared::api::{decode_record, to_payload, EntityService};
use crate::shared::error::AdminError;
use contracts::domain::a005_order::{Order, OrderStatusPatch};
use contracts::shared::entity_registry::EntityKind;

pub async fn fetch_by_id<S: EntityService + ?Sized>(
    service: &S,
    id: &str,
) -> Result<Order, AdminError> {
    decode_record(service.fetch_by_id(EntityKind::Order, id).await?)
}

/// Sends the status patch and returns the order as it is after the server
/// accepted it.
pub async fn update_status<S: EntityService + ?Sized>(
    service: &S,
    order: &Order,
    patch: OrderStatusPatch,
) -> Result<Order, AdminError> {
    service
        .update(EntityKind::Order, &order.id, &to_payload(&patch)?)
        .await?;
    let mut updated = order.clone();
    updated.apply(&patch);
    Ok(updated)
}

pub async fn delete<S: EntityService + ?Sized>(service: &S, id: &str) -> Result<String, AdminError> {
    service.delete(EntityKind::Order, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::RecordingService;
    use futures::executor::block_on;
    use serde_json::json;

    fn pending() -> Order {
        Order {
            id: "o1".into(),
            customer_name: "Rahim".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_confirm_sends_only_that_flag() {
        let service = RecordingService::default();
        let order = pending();
        let updated = block_on(update_status(&service, &order, order.toggle_confirmed())).unwrap();
        assert!(updated.is_confirmed);
        assert!(!updated.is_shipped);
        assert_eq!(
            service.last().unwrap().payload,
            Some(json!({"isConfirmed": true}))
        );
    }

    #[test]
    fn test_rejected_update_leaves_order_alone() {
        let service = RecordingService::rejecting("Order is locked");
        let order = pending();
        let result = block_on(update_status(&service, &order, order.toggle_shipped()));
        assert!(result.is_err());
        assert!(!order.is_shipped);
    }

    #[test]
    fn test_load_and_delete() {
        let service = RecordingService::with_record(json!({
            "_id": "o1",
            "customerName": "Rahim",
            "totalAmount": 1250,
            "products": [{"name": "Shoe", "quantity": 2, "price": 500}]
        }));
        let order = block_on(fetch_by_id(&service, "o1")).unwrap();
        assert_eq!(order.products.len(), 1);
        assert_eq!(order.total_amount, 1250.0);

        block_on(delete(&service, "o1")).unwrap();
        assert_eq!(service.ops(), vec!["fetch_by_id", "delete"]);
    }
}
