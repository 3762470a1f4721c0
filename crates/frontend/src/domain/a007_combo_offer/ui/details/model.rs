use crate::shared::api::{to_payload, EntityService};
use crate::shared::error::AdminError;
use crate::shared::upload::{upload_all, ImageHost};
use contracts::domain::a007_combo_offer::ComboDraft;
use contracts::shared::entity_registry::EntityKind;

/// Uploads every image concurrently and creates the combo only when all of
/// them succeeded. The draft is never modified here.
pub async fn submit_combo<S, H>(
    service: &S,
    host: &H,
    draft: &ComboDraft,
    files: &[H::File],
) -> Result<String, AdminError>
where
    S: EntityService + ?Sized,
    H: ImageHost + ?Sized,
{
    draft.validate().map_err(AdminError::Validation)?;
    if files.is_empty() {
        return Err(AdminError::validation("Please select at least one image"));
    }
    let images = upload_all(host, files).await?;
    let payload = draft.to_payload(images).map_err(AdminError::Validation)?;
    service
        .create(EntityKind::ComboOffer, &to_payload(&payload)?)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::RecordingService;
    use crate::shared::error::UploadError;
    use crate::shared::upload::tests::FakeHost;
    use contracts::domain::a007_combo_offer::ComboMember;
    use futures::executor::block_on;
    use serde_json::json;

    fn member(id: &str, name: &str, slug: &str, price: f64) -> ComboMember {
        ComboMember {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            description: format!("{} description. ", name),
            price,
            brand_id: "b1".into(),
            category_id: format!("c-{}", id),
        }
    }

    fn shoe_and_sock() -> ComboDraft {
        let mut draft = ComboDraft::new();
        draft.toggle_member(member("p1", "Shoe", "shoe", 500.0));
        draft.toggle_member(member("p2", "Sock", "sock", 300.0));
        draft.overrides.short_description = "Walk in comfort".into();
        draft.overrides.discount_price = 700.0;
        draft
    }

    #[test]
    fn test_submit_sends_sanitized_slug_and_uploaded_images() {
        let service = RecordingService::default();
        let host = FakeHost::failing(&[]);
        block_on(submit_combo(&service, &host, &shoe_and_sock(), &["1.png", "2.png"])).unwrap();

        let call = service.last().unwrap();
        assert_eq!(call.op, "create");
        assert_eq!(call.kind, EntityKind::ComboOffer);
        let payload = call.payload.unwrap();
        assert_eq!(payload["name"], json!("Shoe+Sock - 2 in 1 combo."));
        assert_eq!(payload["slug"], json!("shoe-sock-2-in-1-combo"));
        assert_eq!(payload["price"], json!(800.0));
        assert_eq!(payload["discountPrice"], json!(700.0));
        assert_eq!(payload["brandsId"], json!(["b1", "b1"]));
        assert_eq!(payload["categoryIds"], json!(["c-p1", "c-p2"]));
        assert_eq!(
            payload["images"],
            json!(["https://i.ibb.co/1.png", "https://i.ibb.co/2.png"])
        );
    }

    #[test]
    fn test_one_failed_upload_means_no_create() {
        let service = RecordingService::default();
        let host = FakeHost::failing(&["2.png"]);
        let draft = shoe_and_sock();
        let result = block_on(submit_combo(&service, &host, &draft, &["1.png", "2.png", "3.png"]));

        assert_eq!(
            result,
            Err(AdminError::Upload(UploadError::Batch { failed: 1, total: 3 }))
        );
        assert!(service.ops().is_empty());
        assert_eq!(draft, shoe_and_sock());
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let service = RecordingService::default();
        let host = FakeHost::failing(&[]);
        let mut draft = shoe_and_sock();
        draft.set_selection(Vec::new());
        let result = block_on(submit_combo(&service, &host, &draft, &["1.png"]));
        assert!(matches!(result, Err(AdminError::Validation(_))));
        assert!(host.uploaded.borrow().is_empty());
    }

    #[test]
    fn test_images_are_required() {
        let service = RecordingService::default();
        let host = FakeHost::failing(&[]);
        let result = block_on(submit_combo(&service, &host, &shoe_and_sock(), &[]));
        assert!(matches!(result, Err(AdminError::Validation(_))));
        assert!(service.ops().is_empty());
    }

    #[test]
    fn test_deselected_member_leaves_no_trace() {
        let service = RecordingService::default();
        let host = FakeHost::failing(&[]);
        let mut draft = shoe_and_sock();
        draft.toggle_member(member("p2", "Sock", "sock", 300.0));
        block_on(submit_combo(&service, &host, &draft, &["1.png"])).unwrap();

        let payload = service.last().unwrap().payload.unwrap();
        assert_eq!(payload["name"], json!("Shoe - 1 in 1 combo."));
        assert_eq!(payload["price"], json!(500.0));
        assert_eq!(payload["categoryIds"], json!(["c-p1"]));
        assert_eq!(payload["discountPrice"], json!(700.0));
    }
}
