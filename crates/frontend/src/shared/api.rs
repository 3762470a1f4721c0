//! Entity query service: typed CRUD over the REST API.
//!
//! Routes come from the entity registry; every response is the
//! `{statusCode, success, message, data}` envelope. Rows stay raw JSON so
//! tables do not depend on entity shapes.

use super::config::{use_config, AppConfig};
use super::error::{AdminError, TransportError};
use crate::system::auth::context::use_auth;
use async_trait::async_trait;
use contracts::shared::entity_registry::{EntityBinding, EntityKind, EntityRegistry};
use contracts::shared::envelope::ApiEnvelope;
use contracts::shared::pagination::{ListPayload, PageRequest, PageResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Binding registered under the canonical name of `kind`.
pub fn canonical_binding(kind: EntityKind) -> Result<EntityBinding, AdminError> {
    EntityRegistry::global()
        .binding_for(kind)
        .ok_or_else(|| AdminError::Configuration(kind.name().to_string()))
}

#[async_trait(?Send)]
pub trait EntityService {
    /// One page through the routes of an already resolved binding.
    async fn fetch_page_at(
        &self,
        binding: EntityBinding,
        page: PageRequest,
    ) -> Result<PageResponse<Value>, AdminError>;

    async fn fetch_page(
        &self,
        kind: EntityKind,
        page: PageRequest,
    ) -> Result<PageResponse<Value>, AdminError> {
        self.fetch_page_at(canonical_binding(kind)?, page).await
    }

    async fn fetch_by_id(&self, kind: EntityKind, id: &str) -> Result<Value, AdminError>;

    /// Returns the server message on success.
    async fn create(&self, kind: EntityKind, payload: &Value) -> Result<String, AdminError>;

    async fn update(
        &self,
        kind: EntityKind,
        id: &str,
        payload: &Value,
    ) -> Result<String, AdminError>;

    async fn delete_at(&self, binding: EntityBinding, id: &str) -> Result<String, AdminError>;

    async fn delete(&self, kind: EntityKind, id: &str) -> Result<String, AdminError> {
        self.delete_at(canonical_binding(kind)?, id).await
    }
}

/// Serializes a request body for [`EntityService`] mutations.
pub fn to_payload<T: Serialize>(value: &T) -> Result<Value, AdminError> {
    serde_json::to_value(value)
        .map_err(|e| AdminError::Mutation(TransportError::Encode(e.to_string())))
}

/// Decodes a raw record into its typed form.
pub fn decode_record<T: DeserializeOwned>(record: Value) -> Result<T, AdminError> {
    serde_json::from_value(record)
        .map_err(|e| AdminError::Fetch(TransportError::Decode(e.to_string())))
}

/// Typed list of the first `limit` records, e.g. for select options.
pub async fn fetch_options<T: DeserializeOwned, S: EntityService + ?Sized>(
    service: &S,
    kind: EntityKind,
    limit: usize,
) -> Result<Vec<T>, AdminError> {
    let page = service.fetch_page(kind, PageRequest::first(limit)).await?;
    page.result.into_iter().map(decode_record).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpEntityService {
    api_base: String,
    token: Option<String>,
}

impl HttpEntityService {
    pub fn new(config: &AppConfig, token: Option<String>) -> Self {
        Self {
            api_base: config.api_base.clone(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Reads the envelope; non-2xx answers keep the server message if any.
    async fn read_envelope(response: Response) -> Result<ApiEnvelope<Value>, TransportError> {
        let status = response.status();
        if !response.ok() {
            let message = response
                .json::<ApiEnvelope<Value>>()
                .await
                .ok()
                .and_then(|envelope| envelope.message)
                .filter(|m| !m.trim().is_empty());
            return Err(match message {
                Some(message) => TransportError::Rejected { status, message },
                None => TransportError::Status(status),
            });
        }
        response
            .json::<ApiEnvelope<Value>>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }

    async fn get_envelope(&self, path: &str) -> Result<ApiEnvelope<Value>, TransportError> {
        let response = self
            .authorized(Request::get(&self.url(path)))
            .header("Cache-Control", "no-cache, no-store, must-revalidate")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Self::read_envelope(response).await
    }

    async fn send_envelope(
        &self,
        builder: RequestBuilder,
        body: Option<&Value>,
    ) -> Result<ApiEnvelope<Value>, TransportError> {
        let builder = self.authorized(builder);
        let response = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| TransportError::Encode(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| TransportError::Network(e.to_string()))?;
        Self::read_envelope(response).await
    }

    /// GET of a non-entity endpoint (settings), decoded into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AdminError> {
        let envelope = self.get_envelope(path).await.map_err(AdminError::Fetch)?;
        let data = envelope
            .into_data()
            .map_err(|m| AdminError::Fetch(TransportError::Decode(m)))?;
        decode_record(data)
    }

    /// POST of a non-entity endpoint. Returns the whole envelope.
    pub async fn post(&self, path: &str, body: &Value) -> Result<ApiEnvelope<Value>, AdminError> {
        self.send_envelope(Request::post(&self.url(path)), Some(body))
            .await
            .map_err(AdminError::Mutation)
    }

    /// PUT of a non-entity endpoint. Returns the server message.
    pub async fn put(&self, path: &str, body: &Value) -> Result<String, AdminError> {
        let envelope = self
            .send_envelope(Request::put(&self.url(path)), Some(body))
            .await
            .map_err(AdminError::Mutation)?;
        mutation_message(envelope, "Saved successfully")
    }
}

fn mutation_message(envelope: ApiEnvelope<Value>, default: &str) -> Result<String, AdminError> {
    if !envelope.success {
        return Err(AdminError::Mutation(TransportError::Rejected {
            status: envelope.status_code.unwrap_or(400),
            message: envelope.message_or("Request was rejected"),
        }));
    }
    Ok(envelope.message_or(default))
}

#[async_trait(?Send)]
impl EntityService for HttpEntityService {
    async fn fetch_page_at(
        &self,
        binding: EntityBinding,
        page: PageRequest,
    ) -> Result<PageResponse<Value>, AdminError> {
        let envelope = self
            .get_envelope(&binding.routes.list_path(page))
            .await
            .map_err(AdminError::Fetch)?;
        let data = envelope
            .into_data()
            .map_err(|m| AdminError::Fetch(TransportError::Decode(m)))?;
        let payload: ListPayload<Value> = serde_json::from_value(data)
            .map_err(|e| AdminError::Fetch(TransportError::Decode(e.to_string())))?;
        payload
            .into_page()
            .map_err(|e| AdminError::Fetch(TransportError::Decode(e.to_string())))
    }

    async fn fetch_by_id(&self, kind: EntityKind, id: &str) -> Result<Value, AdminError> {
        let routes = canonical_binding(kind)?.routes;
        let envelope = self
            .get_envelope(&routes.by_id_path(&urlencoding::encode(id)))
            .await
            .map_err(AdminError::Fetch)?;
        envelope
            .into_data()
            .map_err(|m| AdminError::Fetch(TransportError::Decode(m)))
    }

    async fn create(&self, kind: EntityKind, payload: &Value) -> Result<String, AdminError> {
        let routes = canonical_binding(kind)?.routes;
        let envelope = self
            .send_envelope(Request::post(&self.url(&routes.create_path())), Some(payload))
            .await
            .map_err(AdminError::Mutation)?;
        mutation_message(envelope, "Created successfully")
    }

    async fn update(
        &self,
        kind: EntityKind,
        id: &str,
        payload: &Value,
    ) -> Result<String, AdminError> {
        let routes = canonical_binding(kind)?.routes;
        let url = self.url(&routes.update_path(&urlencoding::encode(id)));
        let envelope = self
            .send_envelope(Request::put(&url), Some(payload))
            .await
            .map_err(AdminError::Mutation)?;
        mutation_message(envelope, "Updated successfully")
    }

    async fn delete_at(&self, binding: EntityBinding, id: &str) -> Result<String, AdminError> {
        let url = self.url(&binding.routes.delete_path(&urlencoding::encode(id)));
        let envelope = self
            .send_envelope(Request::delete(&url), None)
            .await
            .map_err(AdminError::Mutation)?;
        mutation_message(envelope, "Deleted successfully")
    }
}

/// Loads select options once. Failures end up in the returned error line.
pub fn use_options<T>(kind: EntityKind, limit: usize) -> (RwSignal<Vec<T>>, RwSignal<Option<String>>)
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let options = RwSignal::new(Vec::new());
    let error = RwSignal::new(None);
    let service = use_entity_service();
    spawn_local(async move {
        match fetch_options::<T, _>(&service, kind, limit).await {
            Ok(items) => {
                options.try_set(items);
            }
            Err(e) => {
                log::error!("{} options failed: {}", kind.name(), e);
                error.try_set(Some(e.to_string()));
            }
        }
    });
    (options, error)
}

/// Service bound to the configured API base and the session token.
pub fn use_entity_service() -> HttpEntityService {
    let config = use_config();
    let (auth_state, _) = use_auth();
    let token = auth_state.with_untracked(|state| state.token.clone());
    HttpEntityService::new(&config, token)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct Call {
        pub op: &'static str,
        pub kind: EntityKind,
        pub id: Option<String>,
        pub payload: Option<Value>,
        /// Route template the call went through, for list reads and deletes.
        pub route: Option<&'static str>,
    }

    /// In-memory service that records every call. `record` answers
    /// `fetch_by_id`, `rows` answers `fetch_page`.
    #[derive(Default)]
    pub(crate) struct RecordingService {
        pub calls: RefCell<Vec<Call>>,
        pub record: Value,
        pub rows: Vec<Value>,
        pub reject: Option<String>,
    }

    impl RecordingService {
        pub(crate) fn with_record(record: Value) -> Self {
            Self {
                record,
                ..Default::default()
            }
        }

        pub(crate) fn rejecting(message: &str) -> Self {
            Self {
                reject: Some(message.to_string()),
                ..Default::default()
            }
        }

        pub(crate) fn ops(&self) -> Vec<&'static str> {
            self.calls.borrow().iter().map(|c| c.op).collect()
        }

        pub(crate) fn last(&self) -> Option<Call> {
            self.calls.borrow().last().cloned()
        }

        fn push(&self, op: &'static str, kind: EntityKind, id: Option<&str>, payload: Option<&Value>) {
            self.calls.borrow_mut().push(Call {
                op,
                kind,
                id: id.map(str::to_string),
                payload: payload.cloned(),
                route: None,
            });
        }

        fn routed(&self, route: &'static str) {
            if let Some(call) = self.calls.borrow_mut().last_mut() {
                call.route = Some(route);
            }
        }

        fn answer(&self, message: &str) -> Result<String, AdminError> {
            match &self.reject {
                Some(reason) => Err(AdminError::Mutation(TransportError::Rejected {
                    status: 400,
                    message: reason.clone(),
                })),
                None => Ok(message.to_string()),
            }
        }
    }

    #[async_trait(?Send)]
    impl EntityService for RecordingService {
        async fn fetch_page_at(
            &self,
            binding: EntityBinding,
            page: PageRequest,
        ) -> Result<PageResponse<Value>, AdminError> {
            self.push("fetch_page", binding.kind, None, None);
            self.routed(binding.routes.list);
            let result: Vec<Value> = self
                .rows
                .iter()
                .skip(page.offset)
                .take(page.limit)
                .cloned()
                .collect();
            Ok(PageResponse {
                result,
                total: self.rows.len(),
            })
        }

        async fn fetch_by_id(&self, kind: EntityKind, id: &str) -> Result<Value, AdminError> {
            self.push("fetch_by_id", kind, Some(id), None);
            Ok(self.record.clone())
        }

        async fn create(&self, kind: EntityKind, payload: &Value) -> Result<String, AdminError> {
            self.push("create", kind, None, Some(payload));
            self.answer("Created")
        }

        async fn update(
            &self,
            kind: EntityKind,
            id: &str,
            payload: &Value,
        ) -> Result<String, AdminError> {
            self.push("update", kind, Some(id), Some(payload));
            self.answer("Updated")
        }

        async fn delete_at(&self, binding: EntityBinding, id: &str) -> Result<String, AdminError> {
            self.push("delete", binding.kind, Some(id), None);
            self.routed(binding.routes.delete);
            self.answer("Deleted")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_brand::aggregate::Brand;
    use serde_json::json;

    #[test]
    fn test_mutation_message() {
        let ok: ApiEnvelope<Value> =
            serde_json::from_value(json!({"success": true, "message": "Brand created"})).unwrap();
        assert_eq!(mutation_message(ok, "Created").unwrap(), "Brand created");

        let quiet: ApiEnvelope<Value> = serde_json::from_value(json!({"success": true})).unwrap();
        assert_eq!(mutation_message(quiet, "Created").unwrap(), "Created");

        let rejected: ApiEnvelope<Value> = serde_json::from_value(
            json!({"statusCode": 409, "success": false, "message": "Duplicate slug"}),
        )
        .unwrap();
        assert_eq!(
            mutation_message(rejected, "Created").unwrap_err(),
            AdminError::Mutation(TransportError::Rejected {
                status: 409,
                message: "Duplicate slug".into()
            })
        );
    }

    #[test]
    fn test_kind_calls_use_the_canonical_routes() {
        let service = testing::RecordingService::default();
        futures::executor::block_on(service.fetch_page(EntityKind::Product, PageRequest::first(5)))
            .unwrap();
        futures::executor::block_on(service.delete(EntityKind::Product, "p1")).unwrap();

        let calls = service.calls.borrow();
        assert_eq!(calls[0].route, Some("/product/get"));
        assert_eq!(calls[1].route, Some("/product/delete/{id}"));
        assert!(calls.iter().all(|c| c.kind == EntityKind::Product));
    }

    #[test]
    fn test_decode_record() {
        let brand: Brand = decode_record(json!({"_id": "b1", "name": "Acme"})).unwrap();
        assert_eq!(brand.id, "b1");
        assert!(matches!(
            decode_record::<Brand>(json!(42)),
            Err(AdminError::Fetch(TransportError::Decode(_)))
        ));
    }
}
