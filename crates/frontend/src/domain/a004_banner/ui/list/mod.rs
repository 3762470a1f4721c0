use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{new_key, tab_label_for_key};
use crate::shared::api::{decode_record, use_entity_service, EntityService};
use crate::shared::components::ui::badge::FlagBadge;
use crate::shared::config::OPTIONS_LIMIT;
use crate::shared::date_utils::format_datetime;
use crate::shared::error::AdminError;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::request_seq::RequestSeq;
use contracts::domain::a004_banner::{toggle_patch, Banner};
use contracts::shared::entity_registry::EntityKind;
use contracts::shared::page_cache::apply_patch;
use contracts::shared::pagination::PageRequest;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

/// Flips `isActive` on the server. Returns the patch to apply locally once
/// the server has confirmed it.
async fn toggle_active<S: EntityService + ?Sized>(
    service: &S,
    banner: &Banner,
) -> Result<Value, AdminError> {
    let patch = toggle_patch(banner);
    service.update(EntityKind::Banner, &banner.id, &patch).await?;
    Ok(patch)
}

#[component]
#[allow(non_snake_case)]
pub fn BannerList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let service = StoredValue::new(use_entity_service());
    let rows = RwSignal::new(Vec::<Value>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let toggling = RwSignal::new(None::<String>);

    let requests = StoredValue::new(RequestSeq::default());

    let load = move || {
        let service = service.get_value();
        let Some(ticket) = requests.try_update_value(|r| r.begin()) else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            let result = service
                .fetch_page(EntityKind::Banner, PageRequest::first(OPTIONS_LIMIT))
                .await;
            if requests.try_with_value(|r| r.is_current(ticket)) != Some(true) {
                log!("banner list response {} superseded", ticket);
                return;
            }
            match result {
                Ok(page) => {
                    log!("🖼️ banners loaded: {}", page.result.len());
                    rows.try_set(page.result);
                    set_error.try_set(None);
                }
                Err(e) => {
                    log::error!("banner list failed: {}", e);
                    set_error.try_set(Some(e.to_string()));
                }
            }
            set_loading.try_set(false);
        });
    };

    Effect::new(move |_| {
        tabs_store.data_revision.track();
        load();
    });

    let toggle = move |banner: Banner| {
        toggling.set(Some(banner.id.clone()));
        set_error.set(None);
        let service = service.get_value();
        spawn_local(async move {
            match toggle_active(&service, &banner).await {
                Ok(patch) => {
                    rows.try_update(|rows| apply_patch(rows, &banner.id, &patch));
                }
                Err(e) => {
                    log::error!("banner {} toggle failed: {}", banner.id, e);
                    set_error.try_set(Some(e.to_string()));
                }
            }
            toggling.try_set(None);
        });
    };

    let banners = move || {
        rows.get()
            .into_iter()
            .filter_map(|row| match decode_record::<Banner>(row) {
                Ok(banner) => Some(banner),
                Err(e) => {
                    log::warn!("skipping banner row: {}", e);
                    None
                }
            })
            .collect::<Vec<_>>()
    };

    let create_tab = new_key(EntityKind::Banner);

    view! {
        <PageFrame page_id="a004_banner--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{"Manage Banners"}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| tabs_store.open_tab(create_tab, tab_label_for_key(create_tab))
                    >
                        {icon("plus")}
                        "Create banner"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
                <Show when=move || loading.get()>
                    <Flex justify=FlexJustify::Center><Spinner /></Flex>
                </Show>

                <div class="banner-grid">
                    <For
                        each=banners
                        key=|banner| (banner.id.clone(), banner.is_active)
                        children=move |banner| {
                            let is_active = banner.is_active;
                            let id = banner.id.clone();
                            let busy = move || toggling.get().as_deref() == Some(id.as_str());
                            let created = banner
                                .created_at
                                .as_deref()
                                .map(|at| format!("Created: {}", format_datetime(at)))
                                .unwrap_or_default();
                            let title = banner.title.clone();
                            let image = banner.image_url.clone();
                            let target = format!("{} · {}", banner.banner_type, banner.asset);
                            view! {
                                <div class="banner-card">
                                    <img class="banner-card__image" src=image alt=title.clone() />
                                    <div class="banner-card__body">
                                        <h3 class="banner-card__title">{title}</h3>
                                        <div class="banner-card__meta">{target}</div>
                                        <div class="banner-card__meta">{created}</div>
                                        <div class="banner-card__actions">
                                            <FlagBadge
                                                on=Signal::derive(move || is_active)
                                                on_label="Active"
                                                off_label="Inactive"
                                            />
                                            <Button
                                                appearance=ButtonAppearance::Secondary
                                                on_click=move |_| toggle(banner.clone())
                                                disabled=Signal::derive(busy)
                                            >
                                                {if is_active { "Deactivate" } else { "Activate" }}
                                            </Button>
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>

                <Show when=move || !loading.get() && error.get().is_none() && rows.with(|r| r.is_empty())>
                    <div class="entity-table__empty">"No banners yet"</div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::RecordingService;
    use futures::executor::block_on;
    use serde_json::json;

    fn summer() -> Banner {
        Banner {
            id: "b1".into(),
            title: "Summer".into(),
            is_active: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_toggle_returns_confirmed_patch() {
        let service = RecordingService::default();
        let patch = block_on(toggle_active(&service, &summer())).unwrap();
        assert_eq!(patch, json!({"isActive": false}));

        let call = service.last().unwrap();
        assert_eq!(call.op, "update");
        assert_eq!(call.id.as_deref(), Some("b1"));

        let mut rows = vec![json!({"_id": "b1", "title": "Summer", "isActive": true})];
        assert!(apply_patch(&mut rows, "b1", &patch));
        assert_eq!(rows[0]["isActive"], false);
    }

    #[test]
    fn test_rejected_toggle_yields_no_patch() {
        let service = RecordingService::rejecting("Banner not found");
        let result = block_on(toggle_active(&service, &summer()));
        assert!(matches!(result, Err(AdminError::Mutation(_))));
    }
}
