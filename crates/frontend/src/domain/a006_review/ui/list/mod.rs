use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{new_key, tab_label_for_key};
use crate::shared::api::{decode_record, use_entity_service, EntityService};
use crate::shared::components::entity_table::cell::PLACEHOLDER_IMAGE;
use crate::shared::components::ui::badge::FlagBadge;
use crate::shared::config::OPTIONS_LIMIT;
use crate::shared::date_utils::format_long_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::request_seq::RequestSeq;
use contracts::domain::a006_review::Review;
use contracts::shared::entity_registry::EntityKind;
use contracts::shared::page_cache::remove_record;
use contracts::shared::pagination::PageRequest;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ReviewList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let service = StoredValue::new(use_entity_service());
    let rows = RwSignal::new(Vec::<Value>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let deleting = RwSignal::new(None::<String>);

    let requests = StoredValue::new(RequestSeq::default());

    let load = move || {
        let service = service.get_value();
        let Some(ticket) = requests.try_update_value(|r| r.begin()) else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            let result = service
                .fetch_page(EntityKind::Review, PageRequest::first(OPTIONS_LIMIT))
                .await;
            if requests.try_with_value(|r| r.is_current(ticket)) != Some(true) {
                log!("review list response {} superseded", ticket);
                return;
            }
            match result {
                Ok(page) => {
                    log!("💬 reviews loaded: {}", page.result.len());
                    rows.try_set(page.result);
                    set_error.try_set(None);
                }
                Err(e) => {
                    log::error!("review list failed: {}", e);
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

    let delete = move |id: String| {
        if !window()
            .confirm_with_message("Are you sure you want to delete this review?")
            .unwrap_or(false)
        {
            return;
        }
        deleting.set(Some(id.clone()));
        set_error.set(None);
        let service = service.get_value();
        spawn_local(async move {
            match service.delete(EntityKind::Review, &id).await {
                Ok(_) => {
                    log!("🗑️ review {} deleted", id);
                    rows.try_update(|rows| remove_record(rows, &id));
                }
                Err(e) => {
                    log::error!("review {} delete failed: {}", id, e);
                    set_error.try_set(Some(e.to_string()));
                }
            }
            deleting.try_set(None);
        });
    };

    let reviews = move || {
        rows.get()
            .into_iter()
            .filter_map(|row| decode_record::<Review>(row).ok())
            .collect::<Vec<_>>()
    };

    let create_tab = new_key(EntityKind::Review);

    view! {
        <PageFrame page_id="a006_review--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{"Customer Reviews"}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| tabs_store.open_tab(create_tab, tab_label_for_key(create_tab))
                    >
                        {icon("plus")}
                        "Add review"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
                <Show when=move || loading.get()>
                    <Flex justify=FlexJustify::Center><Spinner /></Flex>
                </Show>

                <div class="review-grid">
                    <For
                        each=reviews
                        key=|review| review.id.clone()
                        children=move |review| {
                            let id = review.id.clone();
                            let busy_id = id.clone();
                            let is_busy = move || deleting.get().as_deref() == Some(busy_id.as_str());
                            let avatar = if review.profile_image_url.trim().is_empty() {
                                PLACEHOLDER_IMAGE.to_string()
                            } else {
                                review.profile_image_url.clone()
                            };
                            let visible = review.is_visible;
                            view! {
                                <div class="review-card">
                                    <div class="review-card__head">
                                        <img class="review-card__avatar" src=avatar alt="" />
                                        <div>
                                            <div class="review-card__name">{review.customer_name.clone()}</div>
                                            <div class="review-card__date">{format_long_date(&review.review_date)}</div>
                                        </div>
                                        <FlagBadge
                                            on=Signal::derive(move || visible)
                                            on_label="Visible"
                                            off_label="Hidden"
                                        />
                                    </div>
                                    <p class="review-card__message">{review.message.clone()}</p>
                                    <button
                                        class="button button--icon button--danger"
                                        title="Delete"
                                        disabled=is_busy
                                        on:click=move |_| delete(id.clone())
                                    >
                                        {icon("trash")}
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>

                <Show when=move || !loading.get() && error.get().is_none() && rows.with(|r| r.is_empty())>
                    <div class="entity-table__empty">"No reviews yet"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
