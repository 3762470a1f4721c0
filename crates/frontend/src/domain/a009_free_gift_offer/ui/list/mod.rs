use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{new_key, tab_label_for_key};
use crate::shared::api::{use_entity_service, EntityService, HttpEntityService};
use crate::shared::components::entity_table::cell::PLACEHOLDER_IMAGE;
use crate::shared::error::AdminError;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::request_seq::RequestSeq;
use contracts::domain::a009_free_gift_offer::FreeGiftOffer;
use contracts::shared::entity_registry::EntityKind;
use contracts::system::settings::{GeneralSettings, GENERAL_GET_PATH};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// The active offer lives inside the general settings document.
async fn load_offer(service: &HttpEntityService) -> Result<Option<FreeGiftOffer>, AdminError> {
    let settings: GeneralSettings = service.get(GENERAL_GET_PATH).await?;
    Ok(settings.free_gift.filter(|gift| gift.active_product().is_some()))
}

#[component]
#[allow(non_snake_case)]
pub fn FreeGiftView() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let service = StoredValue::new(use_entity_service());
    let offer = RwSignal::new(None::<FreeGiftOffer>);
    let (loading, set_loading) = signal(false);
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let requests = StoredValue::new(RequestSeq::default());

    let load = move || {
        let service = service.get_value();
        let Some(ticket) = requests.try_update_value(|r| r.begin()) else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            let result = load_offer(&service).await;
            if requests.try_with_value(|r| r.is_current(ticket)) != Some(true) {
                return;
            }
            match result {
                Ok(current) => {
                    offer.try_set(current);
                    set_error.try_set(None);
                }
                Err(e) => {
                    log::error!("free gift failed to load: {}", e);
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

    let delete = move |_: leptos::ev::MouseEvent| {
        if !window()
            .confirm_with_message("Are you sure you want to delete this free gift offer?")
            .unwrap_or(false)
        {
            return;
        }
        let service = service.get_value();
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match service.delete(EntityKind::FreeGiftOffer, "").await {
                Ok(_) => {
                    log!("🗑️ free gift offer deleted");
                    offer.try_set(None);
                }
                Err(e) => {
                    set_error.try_set(Some(e.to_string()));
                }
            }
            set_busy.try_set(false);
        });
    };

    let create_tab = new_key(EntityKind::FreeGiftOffer);

    let card = move || {
        offer.get().and_then(|gift| {
            let product = gift.active_product()?.clone();
            let image = product
                .images
                .first()
                .cloned()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
            Some(view! {
                <div class="gift-card">
                    <img class="gift-card__image" src=image alt="" />
                    <div class="gift-card__body">
                        <h3>{product.name}</h3>
                        <p>{format!("Free with every order above {} Tk", gift.buy_above)}</p>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=delete
                            disabled=Signal::derive(move || busy.get())
                        >
                            {icon("trash")}
                            "Delete offer"
                        </Button>
                    </div>
                </div>
            })
        })
    };

    view! {
        <PageFrame page_id="a009_free_gift_offer--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{"Free gift"}</h1>
                </div>
                <div class="page__header-right">
                    <Show when=move || offer.with(Option::is_none)>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| tabs_store.open_tab(create_tab, tab_label_for_key(create_tab))
                        >
                            {icon("plus")}
                            "Create free gift offer"
                        </Button>
                    </Show>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <Flex justify=FlexJustify::Center><Spinner /></Flex> }
                >
                    {move || match card() {
                        Some(card) => card.into_any(),
                        None => view! {
                            <div class="entity-table__empty">"No free gift offer is running"</div>
                        }
                        .into_any(),
                    }}
                </Show>
            </div>
        </PageFrame>
    }
}
