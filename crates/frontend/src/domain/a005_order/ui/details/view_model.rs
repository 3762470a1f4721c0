use super::model;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, details_key, entity_label};
use crate::shared::api::{use_entity_service, HttpEntityService};
use contracts::domain::a005_order::{Order, OrderStatusPatch};
use contracts::shared::entity_registry::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    pub order: RwSignal<Option<Order>>,
    pub error: RwSignal<Option<String>>,
    pub busy: RwSignal<bool>,
    service: StoredValue<HttpEntityService>,
    tabs_store: AppGlobalContext,
}

impl OrderDetailsViewModel {
    pub fn new(id: String) -> Self {
        let vm = Self {
            order: RwSignal::new(None),
            error: RwSignal::new(None),
            busy: RwSignal::new(false),
            service: StoredValue::new(use_entity_service()),
            tabs_store: leptos::context::use_context::<AppGlobalContext>()
                .expect("AppGlobalContext not found"),
        };
        vm.load(id);
        vm
    }

    fn load(&self, id: String) {
        let order = self.order;
        let error = self.error;
        let tabs_store = self.tabs_store;
        let service = self.service.get_value();
        spawn_local(async move {
            match model::fetch_by_id(&service, &id).await {
                Ok(loaded) => {
                    tabs_store.update_tab_title(
                        &details_key(EntityKind::Order, &id),
                        &detail_tab_label(&entity_label(EntityKind::Order), &loaded.customer_name),
                    );
                    order.try_set(Some(loaded));
                }
                Err(e) => {
                    log::error!("order {} failed to load: {}", id, e);
                    error.try_set(Some(e.to_string()));
                }
            }
        });
    }

    fn send_patch(&self, make_patch: fn(&Order) -> OrderStatusPatch) {
        let Some(current) = self.order.get_untracked() else {
            return;
        };
        let patch = make_patch(&current);
        let order = self.order;
        let error = self.error;
        let busy = self.busy;
        let tabs_store = self.tabs_store;
        let service = self.service.get_value();
        busy.set(true);
        error.set(None);
        spawn_local(async move {
            match model::update_status(&service, &current, patch).await {
                Ok(updated) => {
                    order.try_set(Some(updated));
                    tabs_store.mark_data_changed();
                }
                Err(e) => {
                    error.try_set(Some(e.to_string()));
                }
            }
            busy.try_set(false);
        });
    }

    pub fn toggle_confirmed_command(&self) {
        self.send_patch(Order::toggle_confirmed);
    }

    pub fn toggle_shipped_command(&self) {
        self.send_patch(Order::toggle_shipped);
    }

    pub fn delete_command(&self, on_deleted: Callback<()>) {
        let Some(id) = self.order.with_untracked(|o| o.as_ref().map(|o| o.id.clone())) else {
            return;
        };
        if !window()
            .confirm_with_message("Are you sure you want to delete this order?")
            .unwrap_or(false)
        {
            return;
        }
        let error = self.error;
        let busy = self.busy;
        let service = self.service.get_value();
        busy.set(true);
        spawn_local(async move {
            match model::delete(&service, &id).await {
                Ok(message) => {
                    log::info!("{}", message);
                    on_deleted.run(());
                }
                Err(e) => {
                    error.try_set(Some(e.to_string()));
                    busy.try_set(false);
                }
            }
        });
    }
}
