use super::model;
use crate::shared::api::{use_entity_service, use_options, HttpEntityService};
use crate::shared::config::PRODUCT_OPTIONS_LIMIT;
use contracts::domain::a003_product::Product;
use contracts::domain::a009_free_gift_offer::FreeGiftDto;
use contracts::shared::entity_registry::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct FreeGiftViewModel {
    pub form: RwSignal<FreeGiftDto>,
    pub products: RwSignal<Vec<Product>>,
    pub products_error: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    service: StoredValue<HttpEntityService>,
}

impl FreeGiftViewModel {
    pub fn new() -> Self {
        let (products, products_error) =
            use_options::<Product>(EntityKind::Product, PRODUCT_OPTIONS_LIMIT);
        Self {
            form: RwSignal::new(FreeGiftDto::default()),
            products,
            products_error,
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            service: StoredValue::new(use_entity_service()),
        }
    }

    /// Only one gift product: a new pick replaces the previous one.
    pub fn pick_product(&self, product: Product) {
        self.form.update(|f| f.product = Some(product.id));
    }

    pub fn selected_ids(&self) -> Signal<Vec<String>> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.product.iter().cloned().collect()))
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(e) = current.to_payload() {
            self.error.set(Some(e));
            return;
        }

        let service = self.service.get_value();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = model::create(&service, &current).await;
            saving.try_set(false);
            match result {
                Ok(message) => {
                    log::info!("{}", message);
                    on_saved.run(());
                }
                Err(e) => {
                    error.try_set(Some(e.to_string()));
                }
            }
        });
    }
}
