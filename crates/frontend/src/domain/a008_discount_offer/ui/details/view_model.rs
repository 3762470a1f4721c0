use super::model;
use crate::shared::api::{use_entity_service, use_options, HttpEntityService};
use crate::shared::config::PRODUCT_OPTIONS_LIMIT;
use contracts::domain::a003_product::Product;
use contracts::domain::a008_discount_offer::{discount_percentage, DiscountOfferDto};
use contracts::shared::entity_registry::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct DiscountOfferViewModel {
    pub form: RwSignal<DiscountOfferDto>,
    pub products: RwSignal<Vec<Product>>,
    pub products_error: RwSignal<Option<String>>,
    /// Calculator inputs: current and wanted price
    pub current_price: RwSignal<String>,
    pub target_price: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    service: StoredValue<HttpEntityService>,
}

impl DiscountOfferViewModel {
    pub fn new() -> Self {
        let (products, products_error) =
            use_options::<Product>(EntityKind::Product, PRODUCT_OPTIONS_LIMIT);
        Self {
            form: RwSignal::new(DiscountOfferDto::default()),
            products,
            products_error,
            current_price: RwSignal::new(String::new()),
            target_price: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            service: StoredValue::new(use_entity_service()),
        }
    }

    pub fn toggle_product(&self, product: Product) {
        self.form.update(|f| f.toggle_product(&product.id));
    }

    pub fn selected_ids(&self) -> Signal<Vec<String>> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.products.clone()))
    }

    /// Percentage that turns the current price into the target price.
    pub fn calculated(&self) -> Signal<Option<f64>> {
        let current = self.current_price;
        let target = self.target_price;
        Signal::derive(move || {
            let current = current.with(|raw| raw.trim().parse::<f64>().ok())?;
            let target = target.with(|raw| raw.trim().parse::<f64>().ok())?;
            discount_percentage(current, target)
        })
    }

    pub fn use_calculated(&self) {
        if let Some(percentage) = self.calculated().get_untracked() {
            self.form.update(|f| f.percentage = percentage.to_string());
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(e) = current.validate() {
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
