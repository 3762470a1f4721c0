use super::model;
use crate::shared::api::{use_entity_service, use_options, HttpEntityService};
use crate::shared::config::PRODUCT_OPTIONS_LIMIT;
use crate::shared::upload::{use_image_host, ImgbbHost};
use contracts::domain::a003_product::Product;
use contracts::domain::a007_combo_offer::{ComboDraft, ComboMember};
use contracts::shared::entity_registry::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct ComboBuilderViewModel {
    pub draft: RwSignal<ComboDraft>,
    /// Raw text of the discount price input
    pub discount_input: RwSignal<String>,
    pub images: RwSignal<Vec<File>, LocalStorage>,
    pub products: RwSignal<Vec<Product>>,
    pub products_error: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    service: StoredValue<HttpEntityService>,
    host: StoredValue<ImgbbHost>,
}

impl ComboBuilderViewModel {
    pub fn new() -> Self {
        let (products, products_error) =
            use_options::<Product>(EntityKind::Product, PRODUCT_OPTIONS_LIMIT);
        Self {
            draft: RwSignal::new(ComboDraft::new()),
            discount_input: RwSignal::new(String::new()),
            images: RwSignal::new_local(Vec::new()),
            products,
            products_error,
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            service: StoredValue::new(use_entity_service()),
            host: StoredValue::new(use_image_host()),
        }
    }

    /// Selection change handler. Derived fields are recomputed here, in the
    /// same update as the selection itself.
    pub fn toggle_product(&self, product: Product) {
        self.draft
            .update(|draft| draft.toggle_member(ComboMember::from(&product)));
    }

    pub fn selected_ids(&self) -> Signal<Vec<String>> {
        let draft = self.draft;
        Signal::derive(move || {
            draft.with(|d| d.selection().iter().map(|m| m.id.clone()).collect())
        })
    }

    pub fn set_discount(&self, raw: String) {
        let parsed = raw.trim().parse::<f64>().ok();
        self.discount_input.set(raw);
        if let Some(price) = parsed {
            self.draft.update(|d| d.overrides.discount_price = price);
        }
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + Copy + 'static {
        let draft = self.draft;
        let discount_input = self.discount_input;
        let images = self.images;
        move || {
            draft.with(|d| d.validate().is_ok())
                && discount_input.with(|raw| raw.trim().parse::<f64>().is_ok())
                && images.with(|files| !files.is_empty())
        }
    }

    pub fn submit_command(&self, on_saved: Callback<()>) {
        if self
            .discount_input
            .with_untracked(|raw| raw.trim().parse::<f64>().is_err())
        {
            self.error.set(Some("Enter the discount price".to_string()));
            return;
        }
        let draft = self.draft.get_untracked();
        if let Err(e) = draft.validate() {
            self.error.set(Some(e));
            return;
        }

        let files = self.images.get_untracked();
        let service = self.service.get_value();
        let host = self.host.get_value();
        let vm = *self;
        vm.saving.set(true);
        vm.error.set(None);
        spawn_local(async move {
            let result = model::submit_combo(&service, &host, &draft, &files).await;
            vm.saving.try_set(false);
            match result {
                Ok(message) => {
                    log::info!("{}", message);
                    vm.draft.try_update(ComboDraft::reset);
                    vm.discount_input.try_set(String::new());
                    vm.images.try_set(Vec::new());
                    on_saved.run(());
                }
                Err(e) => {
                    log::warn!("combo submit failed: {}", e);
                    vm.error.try_set(Some(e.to_string()));
                }
            }
        });
    }
}
