use super::model;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, details_key, entity_label};
use crate::shared::api::{use_entity_service, use_options, HttpEntityService};
use crate::shared::config::OPTIONS_LIMIT;
use crate::shared::upload::{use_image_host, ImgbbHost};
use contracts::domain::a001_brand::Brand;
use contracts::domain::a002_category::Category;
use contracts::domain::a003_product::ProductDto;
use contracts::shared::entity_registry::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductDto>,
    pub images: RwSignal<Vec<File>, LocalStorage>,
    pub brands: RwSignal<Vec<Brand>>,
    pub categories: RwSignal<Vec<Category>>,
    pub options_error: Signal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    service: StoredValue<HttpEntityService>,
    host: StoredValue<ImgbbHost>,
}

impl ProductDetailsViewModel {
    pub fn new(id: Option<String>) -> Self {
        let (brands, brands_error) = use_options::<Brand>(EntityKind::Brand, OPTIONS_LIMIT);
        let (categories, categories_error) =
            use_options::<Category>(EntityKind::Category, OPTIONS_LIMIT);
        let vm = Self {
            form: RwSignal::new(ProductDto::default()),
            images: RwSignal::new_local(Vec::new()),
            brands,
            categories,
            options_error: Signal::derive(move || {
                brands_error.get().or_else(|| categories_error.get())
            }),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            service: StoredValue::new(use_entity_service()),
            host: StoredValue::new(use_image_host()),
        };
        if let Some(id) = id {
            vm.load(id);
        }
        vm
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + Copy + 'static {
        let form = self.form;
        move || form.with(|f| f.id.is_some())
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + Copy + 'static {
        let form = self.form;
        move || form.with(|f| f.validate().is_ok())
    }

    pub fn set_name(&self, name: String) {
        self.form.update(|f| f.set_name(name));
    }

    pub fn stored_images(&self) -> Signal<Vec<String>> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.images.clone()))
    }

    fn load(&self, id: String) {
        let form = self.form;
        let error = self.error;
        let service = self.service.get_value();
        let tabs_store = leptos::context::use_context::<AppGlobalContext>();
        spawn_local(async move {
            match model::fetch_by_id(&service, &id).await {
                Ok(product) => {
                    if let Some(tabs_store) = tabs_store {
                        tabs_store.update_tab_title(
                            &details_key(EntityKind::Product, &id),
                            &detail_tab_label(&entity_label(EntityKind::Product), &product.name),
                        );
                    }
                    form.try_set(ProductDto::from(&product));
                }
                Err(e) => {
                    log::error!("product {} failed to load: {}", id, e);
                    error.try_set(Some(e.to_string()));
                }
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(e) = current.validate() {
            self.error.set(Some(e));
            return;
        }

        let files = self.images.get_untracked();
        let service = self.service.get_value();
        let host = self.host.get_value();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = model::save_form(&service, &host, &current, &files).await;
            saving.try_set(false);
            match result {
                Ok(message) => {
                    log::info!("{}", message);
                    on_saved.run(());
                }
                Err(e) => {
                    log::warn!("product save failed: {}", e);
                    error.try_set(Some(e.to_string()));
                }
            }
        });
    }
}
