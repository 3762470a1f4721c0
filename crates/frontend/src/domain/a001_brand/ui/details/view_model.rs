use super::model;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, details_key, entity_label};
use crate::shared::api::{use_entity_service, HttpEntityService};
use crate::shared::upload::{use_image_host, ImgbbHost};
use contracts::domain::a001_brand::BrandDto;
use contracts::shared::entity_registry::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

/// ViewModel for the brand create/edit form
#[derive(Clone, Copy)]
pub struct BrandDetailsViewModel {
    pub form: RwSignal<BrandDto>,
    pub logo: RwSignal<Vec<File>, LocalStorage>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    service: StoredValue<HttpEntityService>,
    host: StoredValue<ImgbbHost>,
}

impl BrandDetailsViewModel {
    pub fn new(id: Option<String>) -> Self {
        let vm = Self {
            form: RwSignal::new(BrandDto::default()),
            logo: RwSignal::new_local(Vec::new()),
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

    /// Existing logo, shown until a new file is picked
    pub fn current_logo(&self) -> Signal<Vec<String>> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| {
                Some(f.logo_url.clone())
                    .filter(|url| !url.is_empty())
                    .into_iter()
                    .collect()
            })
        })
    }

    fn load(&self, id: String) {
        let form = self.form;
        let error = self.error;
        let service = self.service.get_value();
        let tabs_store = leptos::context::use_context::<AppGlobalContext>();
        spawn_local(async move {
            match model::fetch_by_id(&service, &id).await {
                Ok(brand) => {
                    if let Some(tabs_store) = tabs_store {
                        tabs_store.update_tab_title(
                            &details_key(EntityKind::Brand, &id),
                            &detail_tab_label(&entity_label(EntityKind::Brand), &brand.name),
                        );
                    }
                    form.try_set(BrandDto::from(&brand));
                }
                Err(e) => {
                    log::error!("brand {} failed to load: {}", id, e);
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

        let logo = self.logo.with_untracked(|files| files.first().cloned());
        let service = self.service.get_value();
        let host = self.host.get_value();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = model::save_form(&service, &host, &current, logo.as_ref()).await;
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
