use super::model;
use crate::shared::api::{use_entity_service, HttpEntityService};
use crate::shared::upload::{use_image_host, ImgbbHost};
use contracts::domain::a004_banner::{BannerDto, BannerType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct BannerDetailsViewModel {
    pub form: RwSignal<BannerDto>,
    pub image: RwSignal<Vec<File>, LocalStorage>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    service: StoredValue<HttpEntityService>,
    host: StoredValue<ImgbbHost>,
}

impl BannerDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(BannerDto::default()),
            image: RwSignal::new_local(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            service: StoredValue::new(use_entity_service()),
            host: StoredValue::new(use_image_host()),
        }
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + Copy + 'static {
        let form = self.form;
        let image = self.image;
        move || form.with(|f| f.validate().is_ok()) && image.with(|files| !files.is_empty())
    }

    pub fn is_offer(&self) -> impl Fn() -> bool + Copy + 'static {
        let form = self.form;
        move || form.with(|f| f.banner_type == BannerType::Offer)
    }

    /// Switching the type clears the asset chosen for the other type.
    pub fn set_type(&self, value: &str) {
        if let Some(banner_type) = BannerType::parse(value) {
            self.form.update(|f| f.set_type(banner_type));
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(e) = current.validate() {
            self.error.set(Some(e));
            return;
        }

        let image = self.image.with_untracked(|files| files.first().cloned());
        let service = self.service.get_value();
        let host = self.host.get_value();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = model::create(&service, &host, &current, image.as_ref()).await;
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
