use super::model;
use crate::shared::api::{use_entity_service, HttpEntityService};
use crate::shared::upload::{use_image_host, ImgbbHost};
use contracts::domain::a006_review::ReviewDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct ReviewDetailsViewModel {
    pub form: RwSignal<ReviewDto>,
    pub avatar: RwSignal<Vec<File>, LocalStorage>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    service: StoredValue<HttpEntityService>,
    host: StoredValue<ImgbbHost>,
}

impl ReviewDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ReviewDto::default()),
            avatar: RwSignal::new_local(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            service: StoredValue::new(use_entity_service()),
            host: StoredValue::new(use_image_host()),
        }
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + Copy + 'static {
        let form = self.form;
        move || form.with(|f| f.validate().is_ok())
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(e) = current.validate() {
            self.error.set(Some(e));
            return;
        }

        let avatar = self.avatar.with_untracked(|files| files.first().cloned());
        let service = self.service.get_value();
        let host = self.host.get_value();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = model::create(&service, &host, &current, avatar.as_ref()).await;
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
