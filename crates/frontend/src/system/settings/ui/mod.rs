use super::api;
use crate::shared::api::use_entity_service;
use crate::shared::components::image_picker::ImagePicker;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::upload::use_image_host;
use contracts::system::settings::GeneralSettings;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::File;

/// Text field bound to one string of the settings document.
#[component]
fn SettingsField(
    id: &'static str,
    label: &'static str,
    form: RwSignal<GeneralSettings>,
    read: fn(&GeneralSettings) -> String,
    write: fn(&mut GeneralSettings, String),
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let input = if multiline {
        view! {
            <textarea
                id=id
                rows="4"
                prop:value=move || form.with(read)
                on:input=move |ev| form.update(|f| write(f, event_target_value(&ev)))
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                id=id
                prop:value=move || form.with(read)
                on:input=move |ev| form.update(|f| write(f, event_target_value(&ev)))
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            {input}
        </div>
    }
}

#[component]
pub fn GeneralSettingsPage() -> impl IntoView {
    let service = StoredValue::new(use_entity_service());
    let host = StoredValue::new(use_image_host());
    let form = RwSignal::new(GeneralSettings::default());
    let logo = RwSignal::<Vec<File>, LocalStorage>::new_local(Vec::new());
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (message, set_message) = signal::<Option<String>>(None);

    let load = move || {
        let service = service.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_settings(&service).await {
                Ok(settings) => {
                    form.try_set(settings);
                }
                Err(e) => {
                    log::error!("general settings failed to load: {}", e);
                    set_error.try_set(Some(e.to_string()));
                }
            }
            set_loading.try_set(false);
        });
    };
    load();

    let save = move |_: leptos::ev::MouseEvent| {
        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            set_error.set(Some(e));
            return;
        }
        let picked = logo.with_untracked(|files| files.first().cloned());
        let service = service.get_value();
        let host = host.get_value();
        set_saving.set(true);
        set_error.set(None);
        set_message.set(None);
        spawn_local(async move {
            match api::save_settings(&service, &host, &current, picked.as_ref()).await {
                Ok(msg) => {
                    logo.try_set(Vec::new());
                    set_message.try_set(Some(msg));
                    load();
                }
                Err(e) => {
                    set_error.try_set(Some(e.to_string()));
                }
            }
            set_saving.try_set(false);
        });
    };

    let current_logo = Signal::derive(move || {
        form.with(|f| {
            Some(f.logo_url.clone())
                .filter(|url| !url.is_empty())
                .into_iter()
                .collect()
        })
    });

    view! {
        <PageFrame page_id="sys_general_settings--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{"General settings"}</h1>
                </div>
            </div>

            <div class="page__content">
                {move || message.get().map(|msg| view! { <div class="alert alert--success">{msg}</div> })}
                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <Flex justify=FlexJustify::Center><Spinner /></Flex> }
                >
                    <div class="details-form">
                        <SettingsField
                            id="site_name"
                            label="Site name"
                            form=form
                            read=|f| f.site_name.clone()
                            write=|f, v| f.site_name = v
                        />
                        <div class="form-group">
                            <ImagePicker files=logo existing=current_logo label="Logo" />
                        </div>
                        <SettingsField
                            id="contact_email"
                            label="Contact email"
                            form=form
                            read=|f| f.contact_email.clone()
                            write=|f, v| f.contact_email = v
                        />
                        <SettingsField
                            id="phone"
                            label="Phone"
                            form=form
                            read=|f| f.phone.clone()
                            write=|f, v| f.phone = v
                        />
                        <SettingsField
                            id="address"
                            label="Address"
                            form=form
                            read=|f| f.address.clone()
                            write=|f, v| f.address = v
                        />
                        <SettingsField
                            id="about_us"
                            label="About us"
                            form=form
                            read=|f| f.about_us.clone()
                            write=|f, v| f.about_us = v
                            multiline=true
                        />
                        <SettingsField
                            id="facebook"
                            label="Facebook"
                            form=form
                            read=|f| f.social_links.facebook.clone()
                            write=|f, v| f.social_links.facebook = v
                        />
                        <SettingsField
                            id="instagram"
                            label="Instagram"
                            form=form
                            read=|f| f.social_links.instagram.clone()
                            write=|f, v| f.social_links.instagram = v
                        />
                    </div>

                    <div class="details-actions">
                        <button
                            class="btn btn-primary"
                            on:click=save
                            disabled=move || saving.get()
                        >
                            {icon("save")}
                            {move || if saving.get() { "Saving..." } else { "Save settings" }}
                        </button>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
