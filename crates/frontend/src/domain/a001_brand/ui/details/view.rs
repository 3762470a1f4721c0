use super::view_model::BrandDetailsViewModel;
use crate::shared::components::image_picker::ImagePicker;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use leptos::prelude::*;

#[component]
pub fn BrandDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = BrandDetailsViewModel::new(id);
    let is_edit_mode = vm.is_edit_mode();
    let is_form_valid = vm.is_form_valid();

    view! {
        <PageFrame page_id="a001_brand--detail" category=PAGE_CAT_DETAIL>
            <div class="details-container brand-details">
                <div class="details-header">
                    <h3>{move || if is_edit_mode() { "Edit brand" } else { "New brand" }}</h3>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label for="name">{"Name"}</label>
                        <input
                            type="text"
                            id="name"
                            prop:value=move || vm.form.with(|f| f.name.clone())
                            on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                            placeholder="Brand name"
                        />
                    </div>

                    <div class="form-group">
                        <label for="description">{"Description"}</label>
                        <textarea
                            id="description"
                            prop:value=move || vm.form.with(|f| f.description.clone())
                            on:input=move |ev| {
                                vm.form.update(|f| f.description = event_target_value(&ev))
                            }
                            rows="3"
                        />
                    </div>

                    <div class="form-group">
                        <label for="website_url">{"Website URL"}</label>
                        <input
                            type="url"
                            id="website_url"
                            prop:value=move || vm.form.with(|f| f.website_url.clone())
                            on:input=move |ev| {
                                vm.form.update(|f| f.website_url = event_target_value(&ev))
                            }
                            placeholder="https://"
                        />
                    </div>

                    <div class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            id="is_featured"
                            prop:checked=move || vm.form.with(|f| f.is_featured)
                            on:change=move |ev| {
                                vm.form.update(|f| f.is_featured = event_target_checked(&ev))
                            }
                        />
                        <label for="is_featured">{"Featured"}</label>
                    </div>

                    <div class="form-group">
                        <ImagePicker files=vm.logo existing=vm.current_logo() label="Logo" />
                    </div>
                </div>

                <div class="details-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| vm.save_command(on_saved)
                        disabled=move || !is_form_valid() || vm.saving.get()
                    >
                        {icon("save")}
                        {move || match (vm.saving.get(), is_edit_mode()) {
                            (true, _) => "Saving...",
                            (false, true) => "Save",
                            (false, false) => "Create",
                        }}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                        {icon("x")}
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </PageFrame>
    }
}
