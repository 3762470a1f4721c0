use super::view_model::CategoryDetailsViewModel;
use crate::shared::components::image_picker::ImagePicker;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use leptos::prelude::*;

#[component]
pub fn CategoryDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new(id);
    let is_edit_mode = vm.is_edit_mode();
    let is_form_valid = vm.is_form_valid();

    view! {
        <PageFrame page_id="a002_category--detail" category=PAGE_CAT_DETAIL>
            <div class="details-container category-details">
                <div class="details-header">
                    <h3>{move || if is_edit_mode() { "Edit category" } else { "New category" }}</h3>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label for="name">{"Name"}</label>
                        <input
                            type="text"
                            id="name"
                            prop:value=move || vm.form.with(|f| f.name.clone())
                            on:input=move |ev| vm.set_name(event_target_value(&ev))
                            placeholder="Category name"
                        />
                    </div>

                    <div class="form-group">
                        <label for="slug">{"Slug"}</label>
                        <input
                            type="text"
                            id="slug"
                            prop:value=move || vm.form.with(|f| f.slug.clone())
                            readonly=true
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
                        <ImagePicker files=vm.image existing=vm.current_image() label="Image" />
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
