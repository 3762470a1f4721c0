use super::view_model::ProductDetailsViewModel;
use crate::shared::components::image_picker::ImagePicker;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a003_product::Gender;
use leptos::prelude::*;

#[component]
pub fn ProductDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(id);
    let is_edit_mode = vm.is_edit_mode();
    let is_form_valid = vm.is_form_valid();

    view! {
        <PageFrame page_id="a003_product--detail" category=PAGE_CAT_DETAIL>
            <div class="details-container product-details">
                <div class="details-header">
                    <h3>{move || if is_edit_mode() { "Edit product" } else { "New product" }}</h3>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || vm.options_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label for="name">{"Name"}</label>
                        <input
                            type="text"
                            id="name"
                            prop:value=move || vm.form.with(|f| f.name.clone())
                            on:input=move |ev| vm.set_name(event_target_value(&ev))
                        />
                        <small class="form-hint">
                            {move || vm.form.with(|f| format!("Slug: {}", f.slug))}
                        </small>
                    </div>

                    <div class="form-group">
                        <label for="short_description">{"Short description"}</label>
                        <input
                            type="text"
                            id="short_description"
                            prop:value=move || vm.form.with(|f| f.short_description.clone())
                            on:input=move |ev| {
                                vm.form.update(|f| f.short_description = event_target_value(&ev))
                            }
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
                            rows="5"
                        />
                    </div>

                    <div class="form-group">
                        <label for="brand">{"Brand"}</label>
                        <select
                            id="brand"
                            prop:value=move || vm.form.with(|f| f.brand_id.clone())
                            on:change=move |ev| vm.form.update(|f| f.brand_id = event_target_value(&ev))
                        >
                            <option value="">{"Select a brand"}</option>
                            <For
                                each=move || vm.brands.get()
                                key=|brand| brand.id.clone()
                                children=move |brand| view! {
                                    <option value=brand.id.clone()>{brand.name.clone()}</option>
                                }
                            />
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="category">{"Category"}</label>
                        <select
                            id="category"
                            prop:value=move || vm.form.with(|f| f.category_id.clone())
                            on:change=move |ev| {
                                vm.form.update(|f| f.category_id = event_target_value(&ev))
                            }
                        >
                            <option value="">{"Select a category"}</option>
                            <For
                                each=move || vm.categories.get()
                                key=|category| category.id.clone()
                                children=move |category| view! {
                                    <option value=category.id.clone()>{category.name.clone()}</option>
                                }
                            />
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="price">{"Price (Tk)"}</label>
                        <input
                            type="number"
                            id="price"
                            min="0"
                            prop:value=move || vm.form.with(|f| f.price.clone())
                            on:input=move |ev| vm.form.update(|f| f.price = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="tags">{"Tags"}</label>
                        <input
                            type="text"
                            id="tags"
                            prop:value=move || vm.form.with(|f| f.tags.clone())
                            on:input=move |ev| vm.form.update(|f| f.tags = event_target_value(&ev))
                            placeholder="Comma separated"
                        />
                    </div>

                    <div class="form-group">
                        <label for="gender">{"Gender"}</label>
                        <select
                            id="gender"
                            prop:value=move || {
                                vm.form.with(|f| f.gender.map(|g| g.as_str()).unwrap_or_default())
                            }
                            on:change=move |ev| {
                                vm.form.update(|f| f.gender = Gender::parse(&event_target_value(&ev)))
                            }
                        >
                            <option value="">{"Unisex"}</option>
                            <option value="male">{"Male"}</option>
                            <option value="female">{"Female"}</option>
                        </select>
                    </div>

                    <div class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            id="in_stock"
                            prop:checked=move || vm.form.with(|f| f.in_stock)
                            on:change=move |ev| vm.form.update(|f| f.in_stock = event_target_checked(&ev))
                        />
                        <label for="in_stock">{"In stock"}</label>
                    </div>

                    <div class="form-group">
                        <ImagePicker
                            files=vm.images
                            multiple=true
                            existing=vm.stored_images()
                            label="Images"
                        />
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
