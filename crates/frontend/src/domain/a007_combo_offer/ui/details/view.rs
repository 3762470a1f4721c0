use super::view_model::ComboBuilderViewModel;
use crate::shared::components::image_picker::ImagePicker;
use crate::shared::components::product_picker::ProductPicker;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a003_product::Product;
use leptos::prelude::*;

#[component]
pub fn ComboBuilder(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = ComboBuilderViewModel::new();
    let is_form_valid = vm.is_form_valid();
    let on_toggle = Callback::new(move |product: Product| vm.toggle_product(product));

    view! {
        <PageFrame page_id="a007_combo_offer--detail" category=PAGE_CAT_DETAIL>
            <div class="details-container combo-builder">
                <div class="details-header">
                    <h3>{"New combo offer"}</h3>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || vm.products_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label>{"Products"}</label>
                        <ProductPicker
                            products=vm.products
                            selected=vm.selected_ids()
                            on_toggle=on_toggle
                        />
                    </div>

                    <div class="form-group">
                        <label for="combo_name">{"Name"}</label>
                        <input
                            type="text"
                            id="combo_name"
                            readonly=true
                            prop:value=move || vm.draft.with(|d| d.derived().name.clone())
                        />
                        <small class="form-hint">
                            {move || vm.draft.with(|d| format!("Slug: {}", d.submission_slug()))}
                        </small>
                    </div>

                    <div class="form-group">
                        <label for="combo_description">{"Description"}</label>
                        <textarea
                            id="combo_description"
                            readonly=true
                            rows="4"
                            prop:value=move || vm.draft.with(|d| d.derived().description.clone())
                        />
                    </div>

                    <div class="form-group">
                        <label for="short_description">{"Short description"}</label>
                        <input
                            type="text"
                            id="short_description"
                            prop:value=move || vm.draft.with(|d| d.overrides.short_description.clone())
                            on:input=move |ev| {
                                vm.draft.update(|d| d.overrides.short_description = event_target_value(&ev))
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Price (Tk)"}</label>
                        <div class="form-value">{move || vm.draft.with(|d| d.derived().price)}</div>
                    </div>

                    <div class="form-group">
                        <label for="discount_price">{"Discount price (Tk)"}</label>
                        <input
                            type="number"
                            id="discount_price"
                            min="0"
                            prop:value=move || vm.discount_input.get()
                            on:input=move |ev| vm.set_discount(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            id="in_stock"
                            prop:checked=move || vm.draft.with(|d| d.overrides.in_stock)
                            on:change=move |ev| {
                                vm.draft.update(|d| d.overrides.in_stock = event_target_checked(&ev))
                            }
                        />
                        <label for="in_stock">{"In stock"}</label>
                    </div>

                    <div class="form-group">
                        <ImagePicker files=vm.images multiple=true label="Images" />
                    </div>
                </div>

                <div class="details-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| vm.submit_command(on_saved)
                        disabled=move || !is_form_valid() || vm.saving.get()
                    >
                        {icon("save")}
                        {move || if vm.saving.get() { "Uploading..." } else { "Create combo" }}
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
