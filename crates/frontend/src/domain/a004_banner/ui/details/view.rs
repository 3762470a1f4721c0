use super::view_model::BannerDetailsViewModel;
use crate::shared::components::image_picker::ImagePicker;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a004_banner::BannerAsset;
use leptos::prelude::*;

#[component]
pub fn BannerDetails(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = BannerDetailsViewModel::new();
    let is_form_valid = vm.is_form_valid();
    let is_offer = vm.is_offer();

    view! {
        <PageFrame page_id="a004_banner--detail" category=PAGE_CAT_DETAIL>
            <div class="details-container banner-details">
                <div class="details-header">
                    <h3>{"New banner"}</h3>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label for="title">{"Title"}</label>
                        <input
                            type="text"
                            id="title"
                            prop:value=move || vm.form.with(|f| f.title.clone())
                            on:input=move |ev| vm.form.update(|f| f.title = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="banner_type">{"Type"}</label>
                        <select
                            id="banner_type"
                            prop:value=move || vm.form.with(|f| f.banner_type.as_str())
                            on:change=move |ev| vm.set_type(&event_target_value(&ev))
                        >
                            <option value="page">{"Page"}</option>
                            <option value="offer">{"Offer"}</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="asset">{move || if is_offer() { "Offer" } else { "Page path" }}</label>
                        <Show
                            when=is_offer
                            fallback=move || view! {
                                <input
                                    type="text"
                                    id="asset"
                                    prop:value=move || vm.form.with(|f| f.asset.clone())
                                    on:input=move |ev| vm.form.update(|f| f.asset = event_target_value(&ev))
                                    placeholder="/products"
                                />
                            }
                        >
                            <select
                                id="asset"
                                prop:value=move || vm.form.with(|f| f.asset.clone())
                                on:change=move |ev| vm.form.update(|f| f.asset = event_target_value(&ev))
                            >
                                <option value="">{"Select an offer"}</option>
                                {BannerAsset::ALL
                                    .iter()
                                    .map(|asset| view! {
                                        <option value=asset.as_str()>{asset.label()}</option>
                                    })
                                    .collect_view()}
                            </select>
                        </Show>
                    </div>

                    <div class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            id="is_active"
                            prop:checked=move || vm.form.with(|f| f.is_active)
                            on:change=move |ev| vm.form.update(|f| f.is_active = event_target_checked(&ev))
                        />
                        <label for="is_active">{"Active"}</label>
                    </div>

                    <div class="form-group">
                        <ImagePicker files=vm.image label="Banner image" />
                    </div>
                </div>

                <div class="details-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| vm.save_command(on_saved)
                        disabled=move || !is_form_valid() || vm.saving.get()
                    >
                        {icon("save")}
                        {move || if vm.saving.get() { "Saving..." } else { "Create" }}
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
