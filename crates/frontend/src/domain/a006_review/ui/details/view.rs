use super::view_model::ReviewDetailsViewModel;
use crate::shared::components::image_picker::ImagePicker;
use crate::shared::date_utils::to_input_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use leptos::prelude::*;

#[component]
pub fn ReviewDetails(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = ReviewDetailsViewModel::new();
    let is_form_valid = vm.is_form_valid();

    view! {
        <PageFrame page_id="a006_review--detail" category=PAGE_CAT_DETAIL>
            <div class="details-container review-details">
                <div class="details-header">
                    <h3>{"New review"}</h3>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label for="customer_name">{"Customer name"}</label>
                        <input
                            type="text"
                            id="customer_name"
                            prop:value=move || vm.form.with(|f| f.customer_name.clone())
                            on:input=move |ev| {
                                vm.form.update(|f| f.customer_name = event_target_value(&ev))
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="review_date">{"Review date"}</label>
                        <input
                            type="date"
                            id="review_date"
                            prop:value=move || vm.form.with(|f| to_input_date(&f.review_date))
                            on:input=move |ev| {
                                vm.form.update(|f| f.review_date = event_target_value(&ev))
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="message">{"Message"}</label>
                        <textarea
                            id="message"
                            prop:value=move || vm.form.with(|f| f.message.clone())
                            on:input=move |ev| vm.form.update(|f| f.message = event_target_value(&ev))
                            rows="4"
                        />
                    </div>

                    <div class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            id="is_visible"
                            prop:checked=move || vm.form.with(|f| f.is_visible)
                            on:change=move |ev| vm.form.update(|f| f.is_visible = event_target_checked(&ev))
                        />
                        <label for="is_visible">{"Visible on site"}</label>
                    </div>

                    <div class="form-group">
                        <ImagePicker files=vm.avatar label="Profile image" />
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
