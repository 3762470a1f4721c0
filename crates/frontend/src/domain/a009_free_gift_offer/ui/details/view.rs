use super::view_model::FreeGiftViewModel;
use crate::shared::components::product_picker::ProductPicker;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a003_product::Product;
use leptos::prelude::*;

#[component]
pub fn FreeGiftDetails(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = FreeGiftViewModel::new();
    let on_toggle = Callback::new(move |product: Product| vm.pick_product(product));

    view! {
        <PageFrame page_id="a009_free_gift_offer--detail" category=PAGE_CAT_DETAIL>
            <div class="details-container free-gift-details">
                <div class="details-header">
                    <h3>{"New free gift offer"}</h3>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || vm.products_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label>{"Gift product"}</label>
                        <ProductPicker
                            products=vm.products
                            selected=vm.selected_ids()
                            on_toggle=on_toggle
                            single=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="buy_above">{"Shopping amount (Tk)"}</label>
                        <input
                            type="number"
                            id="buy_above"
                            min="0"
                            prop:value=move || vm.form.with(|f| f.buy_above.clone())
                            on:input=move |ev| vm.form.update(|f| f.buy_above = event_target_value(&ev))
                            placeholder="Orders above this amount get the gift"
                        />
                    </div>
                </div>

                <div class="details-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| vm.save_command(on_saved)
                        disabled=move || vm.saving.get()
                    >
                        {icon("save")}
                        {move || if vm.saving.get() { "Saving..." } else { "Create offer" }}
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
