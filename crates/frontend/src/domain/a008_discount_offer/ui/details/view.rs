use super::view_model::DiscountOfferViewModel;
use crate::shared::components::product_picker::ProductPicker;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a003_product::Product;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DiscountOfferDetails(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = DiscountOfferViewModel::new();
    let on_toggle = Callback::new(move |product: Product| vm.toggle_product(product));
    let calculated = vm.calculated();

    view! {
        <PageFrame page_id="a008_discount_offer--detail" category=PAGE_CAT_DETAIL>
            <div class="details-container discount-offer-details">
                <div class="details-header">
                    <h3>{"New percentage offer"}</h3>
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
                        <label for="percentage">{"Offer percentage (%)"}</label>
                        <input
                            type="number"
                            id="percentage"
                            min="0"
                            max="100"
                            step="0.01"
                            prop:value=move || vm.form.with(|f| f.percentage.clone())
                            on:input=move |ev| vm.form.update(|f| f.percentage = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="details-form discount-calculator">
                    <h4>{"Discount calculator"}</h4>
                    <Flex>
                        <Label>"Current price"</Label>
                        <Input value=vm.current_price placeholder="Current price" />
                        <Label>"Wanted price"</Label>
                        <Input value=vm.target_price placeholder="Wanted price" />
                    </Flex>
                    <div class="discount-calculator__result">
                        {move || match calculated.get() {
                            Some(percentage) => format!("{}% off", percentage),
                            None => "Enter both prices".to_string(),
                        }}
                    </div>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.use_calculated()
                        disabled=Signal::derive(move || calculated.get().is_none())
                    >
                        "Use this percentage"
                    </Button>
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
