use super::view_model::OrderDetailsViewModel;
use crate::shared::components::entity_table::cell::PLACEHOLDER_IMAGE;
use crate::shared::components::ui::badge::FlagBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a005_order::Order;
use leptos::prelude::*;
use thaw::*;

fn image_or_placeholder(url: &str) -> String {
    if url.trim().is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        url.to_string()
    }
}

#[component]
fn OrderSummary(order: Order) -> impl IntoView {
    let created = order
        .created_at
        .as_deref()
        .map(format_datetime)
        .unwrap_or_default();
    let gift = order.earned_gift().cloned();

    view! {
        <div class="order-summary">
            <dl class="order-summary__fields">
                <dt>{"Customer"}</dt><dd>{order.customer_name.clone()}</dd>
                <dt>{"Phone"}</dt><dd>{order.customer_phone.clone()}</dd>
                <dt>{"Address"}</dt><dd>{order.customer_address.clone()}</dd>
                <dt>{"Payment"}</dt><dd>{order.payment_method.clone()}</dd>
                <dt>{"Placed"}</dt><dd>{created}</dd>
                <dt>{"Delivery charge"}</dt><dd>{format!("{} Tk", order.delivery_charge)}</dd>
                <dt>{"Total"}</dt><dd><strong>{format!("{} Tk", order.total_amount)}</strong></dd>
            </dl>

            <table class="order-summary__lines">
                <thead>
                    <tr>
                        <th></th>
                        <th>{"Product"}</th>
                        <th>{"Qty"}</th>
                        <th>{"Price (Tk)"}</th>
                    </tr>
                </thead>
                <tbody>
                    {order
                        .products
                        .iter()
                        .map(|line| view! {
                            <tr>
                                <td>
                                    <img class="table__thumb" src=image_or_placeholder(&line.image_url) alt="" />
                                </td>
                                <td>{line.name.clone()}</td>
                                <td>{line.quantity}</td>
                                <td>{line.price}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>

            {gift.map(|gift| view! {
                <div class="order-summary__gift">
                    {icon("gift")}
                    <img class="table__thumb" src=image_or_placeholder(&gift.image_url) alt="" />
                    <span>{format!("Free gift: {}", gift.name)}</span>
                </div>
            })}
        </div>
    }
}

#[component]
pub fn OrderDetails(id: String, on_deleted: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let vm = OrderDetailsViewModel::new(id);
    let is_confirmed = Signal::derive(move || vm.order.with(|o| o.as_ref().is_some_and(|o| o.is_confirmed)));
    let is_shipped = Signal::derive(move || vm.order.with(|o| o.as_ref().is_some_and(|o| o.is_shipped)));
    let idle = Signal::derive(move || vm.order.with(Option::is_none) || vm.busy.get());

    view! {
        <PageFrame page_id="a005_order--detail" category=PAGE_CAT_DETAIL>
            <div class="details-container order-details">
                <div class="details-header">
                    <h3>{"Order details"}</h3>
                    <FlagBadge on=is_confirmed on_label="Confirmed" off_label="Pending" />
                    <FlagBadge on=is_shipped on_label="Shipped" off_label="Not shipped" />
                </div>

                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                {move || match vm.order.get() {
                    Some(order) => view! { <OrderSummary order=order /> }.into_any(),
                    None => view! { <Flex justify=FlexJustify::Center><Spinner /></Flex> }.into_any(),
                }}

                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.toggle_confirmed_command()
                        disabled=idle
                    >
                        {move || if is_confirmed.get() { "Mark as pending" } else { "Confirm order" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.toggle_shipped_command()
                        disabled=idle
                    >
                        {move || if is_shipped.get() { "Mark as not shipped" } else { "Mark as shipped" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.delete_command(on_deleted)
                        disabled=idle
                    >
                        {icon("trash")}
                        "Delete order"
                    </Button>
                    <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        {icon("x")}
                        {"Close"}
                    </button>
                </div>
            </div>
        </PageFrame>
    }
}
