use contracts::domain::a003_product::Product;
use leptos::prelude::*;
use thaw::*;

/// Searchable product list with check marks. With `single` a new pick
/// replaces the previous one (the parent decides in `on_toggle`).
#[component]
pub fn ProductPicker(
    #[prop(into)] products: Signal<Vec<Product>>,
    /// Ids of the picked products, in pick order
    #[prop(into)]
    selected: Signal<Vec<String>>,
    on_toggle: Callback<Product>,
    #[prop(optional)] single: bool,
) -> impl IntoView {
    let search = RwSignal::new(String::new());

    let visible = move || {
        let needle = search.get().trim().to_lowercase();
        products.with(|all| {
            all.iter()
                .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="product-picker">
            <Input value=search placeholder="Search products..." />
            <div class="product-picker__list">
                <For
                    each=visible
                    key=|product| product.id.clone()
                    children=move |product| {
                        let id = product.id.clone();
                        let is_checked = move || selected.with(|ids| ids.contains(&id));
                        let label = format!("{} ({} tk)", product.name, product.price);
                        view! {
                            <label class="product-picker__item">
                                <input
                                    type=if single { "radio" } else { "checkbox" }
                                    prop:checked=is_checked
                                    on:change=move |_| on_toggle.run(product.clone())
                                />
                                <span>{label}</span>
                            </label>
                        }
                    }
                />
            </div>
        </div>
    }
}
