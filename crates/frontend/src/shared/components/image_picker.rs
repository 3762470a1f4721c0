use leptos::prelude::*;
use web_sys::{File, HtmlInputElement, Url};

/// File input with local previews. Picked files stay in the browser until
/// the form is submitted.
#[component]
pub fn ImagePicker(
    /// Picked files
    files: RwSignal<Vec<File>, LocalStorage>,
    #[prop(optional)] multiple: bool,
    /// Stored image URLs, shown while nothing new is picked
    #[prop(optional, into)]
    existing: Signal<Vec<String>>,
    #[prop(optional)] label: &'static str,
) -> impl IntoView {
    let previews = RwSignal::new(Vec::<String>::new());

    let revoke = move || {
        previews.with_untracked(|urls| {
            for url in urls {
                let _ = Url::revoke_object_url(url);
            }
        });
    };

    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let picked: Vec<File> = input
            .files()
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();
        revoke();
        previews.set(
            picked
                .iter()
                .filter_map(|file| Url::create_object_url_with_blob(file).ok())
                .collect(),
        );
        files.set(picked);
    };

    // Form reset clears the files; drop the stale previews with them.
    Effect::new(move |_| {
        if files.with(|f| f.is_empty()) && !previews.with_untracked(|p| p.is_empty()) {
            revoke();
            previews.set(Vec::new());
        }
    });

    on_cleanup(revoke);

    let shown = move || {
        let picked = previews.get();
        if picked.is_empty() {
            existing.get()
        } else {
            picked
        }
    };

    view! {
        <div class="image-picker">
            {(!label.is_empty()).then(|| view! { <label>{label}</label> })}
            <input type="file" accept="image/*" multiple=multiple on:change=on_change />
            <div class="image-picker__previews">
                {move || {
                    shown()
                        .into_iter()
                        .map(|src| view! { <img class="image-picker__preview" src=src alt="" /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
