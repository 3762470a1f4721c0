use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::use_config;
use crate::system::auth::context::{do_login, use_auth};

/// Admin sign-in. A confirmed login swaps this page for the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginRequest::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let (_, set_auth_state) = use_auth();
    let config = StoredValue::new(use_config());

    let can_submit = move || !busy.get() && form.with(|f| f.validate().is_ok());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = form.get_untracked();
        let config = config.get_value();
        busy.set(true);
        error.set(None);

        spawn_local(async move {
            if let Err(e) = do_login(&config, request, set_auth_state).await {
                log::warn!("login failed: {}", e);
                error.try_set(Some(e.to_string()));
            }
            busy.try_set(false);
        });
    };

    view! {
        <div class="login-container">
            <form class="login-box" on:submit=submit>
                <h1>"Shop Admin"</h1>
                <p class="login-box__hint">"Sign in with the store administrator account."</p>

                {move || error.get().map(|msg| view! { <div class="error-message">{msg}</div> })}

                <label class="form-group">
                    <span>"Email"</span>
                    <input
                        type="email"
                        autocomplete="username"
                        placeholder="admin@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>

                <label class="form-group">
                    <span>"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>

                <button type="submit" class="btn-primary" disabled=move || !can_submit()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
