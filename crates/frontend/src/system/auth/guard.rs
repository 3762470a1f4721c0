use leptos::prelude::*;

use super::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Dashboard for a restored or freshly opened session, login form otherwise.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    // Token refreshes keep the same value of the gate and do not remount the dashboard.
    let signed_in = Memo::new(move |_| auth_state.with(|s| s.is_authenticated()));

    view! {
        <Show when=move || signed_in.get() fallback=|| view! { <LoginPage /> }>
            {children()}
        </Show>
    }
}
