use contracts::system::auth::LoginRequest;
use leptos::prelude::*;

use super::{api, storage};
use crate::shared::config::{use_config, AppConfig};
use crate::shared::error::AdminError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Session token sent as bearer on API calls; `None` shows the login form.
    pub token: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Session restored from a stored token. Only a token equal to the
/// configured one opens the dashboard.
pub fn restore_session(stored: Option<String>, expected: Option<&str>) -> AuthState {
    match (stored, expected) {
        (Some(stored), Some(expected)) if !expected.is_empty() && stored == expected => AuthState {
            token: Some(stored),
        },
        _ => AuthState::default(),
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let config = use_config();
    let restored = restore_session(storage::load_token(), config.access_token.as_deref());
    if !restored.is_authenticated() {
        storage::forget_token();
    }
    let (auth_state, set_auth_state) = signal(restored);

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login
pub async fn do_login(
    config: &AppConfig,
    request: LoginRequest,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), AdminError> {
    request.validate().map_err(AdminError::Validation)?;
    let token = config
        .access_token
        .clone()
        .ok_or_else(|| AdminError::validation("Access token is not configured"))?;

    api::login(config, &request).await?;

    storage::store_token(&token);
    set_auth_state.try_set(AuthState { token: Some(token) });
    log::info!("🔓 logged in as {}", request.email);
    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::forget_token();
    set_auth_state.set(AuthState::default());
    log::info!("🔒 logged out");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_session() {
        assert!(restore_session(Some("abc".into()), Some("abc")).is_authenticated());
        assert!(!restore_session(Some("abc".into()), Some("xyz")).is_authenticated());
        assert!(!restore_session(None, Some("abc")).is_authenticated());
        assert!(!restore_session(Some("abc".into()), None).is_authenticated());
        assert!(!restore_session(Some(String::new()), Some("")).is_authenticated());
    }
}
