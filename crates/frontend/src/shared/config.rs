//! Build-time configuration of the dashboard.
//!
//! Values come from the environment of the `trunk build` that produced the
//! wasm bundle:
//! - `ADMIN_API_BASE`       REST API root, e.g. `https://shop.example.com/api`
//! - `ADMIN_IMGBB_API_KEY`  key of the image hosting account
//! - `ADMIN_ACCESS_TOKEN`   value the auth gate compares the stored token with

use leptos::prelude::*;

/// Max records requested to fill brand/category selects.
pub const OPTIONS_LIMIT: usize = 1000;
/// Max records requested to fill product pickers.
pub const PRODUCT_OPTIONS_LIMIT: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub imgbb_api_key: Option<String>,
    pub access_token: Option<String>,
}

/// `/api` on port 8000 of the host that served the bundle.
fn same_host_api_base() -> String {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return "/api".to_string();
    };
    let scheme = location.protocol().unwrap_or_else(|_| "http:".into());
    match location.hostname() {
        Ok(host) if !host.is_empty() => format!("{scheme}//{host}:8000/api"),
        _ => "/api".to_string(),
    }
}

fn non_empty(value: Option<&'static str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_base: non_empty(option_env!("ADMIN_API_BASE"))
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(same_host_api_base),
            imgbb_api_key: non_empty(option_env!("ADMIN_IMGBB_API_KEY")),
            access_token: non_empty(option_env!("ADMIN_ACCESS_TOKEN")),
        };
        if config.imgbb_api_key.is_none() {
            log::warn!("ADMIN_IMGBB_API_KEY is not set, image uploads will fail");
        }
        if config.access_token.is_none() {
            log::warn!("ADMIN_ACCESS_TOKEN is not set, nobody can log in");
        }
        config
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not provided")
}
