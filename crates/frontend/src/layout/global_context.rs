use leptos::logging::log;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::tabs::tab_label_for_key;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    /// Bumped after any confirmed create/update/delete; lists re-fetch on change.
    pub data_revision: RwSignal<u64>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Tab key found in the `?active=` query string.
pub fn active_key_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|k| !k.is_empty()).cloned()
}

/// Query string selecting `key` as the active tab.
pub fn active_query(key: &str) -> String {
    let params = HashMap::from([("active", key)]);
    format!("?{}", serde_qs::to_string(&params).unwrap_or_default())
}

/// Removes `key` from `tabs` and returns the tab to activate next when the
/// closed one was active (the last remaining tab).
pub fn close_in(tabs: &mut Vec<Tab>, active: Option<&str>, key: &str) -> Option<Option<String>> {
    tabs.retain(|tab| tab.key != key);
    if active == Some(key) {
        Some(tabs.last().map(|t| t.key.clone()))
    } else {
        None
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            data_revision: RwSignal::new(0),
        }
    }

    /// Restores the tab named by `?active=` and keeps the query string
    /// following the active tab from then on.
    pub fn sync_with_url(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(key) = active_key_from_query(&search) {
            let label = tab_label_for_key(&key);
            let title = if label.is_empty() { key.as_str() } else { label };
            self.open_tab(&key, title);
        }

        let active = self.active;
        Effect::new(move |_| {
            let Some(key) = active.get() else { return };
            let target = active_query(&key);
            let Some(w) = window() else { return };
            if w.location().search().ok().as_deref() == Some(target.as_str()) {
                return;
            }
            if let Ok(history) = w.history() {
                if history
                    .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&target))
                    .is_err()
                {
                    log::warn!("could not write {} to the address bar", target);
                }
            }
        });
    }

    /// Opens `key` unless already open, then brings it to the front.
    pub fn open_tab(&self, key: &str, title: &str) {
        let added = self.opened.try_update(|tabs| {
            if tabs.iter().any(|tab| tab.key == key) {
                return false;
            }
            tabs.push(Tab {
                key: key.to_string(),
                title: title.to_string(),
            });
            true
        });
        if added == Some(true) {
            log!("📑 tab opened: {} ({})", key, title);
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        let active = self.active.get_untracked();
        let next = self
            .opened
            .try_update(|tabs| close_in(tabs, active.as_deref(), key))
            .flatten();
        log!("📕 tab closed: {}", key);
        if let Some(next) = next {
            self.active.set(next);
        }
    }

    /// Closes `key` and brings `list_key` to the front, e.g. after a record
    /// was deleted from its own detail tab.
    pub fn close_and_open(&self, key: &str, list_key: &str) {
        self.close_tab(key);
        let label = tab_label_for_key(list_key);
        self.open_tab(list_key, label);
    }

    pub fn mark_data_changed(&self) {
        self.data_revision.update(|rev| *rev += 1);
    }

    /// Closes a form tab after a successful save and shows its list.
    pub fn finish_form(&self, key: &str, list_key: &str) {
        self.mark_data_changed();
        self.close_and_open(key, list_key);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(keys: &[&str]) -> Vec<Tab> {
        keys.iter()
            .map(|k| Tab {
                key: k.to_string(),
                title: k.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_active_key_from_query() {
        assert_eq!(
            active_key_from_query("?active=a001_brand"),
            Some("a001_brand".to_string())
        );
        assert_eq!(active_key_from_query(""), None);
        assert_eq!(active_key_from_query("?active="), None);
    }

    #[test]
    fn test_active_query_round_trips_detail_keys() {
        let query = active_query("a001_brand_details_b1");
        assert_eq!(query, "?active=a001_brand_details_b1");
        assert_eq!(
            active_key_from_query(&query).as_deref(),
            Some("a001_brand_details_b1")
        );
    }

    #[test]
    fn test_closing_active_tab_activates_last() {
        let mut opened = tabs(&["a", "b", "c"]);
        assert_eq!(
            close_in(&mut opened, Some("b"), "b"),
            Some(Some("c".to_string()))
        );
        assert_eq!(opened.len(), 2);
    }

    #[test]
    fn test_closing_inactive_tab_keeps_active() {
        let mut opened = tabs(&["a", "b"]);
        assert_eq!(close_in(&mut opened, Some("a"), "b"), None);
        let mut single = tabs(&["a"]);
        assert_eq!(close_in(&mut single, Some("a"), "a"), Some(None));
    }
}
