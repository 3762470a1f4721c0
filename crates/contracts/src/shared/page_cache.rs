//! Local edits of an already loaded page of rows.
//!
//! Rows are kept as raw JSON so the same helpers serve every entity table.
//! Callers apply them only after the server confirmed the mutation.

use serde_json::Value;

/// Record identifier: `_id`, falling back to `id`. Numeric ids are stringified.
pub fn record_id(record: &Value) -> Option<String> {
    ["_id", "id"].iter().find_map(|key| match record.get(*key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Merges the fields of `patch` into the row identified by `id`.
/// Returns `false` when no such row is on the page or `patch` is not an object.
pub fn apply_patch(rows: &mut [Value], id: &str, patch: &Value) -> bool {
    let Some(fields) = patch.as_object() else {
        return false;
    };
    let Some(row) = rows
        .iter_mut()
        .find(|row| record_id(row).as_deref() == Some(id))
    else {
        return false;
    };
    let Some(target) = row.as_object_mut() else {
        return false;
    };
    for (key, value) in fields {
        target.insert(key.clone(), value.clone());
    }
    true
}

/// Removes the row identified by `id`. Returns `true` when a row was removed.
pub fn remove_record(rows: &mut Vec<Value>, id: &str) -> bool {
    let before = rows.len();
    rows.retain(|row| record_id(row).as_deref() != Some(id));
    rows.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn banners() -> Vec<Value> {
        vec![
            json!({"_id": "b1", "title": "Summer", "isActive": true}),
            json!({"_id": "b2", "title": "Winter", "isActive": false}),
        ]
    }

    #[test]
    fn test_record_id_fallbacks() {
        assert_eq!(record_id(&json!({"_id": "x", "id": "y"})), Some("x".into()));
        assert_eq!(record_id(&json!({"id": 42})), Some("42".into()));
        assert_eq!(record_id(&json!({"_id": ""})), None);
        assert_eq!(record_id(&json!({"name": "n"})), None);
    }

    #[test]
    fn test_apply_patch_touches_only_target_row() {
        let mut rows = banners();
        assert!(apply_patch(&mut rows, "b2", &json!({"isActive": true})));
        assert_eq!(rows[1]["isActive"], true);
        assert_eq!(rows[1]["title"], "Winter");
        assert_eq!(rows[0], banners()[0]);
    }

    #[test]
    fn test_apply_patch_unknown_row() {
        let mut rows = banners();
        assert!(!apply_patch(&mut rows, "nope", &json!({"isActive": true})));
        assert!(!apply_patch(&mut rows, "b1", &json!(true)));
        assert_eq!(rows, banners());
    }

    #[test]
    fn test_remove_record() {
        let mut rows = banners();
        assert!(remove_record(&mut rows, "b1"));
        assert_eq!(rows.len(), 1);
        assert!(!remove_record(&mut rows, "b1"));
    }
}
