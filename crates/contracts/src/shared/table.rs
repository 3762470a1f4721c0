//! Declarative description of an entity table and the pure cell dispatch.

use super::page_cache::record_id;
use serde_json::Value;
use std::collections::HashSet;

/// What a column renders. Decided once, when the table config is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    /// Thumbnail of a URL field; placeholder when the value is empty or falsy.
    Image { field: &'static str },
    /// Thumbnail of the first URL of an array field.
    FirstImage { field: &'static str },
    /// Two-state label of a boolean field.
    Badge {
        field: &'static str,
        on: &'static str,
        off: &'static str,
    },
    /// Edit + delete buttons bound to the row id.
    Action,
    /// Timestamp rendered as "M/D/YYYY at h:mm am".
    DateTime { field: &'static str },
    Text { field: &'static str },
}

impl ColumnKind {
    /// Maps a reserved selector string to its column kind. Precedence:
    /// `logoUrl`/`imageUrl`, `imagesArr`, `isFeatured`, `edit`,
    /// `updated`/`created`, then plain text of `record[selector]`.
    pub fn from_selector(selector: &'static str) -> Self {
        match selector {
            "logoUrl" | "imageUrl" => ColumnKind::Image { field: selector },
            "imagesArr" => ColumnKind::FirstImage { field: "images" },
            "isFeatured" => ColumnKind::Badge {
                field: "isFeatured",
                on: "On live",
                off: "Hidden",
            },
            "edit" => ColumnKind::Action,
            "updated" => ColumnKind::DateTime { field: "updatedAt" },
            "created" => ColumnKind::DateTime { field: "createdAt" },
            other => ColumnKind::Text { field: other },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub header: &'static str,
    pub kind: ColumnKind,
}

impl ColumnDescriptor {
    pub fn new(header: &'static str, kind: ColumnKind) -> Self {
        Self { header, kind }
    }

    pub fn selector(header: &'static str, selector: &'static str) -> Self {
        Self::new(header, ColumnKind::from_selector(selector))
    }
}

/// `Admin` tables are read-mostly and hide the create button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableMode {
    #[default]
    Vendor,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Entity name tag, resolved through the entity registry.
    pub entity: &'static str,
    pub title: &'static str,
    /// Tab key opened by the create button.
    pub create_tab: &'static str,
    pub columns: Vec<ColumnDescriptor>,
    pub mode: TableMode,
}

impl TableConfig {
    pub fn new(entity: &'static str, title: &'static str, create_tab: &'static str) -> Self {
        Self {
            entity,
            title,
            create_tab,
            columns: Vec::new(),
            mode: TableMode::default(),
        }
    }

    pub fn column(mut self, header: &'static str, kind: ColumnKind) -> Self {
        self.columns.push(ColumnDescriptor::new(header, kind));
        self
    }

    pub fn selector(mut self, header: &'static str, selector: &'static str) -> Self {
        self.columns.push(ColumnDescriptor::selector(header, selector));
        self
    }

    pub fn admin(mut self) -> Self {
        self.mode = TableMode::Admin;
        self
    }

    pub fn shows_create(&self) -> bool {
        self.mode != TableMode::Admin
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.columns.is_empty() {
            return Err(format!("table '{}' has no columns", self.title));
        }
        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.header) {
                return Err(format!(
                    "table '{}' has duplicate column header '{}'",
                    self.title, column.header
                ));
            }
        }
        Ok(())
    }
}

/// Resolved content of one cell, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    /// `None` means the placeholder image.
    Thumbnail { src: Option<String> },
    Badge { label: &'static str, on: bool },
    Actions { id: Option<String> },
    DateTime(String),
    Text(String),
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(_) => true,
    }
}

fn url_of(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Display text of an arbitrary JSON value. Populated references
/// (`{ "_id": .., "name": .. }`) show their name.
pub fn display_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| display_text(Some(item)))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::Object(map)) => match map.get("name") {
            Some(name) => display_text(Some(name)),
            None => String::new(),
        },
    }
}

/// Pure cell dispatch: same kind and record always give the same content.
pub fn resolve_cell(kind: &ColumnKind, record: &Value) -> CellContent {
    match kind {
        ColumnKind::Image { field } => CellContent::Thumbnail {
            src: url_of(record.get(*field)),
        },
        ColumnKind::FirstImage { field } => CellContent::Thumbnail {
            src: url_of(
                record
                    .get(*field)
                    .and_then(Value::as_array)
                    .and_then(|images| images.first()),
            ),
        },
        ColumnKind::Badge { field, on, off } => {
            let is_on = truthy(record.get(*field));
            CellContent::Badge {
                label: if is_on { on } else { off },
                on: is_on,
            }
        }
        ColumnKind::Action => CellContent::Actions {
            id: record_id(record),
        },
        ColumnKind::DateTime { field } => CellContent::DateTime(display_text(record.get(*field))),
        ColumnKind::Text { field } => CellContent::Text(display_text(record.get(*field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_selector_precedence() {
        assert_eq!(
            ColumnKind::from_selector("logoUrl"),
            ColumnKind::Image { field: "logoUrl" }
        );
        assert_eq!(
            ColumnKind::from_selector("imageUrl"),
            ColumnKind::Image { field: "imageUrl" }
        );
        assert_eq!(
            ColumnKind::from_selector("imagesArr"),
            ColumnKind::FirstImage { field: "images" }
        );
        assert!(matches!(
            ColumnKind::from_selector("isFeatured"),
            ColumnKind::Badge { on: "On live", off: "Hidden", .. }
        ));
        assert_eq!(ColumnKind::from_selector("edit"), ColumnKind::Action);
        assert_eq!(
            ColumnKind::from_selector("created"),
            ColumnKind::DateTime { field: "createdAt" }
        );
        assert_eq!(
            ColumnKind::from_selector("price"),
            ColumnKind::Text { field: "price" }
        );
    }

    #[test]
    fn test_image_cells_fall_back_to_placeholder() {
        let kind = ColumnKind::from_selector("logoUrl");
        assert_eq!(
            resolve_cell(&kind, &json!({"logoUrl": "https://i.ibb.co/a.png"})),
            CellContent::Thumbnail {
                src: Some("https://i.ibb.co/a.png".into())
            }
        );
        for record in [json!({"logoUrl": ""}), json!({"logoUrl": null}), json!({})] {
            assert_eq!(
                resolve_cell(&kind, &record),
                CellContent::Thumbnail { src: None }
            );
        }

        let first = ColumnKind::from_selector("imagesArr");
        assert_eq!(
            resolve_cell(&first, &json!({"images": ["a.png", "b.png"]})),
            CellContent::Thumbnail {
                src: Some("a.png".into())
            }
        );
        assert_eq!(
            resolve_cell(&first, &json!({"images": []})),
            CellContent::Thumbnail { src: None }
        );
    }

    #[test]
    fn test_badge_and_action_cells() {
        let badge = ColumnKind::from_selector("isFeatured");
        assert_eq!(
            resolve_cell(&badge, &json!({"isFeatured": true})),
            CellContent::Badge {
                label: "On live",
                on: true
            }
        );
        assert_eq!(
            resolve_cell(&badge, &json!({})),
            CellContent::Badge {
                label: "Hidden",
                on: false
            }
        );
        assert_eq!(
            resolve_cell(&ColumnKind::Action, &json!({"_id": "b1"})),
            CellContent::Actions {
                id: Some("b1".into())
            }
        );
    }

    #[test]
    fn test_text_cells() {
        let record = json!({
            "name": "Shoe",
            "price": 500,
            "brandId": {"_id": "b1", "name": "Acme"},
            "tags": ["a", "b"]
        });
        let text = |field| resolve_cell(&ColumnKind::Text { field }, &record);
        assert_eq!(text("name"), CellContent::Text("Shoe".into()));
        assert_eq!(text("price"), CellContent::Text("500".into()));
        assert_eq!(text("brandId"), CellContent::Text("Acme".into()));
        assert_eq!(text("tags"), CellContent::Text("a, b".into()));
        assert_eq!(text("missing"), CellContent::Text(String::new()));
    }

    #[test]
    fn test_dispatch_is_pure() {
        let record = json!({"_id": "x", "logoUrl": "l.png", "updatedAt": "2024-01-01T00:00:00Z"});
        for selector in ["logoUrl", "edit", "updated", "name"] {
            let kind = ColumnKind::from_selector(selector);
            assert_eq!(resolve_cell(&kind, &record), resolve_cell(&kind, &record));
        }
    }

    #[test]
    fn test_config_validation() {
        let config = TableConfig::new("brand", "Manage Brands", "a001_brand_details")
            .selector("Logo", "logoUrl")
            .selector("Name", "name")
            .selector("Edit", "edit");
        assert!(config.validate().is_ok());
        assert!(config.shows_create());

        let duplicate = config.clone().selector("Name", "description");
        assert!(duplicate.validate().is_err());

        let empty = TableConfig::new("brand", "Empty", "x");
        assert!(empty.validate().is_err());

        assert!(!config.admin().shows_create());
    }
}
