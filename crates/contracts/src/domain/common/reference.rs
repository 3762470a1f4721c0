use serde::{Deserialize, Deserializer, Serialize};

/// Foreign key as the API returns it: either populated (`{ "_id", "name" }`)
/// or a bare id string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    Populated {
        #[serde(rename = "_id")]
        id: String,
        #[serde(default)]
        name: String,
    },
    Id(String),
}

impl Reference {
    pub fn id(&self) -> &str {
        match self {
            Reference::Populated { id, .. } => id,
            Reference::Id(id) => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Reference::Populated { name, .. } if !name.is_empty() => Some(name),
            _ => None,
        }
    }
}

impl Default for Reference {
    fn default() -> Self {
        Reference::Id(String::new())
    }
}

/// Accepts `null`, a single value or an array. Some endpoints populate
/// `categoryIds` as one object instead of a list.
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::Many(items)) => items,
        Some(OneOrMany::One(item)) => vec![item],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "one_or_many")]
        refs: Vec<Reference>,
    }

    #[test]
    fn test_reference_shapes() {
        let populated: Reference =
            serde_json::from_str(r#"{"_id":"c1","name":"Shoes"}"#).unwrap();
        assert_eq!(populated.id(), "c1");
        assert_eq!(populated.name(), Some("Shoes"));

        let bare: Reference = serde_json::from_str(r#""c2""#).unwrap();
        assert_eq!(bare.id(), "c2");
        assert_eq!(bare.name(), None);
    }

    #[test]
    fn test_one_or_many() {
        let one: Holder = serde_json::from_str(r#"{"refs":{"_id":"c1","name":"A"}}"#).unwrap();
        assert_eq!(one.refs.len(), 1);
        let many: Holder = serde_json::from_str(r#"{"refs":["c1","c2"]}"#).unwrap();
        assert_eq!(many.refs.len(), 2);
        let null: Holder = serde_json::from_str(r#"{"refs":null}"#).unwrap();
        assert!(null.refs.is_empty());
        let missing: Holder = serde_json::from_str("{}").unwrap();
        assert!(missing.refs.is_empty());
    }
}
