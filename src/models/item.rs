use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::shape::{as_text, text_list};

/// A single clothing record returned by the search API.
///
/// Every field is optional. `sizes` and `colors` are always stored as lists;
/// a scalar on the wire is treated as a one-element list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClothingItem {
    pub id: Option<String>,
    pub name: Option<String>,
    /// `type` on the wire.
    pub kind: Option<String>,
    pub brand: Option<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub description: Option<String>,
}

impl ClothingItem {
    /// Build an item from arbitrary JSON. Never fails: fields with the wrong
    /// shape are dropped, and a non-object value yields an empty item.
    pub fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };

        let text = |key: &str| fields.get(key).and_then(as_text);

        Self {
            id: text("id"),
            name: text("name"),
            kind: text("type"),
            brand: text("brand"),
            sizes: text_list(fields.get("sizes")),
            colors: text_list(fields.get("colors")),
            description: text("description"),
        }
    }
}

impl<'de> Deserialize<'de> for ClothingItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record() {
        let item = ClothingItem::from_value(&json!({
            "id": 7,
            "name": "Oxford Shirt",
            "type": "Shirt",
            "brand": "Acme",
            "sizes": ["S", "M", "L"],
            "colors": ["White", "Blue"],
            "description": "Button-down collar"
        }));
        assert_eq!(item.id.as_deref(), Some("7"));
        assert_eq!(item.kind.as_deref(), Some("Shirt"));
        assert_eq!(item.sizes, vec!["S", "M", "L"]);
        assert_eq!(item.colors, vec!["White", "Blue"]);
    }

    #[test]
    fn test_scalar_lists() {
        let item = ClothingItem::from_value(&json!({"sizes": "One Size", "colors": "Blue"}));
        assert_eq!(item.sizes, vec!["One Size"]);
        assert_eq!(item.colors, vec!["Blue"]);
    }

    #[test]
    fn test_missing_and_malformed_fields() {
        let item = ClothingItem::from_value(&json!({"name": {"en": "Hat"}, "colors": null}));
        assert_eq!(item, ClothingItem::default());
    }

    #[test]
    fn test_non_object_item() {
        assert_eq!(ClothingItem::from_value(&json!("jacket")), ClothingItem::default());
        assert_eq!(ClothingItem::from_value(&json!(null)), ClothingItem::default());
    }

    #[test]
    fn test_deserialize_is_lenient() {
        let items: Vec<ClothingItem> =
            serde_json::from_str(r#"[{"name": "Scarf", "sizes": 3}, 12]"#).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].sizes, vec!["3"]);
        assert_eq!(items[1], ClothingItem::default());
    }
}
