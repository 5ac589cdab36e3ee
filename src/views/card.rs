use crate::models::item::ClothingItem;
use crate::services::color_classifier::{classify, ColorCategory};

const UNTITLED: &str = "Untitled item";

/// One color label with its visual category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorChip {
    pub label: String,
    pub category: ColorCategory,
}

/// Display-ready form of a [`ClothingItem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub title: String,
    pub brand: Option<String>,
    pub kind: Option<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<ColorChip>,
    pub description: Option<String>,
}

impl ItemCard {
    pub fn from_item(item: &ClothingItem) -> Self {
        Self {
            title: item
                .name
                .clone()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| UNTITLED.to_string()),
            brand: item.brand.clone(),
            kind: item.kind.clone(),
            sizes: item.sizes.clone(),
            colors: item
                .colors
                .iter()
                .map(|label| ColorChip {
                    label: label.clone(),
                    category: classify(label),
                })
                .collect(),
            description: item.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_color_renders_like_list() {
        let scalar = ClothingItem::from_value(&json!({"name": "Tee", "colors": "Blue"}));
        let list = ClothingItem::from_value(&json!({"name": "Tee", "colors": ["Blue"]}));

        let a = ItemCard::from_item(&scalar);
        let b = ItemCard::from_item(&list);
        assert_eq!(a, b);
        assert_eq!(a.colors.len(), 1);
        assert_eq!(a.colors[0].category, ColorCategory::Blue);
    }

    #[test]
    fn test_untitled_fallback() {
        let card = ItemCard::from_item(&ClothingItem::default());
        assert_eq!(card.title, UNTITLED);
        assert!(card.colors.is_empty());
        assert!(card.sizes.is_empty());
    }

    #[test]
    fn test_each_color_classified_independently() {
        let item = ClothingItem::from_value(&json!({
            "colors": ["Navy", "grey", "Chartreuse", "Plaid"]
        }));
        let categories: Vec<_> = ItemCard::from_item(&item)
            .colors
            .into_iter()
            .map(|chip| chip.category)
            .collect();
        assert_eq!(
            categories,
            vec![
                ColorCategory::Navy,
                ColorCategory::Gray,
                ColorCategory::Unknown,
                ColorCategory::Plaid
            ]
        );
    }
}
