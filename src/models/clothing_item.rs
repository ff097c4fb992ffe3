use serde::{Serialize, Serializer};
use std::fmt::Display;

/// Garment category, normalized to lowercase at load time
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Top,
    Bottom,
    Dress,
    Outerwear,
    Shoes,
    /// Any category outside the known set, kept verbatim (already normalized)
    Other(String),
}

impl Category {
    /// Builds a category from a raw table value (trimmed and lowercased)
    pub fn normalize(raw: &str) -> Self {
        let value = raw.trim().to_lowercase();
        match value.as_str() {
            "top" => Category::Top,
            "bottom" => Category::Bottom,
            "dress" => Category::Dress,
            "outerwear" => Category::Outerwear,
            "shoes" => Category::Shoes,
            _ => Category::Other(value),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Dress => "dress",
            Category::Outerwear => "outerwear",
            Category::Shoes => "shoes",
            Category::Other(value) => value,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// How dressy a garment is: low < medium < high
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Formality {
    Low,
    #[default]
    Medium,
    High,
    /// A normalized value outside the three known levels.
    /// Only produced when the wardrobe is loaded permissively.
    Unrecognized(String),
}

impl Formality {
    pub fn as_str(&self) -> &str {
        match self {
            Formality::Low => "low",
            Formality::Medium => "medium",
            Formality::High => "high",
            Formality::Unrecognized(value) => value,
        }
    }
}

impl Display for Formality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Formality {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single garment from the wardrobe table
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClothingItem {
    /// Display name of the garment (e.g., "White linen shirt")
    pub name: String,
    /// Normalized category
    pub category: Category,
    /// Lowercased, trimmed color name; resolved through the color table
    pub color: String,
    /// Free-text style tag (e.g., "casual", "classic")
    pub style: String,
    /// Normalized formality level
    pub formality: Formality,
    /// Optional free-text notes
    pub notes: Option<String>,
}

impl ClothingItem {
    /// Creates an item with already-normalized fields and no notes
    pub fn new(
        name: impl Into<String>,
        category: Category,
        color: impl Into<String>,
        formality: Formality,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            color: color.into(),
            style: String::new(),
            formality,
            notes: None,
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_normalize_known() {
        assert_eq!(Category::normalize("  Top "), Category::Top);
        assert_eq!(Category::normalize("OUTERWEAR"), Category::Outerwear);
        assert_eq!(Category::normalize("dress"), Category::Dress);
    }

    #[test]
    fn test_category_normalize_unknown_is_preserved() {
        let category = Category::normalize(" Accessory ");
        assert_eq!(category, Category::Other("accessory".to_string()));
        assert_eq!(category.as_str(), "accessory");
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&Category::Shoes).unwrap();
        assert_eq!(json, "\"shoes\"");
    }

    #[test]
    fn test_formality_serialization() {
        assert_eq!(serde_json::to_string(&Formality::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&Formality::Unrecognized("very high".to_string())).unwrap(),
            "\"very high\""
        );
    }

    #[test]
    fn test_clothing_item_builder() {
        let item = ClothingItem::new("Navy chinos", Category::Bottom, "navy", Formality::Medium)
            .with_style("smart")
            .with_notes("slim fit");
        assert_eq!(item.style, "smart");
        assert_eq!(item.notes.as_deref(), Some("slim fit"));
    }
}
