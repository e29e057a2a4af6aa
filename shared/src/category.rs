use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// Expense category offered by the form.
///
/// The wire key is the Vietnamese label the bot matches on; it is what ends up
/// in the submitted payload and in the hidden `category` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    FoodAndDrink,
    Transport,
    Shopping,
    Entertainment,
    Education,
    Health,
    Housing,
    Other,
}

impl Category {
    /// Every category, in chip rendering order
    pub const ALL: [Category; 8] = [
        Category::FoodAndDrink,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Education,
        Category::Health,
        Category::Housing,
        Category::Other,
    ];

    /// Label sent to the bot
    pub fn key(&self) -> &'static str {
        match self {
            Category::FoodAndDrink => "Ăn uống",
            Category::Transport => "Xăng xe",
            Category::Shopping => "Mua sắm",
            Category::Entertainment => "Giải trí",
            Category::Education => "Giáo dục",
            Category::Health => "Sức khỏe",
            Category::Housing => "Nhà cửa",
            Category::Other => "Khác",
        }
    }

    /// English name shown under the chip
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::FoodAndDrink => "Food & Drink",
            Category::Transport => "Fuel & Transport",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Education => "Education",
            Category::Health => "Health",
            Category::Housing => "Housing",
            Category::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::FoodAndDrink => "🍜",
            Category::Transport => "⛽",
            Category::Shopping => "🛍️",
            Category::Entertainment => "🎬",
            Category::Education => "📚",
            Category::Health => "💊",
            Category::Housing => "🏠",
            Category::Other => "📦",
        }
    }

    /// Exact lookup by wire key. No trimming, no case folding.
    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|category| category.key() == key)
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::FoodAndDrink
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_key(s).ok_or_else(|| FormError::UnknownCategory(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = FormError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.key().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_food_and_drink() {
        assert_eq!(Category::default(), Category::FoodAndDrink);
        assert_eq!(Category::default().key(), "Ăn uống");
        assert_eq!(Category::default().display_name(), "Food & Drink");
    }

    #[test]
    fn test_keys_are_unique_and_resolve_back() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
            let same_key = Category::ALL
                .iter()
                .filter(|other| other.key() == category.key())
                .count();
            assert_eq!(same_key, 1, "duplicate key {}", category.key());
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(Category::from_key("Ăn"), None);
        assert_eq!(Category::from_key(" Khác"), None);
        assert_eq!(Category::from_key("khác"), None);
        assert_eq!(Category::from_key("Khác"), Some(Category::Other));
    }

    #[test]
    fn test_from_str_reports_unknown_label() {
        let err = "Food".parse::<Category>().unwrap_err();
        assert_eq!(err, FormError::UnknownCategory("Food".to_string()));
    }

    #[test]
    fn test_serializes_as_wire_key() {
        let json = serde_json::to_string(&Category::Transport).unwrap();
        assert_eq!(json, "\"Xăng xe\"");

        let parsed: Category = serde_json::from_str("\"Sức khỏe\"").unwrap();
        assert_eq!(parsed, Category::Health);

        assert!(serde_json::from_str::<Category>("\"Pets\"").is_err());
    }
}
