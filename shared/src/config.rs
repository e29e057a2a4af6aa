use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Fallback colors applied when the host does not provide a theme value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeDefaults {
    pub bg_color: String,
    pub text_color: String,
    pub button_color: String,
    pub button_text_color: String,
}

impl Default for ThemeDefaults {
    fn default() -> Self {
        Self {
            bg_color: "#ffffff".to_string(),
            text_color: "#000000".to_string(),
            button_color: "#3390ec".to_string(),
            button_text_color: "#ffffff".to_string(),
        }
    }
}

/// Configuration for the expense entry form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Category selected when the form loads
    pub default_category: Category,
    /// Quick-add chip values, in display order
    pub quick_amounts: Vec<i64>,
    /// Alert text shown when submitting without an amount
    pub missing_amount_message: String,
    /// Alert text shown when the amount does not fit in a u64
    pub amount_too_large_message: String,
    pub theme_defaults: ThemeDefaults,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_category: Category::FoodAndDrink,
            quick_amounts: vec![10_000, 20_000, 50_000, 100_000, 200_000, 500_000],
            missing_amount_message: "Vui lòng nhập số tiền!".to_string(),
            amount_too_large_message: "Số tiền quá lớn!".to_string(),
            theme_defaults: ThemeDefaults::default(),
        }
    }
}

impl FormConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FormConfig::default();
        assert_eq!(config.default_category, Category::FoodAndDrink);
        assert_eq!(config.missing_amount_message, "Vui lòng nhập số tiền!");
        assert_eq!(config.amount_too_large_message, "Số tiền quá lớn!");
        assert_eq!(config.quick_amounts[0], 10_000);
        assert_eq!(config.theme_defaults.button_color, "#3390ec");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = FormConfig::from_json(
            r##"{"default_category":"Khác","theme_defaults":{"bg_color":"#101010"}}"##,
        )
        .unwrap();
        assert_eq!(config.default_category, Category::Other);
        assert_eq!(config.theme_defaults.bg_color, "#101010");
        assert_eq!(config.theme_defaults.text_color, "#000000");
        assert_eq!(config.quick_amounts, FormConfig::default().quick_amounts);
    }

    #[test]
    fn test_override_rejects_unknown_category() {
        assert!(FormConfig::from_json(r#"{"default_category":"Pets"}"#).is_err());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(FormConfig::from_json("{}").unwrap(), FormConfig::default());
    }
}
