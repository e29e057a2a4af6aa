use shared::FormConfig;

use crate::services::logging::Logger;

/// Query parameter carrying a JSON `FormConfig` override
const CONFIG_PARAM: &str = "config";

/// Reads the form configuration from the page URL, falling back to defaults.
pub fn load_form_config() -> FormConfig {
    match config_param() {
        Some(raw) => parse_override(&raw),
        None => FormConfig::default(),
    }
}

fn config_param() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(CONFIG_PARAM)
}

fn parse_override(raw: &str) -> FormConfig {
    match FormConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            Logger::warn_with_component("FormConfig", &format!("ignoring invalid config override: {}", e));
            FormConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Category;

    #[test]
    fn test_valid_override_is_applied() {
        let config = parse_override(r#"{"default_category":"Giải trí","quick_amounts":[5000]}"#);
        assert_eq!(config.default_category, Category::Entertainment);
        assert_eq!(config.quick_amounts, vec![5000]);
        assert_eq!(config.missing_amount_message, FormConfig::default().missing_amount_message);
    }
}
