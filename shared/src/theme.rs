use serde::{Deserialize, Serialize};

use crate::bridge::{BridgeError, HostBridge};
use crate::config::ThemeDefaults;

/// Theme colors as reported by the host. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeParams {
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
    pub button_color: Option<String>,
    pub button_text_color: Option<String>,
}

/// CSS custom properties the page stylesheet reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariable {
    Background,
    Text,
    Button,
    ButtonText,
}

impl ThemeVariable {
    pub const ALL: [ThemeVariable; 4] = [
        ThemeVariable::Background,
        ThemeVariable::Text,
        ThemeVariable::Button,
        ThemeVariable::ButtonText,
    ];

    pub fn css_name(&self) -> &'static str {
        match self {
            ThemeVariable::Background => "--bg-color",
            ThemeVariable::Text => "--text-color",
            ThemeVariable::Button => "--button-color",
            ThemeVariable::ButtonText => "--button-text-color",
        }
    }
}

/// Destination for resolved theme variables, usually the root element's style
pub trait StyleSink {
    fn set_property(&self, name: &str, value: &str) -> Result<(), BridgeError>;
}

impl ThemeParams {
    fn host_value(&self, variable: ThemeVariable) -> Option<&str> {
        let value = match variable {
            ThemeVariable::Background => &self.bg_color,
            ThemeVariable::Text => &self.text_color,
            ThemeVariable::Button => &self.button_color,
            ThemeVariable::ButtonText => &self.button_text_color,
        };
        // Hosts send "" for colors they do not define
        value.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// Pairs every theme variable with the host color or its fallback
    pub fn resolve(&self, defaults: &ThemeDefaults) -> Vec<(ThemeVariable, String)> {
        ThemeVariable::ALL
            .into_iter()
            .map(|variable| {
                let fallback = match variable {
                    ThemeVariable::Background => &defaults.bg_color,
                    ThemeVariable::Text => &defaults.text_color,
                    ThemeVariable::Button => &defaults.button_color,
                    ThemeVariable::ButtonText => &defaults.button_text_color,
                };
                let color = self.host_value(variable).unwrap_or(fallback);
                (variable, color.to_string())
            })
            .collect()
    }
}

/// Reads the host theme and writes all four variables to `sink`.
///
/// Returns how many variables were written. A failed write is logged and the
/// remaining variables are still applied.
pub fn apply_theme<B, S>(bridge: &B, sink: &S, defaults: &ThemeDefaults) -> usize
where
    B: HostBridge + ?Sized,
    S: StyleSink + ?Sized,
{
    let params = bridge.theme_params();
    let mut applied = 0;
    for (variable, color) in params.resolve(defaults) {
        match sink.set_property(variable.css_name(), &color) {
            Ok(()) => {
                tracing::debug!(variable = variable.css_name(), %color, "theme variable applied");
                applied += 1;
            }
            Err(e) => {
                tracing::warn!(variable = variable.css_name(), error = %e, "theme variable skipped");
            }
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingBridge, RecordingSink};

    #[test]
    fn test_resolve_uses_defaults_when_host_is_silent() {
        let resolved = ThemeParams::default().resolve(&ThemeDefaults::default());
        assert_eq!(
            resolved,
            vec![
                (ThemeVariable::Background, "#ffffff".to_string()),
                (ThemeVariable::Text, "#000000".to_string()),
                (ThemeVariable::Button, "#3390ec".to_string()),
                (ThemeVariable::ButtonText, "#ffffff".to_string()),
            ]
        );
    }

    #[test]
    fn test_resolve_falls_back_per_field() {
        let params = ThemeParams {
            bg_color: Some("#17212b".to_string()),
            text_color: Some("".to_string()),
            button_color: None,
            button_text_color: Some("#f5f5f5".to_string()),
        };
        let resolved = params.resolve(&ThemeDefaults::default());
        assert_eq!(resolved[0].1, "#17212b");
        assert_eq!(resolved[1].1, "#000000");
        assert_eq!(resolved[2].1, "#3390ec");
        assert_eq!(resolved[3].1, "#f5f5f5");
    }

    #[test]
    fn test_params_deserialize_from_host_json() {
        let params: ThemeParams =
            serde_json::from_str(r##"{"bg_color":"#000000","hint_color":"#999999"}"##).unwrap();
        assert_eq!(params.bg_color.as_deref(), Some("#000000"));
        assert_eq!(params.button_color, None);
    }

    #[test]
    fn test_apply_theme_writes_all_variables() {
        let bridge = RecordingBridge::with_theme(ThemeParams {
            button_color: Some("#ff0000".to_string()),
            ..ThemeParams::default()
        });
        let sink = RecordingSink::default();

        let applied = apply_theme(&bridge, &sink, &ThemeDefaults::default());

        assert_eq!(applied, 4);
        assert_eq!(sink.get("--button-color").as_deref(), Some("#ff0000"));
        assert_eq!(sink.get("--bg-color").as_deref(), Some("#ffffff"));
    }

    #[test]
    fn test_apply_theme_continues_after_failed_write() {
        let bridge = RecordingBridge::default();
        let sink = RecordingSink::failing_on("--text-color");

        let applied = apply_theme(&bridge, &sink, &ThemeDefaults::default());

        assert_eq!(applied, 3);
        assert_eq!(sink.get("--text-color"), None);
        assert!(sink.get("--button-text-color").is_some());
    }
}
