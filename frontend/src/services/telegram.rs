use std::rc::Rc;

use js_sys::Reflect;
use shared::{BridgeError, HostBridge, StyleSink, ThemeParams};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::services::logging::Logger;

#[wasm_bindgen]
extern "C" {
    /// `window.Telegram.WebApp`
    #[derive(Debug, Clone)]
    pub type WebApp;

    #[wasm_bindgen(method)]
    fn expand(this: &WebApp);

    #[wasm_bindgen(method, js_name = showAlert)]
    fn show_alert(this: &WebApp, message: &str);

    #[wasm_bindgen(method, js_name = sendData)]
    fn send_data(this: &WebApp, data: &str);

    #[wasm_bindgen(method)]
    fn close(this: &WebApp);

    #[wasm_bindgen(method, getter, js_name = themeParams)]
    fn theme_params(this: &WebApp) -> JsValue;

    #[wasm_bindgen(method, getter)]
    fn platform(this: &WebApp) -> Option<String>;
}

fn is_missing(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

fn property(target: &JsValue, key: &str) -> Option<JsValue> {
    if is_missing(target) {
        return None;
    }
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !is_missing(value))
}

fn string_property(target: &JsValue, key: &str) -> Option<String> {
    property(target, key).and_then(|value| value.as_string())
}

/// Host bridge backed by the Telegram WebApp script
#[derive(Debug, Clone)]
pub struct TelegramBridge {
    web_app: WebApp,
}

impl TelegramBridge {
    /// Locates `window.Telegram.WebApp`.
    ///
    /// The WebApp script defines the object even in a plain browser tab; it
    /// then reports the platform as "unknown", which is treated as no host.
    pub fn detect() -> Result<Self, BridgeError> {
        let window = web_sys::window().ok_or(BridgeError::HostUnavailable)?;
        let web_app = property(window.as_ref(), "Telegram")
            .and_then(|telegram| property(&telegram, "WebApp"))
            .ok_or(BridgeError::HostUnavailable)?
            .unchecked_into::<WebApp>();

        match web_app.platform().as_deref() {
            None | Some("unknown") => Err(BridgeError::HostUnavailable),
            Some(_) => Ok(Self { web_app }),
        }
    }

    /// Theme color from `themeParams`, or the camelCase field on the WebApp object
    fn color(&self, theme: &JsValue, snake: &str, camel: &str) -> Option<String> {
        string_property(theme, snake).or_else(|| string_property(&self.web_app, camel))
    }
}

impl HostBridge for TelegramBridge {
    fn expand(&self) {
        self.web_app.expand();
    }

    fn theme_params(&self) -> ThemeParams {
        let theme = self.web_app.theme_params();
        ThemeParams {
            bg_color: self.color(&theme, "bg_color", "backgroundColor"),
            text_color: self.color(&theme, "text_color", "textColor"),
            button_color: self.color(&theme, "button_color", "buttonColor"),
            button_text_color: self.color(&theme, "button_text_color", "buttonTextColor"),
        }
    }

    fn show_alert(&self, message: &str) {
        self.web_app.show_alert(message);
    }

    fn send_data(&self, payload: &str) {
        Logger::info_with_component("TelegramBridge", &format!("sendData {} bytes", payload.len()));
        self.web_app.send_data(payload);
    }

    fn close(&self) {
        self.web_app.close();
    }
}

/// Stand-in used when the page runs outside the chat host
#[derive(Debug, Clone, Default)]
pub struct ConsoleBridge;

impl HostBridge for ConsoleBridge {
    fn expand(&self) {
        Logger::debug_with_component("ConsoleBridge", "expand");
    }

    fn theme_params(&self) -> ThemeParams {
        ThemeParams::default()
    }

    fn show_alert(&self, message: &str) {
        Logger::warn_with_component("ConsoleBridge", &format!("alert: {}", message));
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn send_data(&self, payload: &str) {
        Logger::info_with_component("ConsoleBridge", &format!("sendData: {}", payload));
    }

    fn close(&self) {
        Logger::info_with_component("ConsoleBridge", "close");
    }
}

/// Picks the Telegram bridge when the host is present, the console stand-in otherwise
pub fn detect_bridge() -> Rc<dyn HostBridge> {
    match TelegramBridge::detect() {
        Ok(bridge) => Rc::new(bridge),
        Err(e) => {
            Logger::warn_with_component("TelegramBridge", &format!("{}, using console bridge", e));
            Rc::new(ConsoleBridge)
        }
    }
}

/// Writes CSS custom properties onto `document.documentElement`
#[derive(Debug, Clone, Default)]
pub struct RootStyle;

impl StyleSink for RootStyle {
    fn set_property(&self, name: &str, value: &str) -> Result<(), BridgeError> {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            .ok_or_else(|| BridgeError::Style("document element not available".to_string()))?;
        let root: web_sys::HtmlElement = root
            .dyn_into()
            .map_err(|_| BridgeError::Style("document element is not an HTML element".to_string()))?;
        root.style()
            .set_property(name, value)
            .map_err(|e| BridgeError::Style(format!("{:?}", e)))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_plain_browser_has_no_host() {
        assert_eq!(TelegramBridge::detect().unwrap_err(), BridgeError::HostUnavailable);
    }

    #[wasm_bindgen_test]
    fn test_root_style_sets_custom_property() {
        RootStyle.set_property("--bg-color", "#123456").unwrap();

        let root: web_sys::HtmlElement = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .document_element()
            .unwrap()
            .dyn_into()
            .unwrap();
        assert_eq!(root.style().get_property_value("--bg-color").unwrap(), "#123456");
    }
}
