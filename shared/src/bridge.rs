use thiserror::Error;

use crate::theme::ThemeParams;

/// Errors at the boundary with the hosting page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The page was opened outside the chat host
    #[error("WebApp host object is not available")]
    HostUnavailable,

    #[error("failed to set style property: {0}")]
    Style(String),
}

/// Capabilities the chat host exposes to the mini-app.
///
/// Every call is fire-and-forget: the host gives no delivery confirmation back
/// to the page.
pub trait HostBridge {
    /// Ask the host to enlarge the view
    fn expand(&self);

    /// Colors the host wants the page to use
    fn theme_params(&self) -> ThemeParams;

    /// Show a host-native modal alert
    fn show_alert(&self, message: &str);

    /// Deliver an opaque payload to the bot behind the mini-app
    fn send_data(&self, payload: &str);

    /// Dismiss the mini-app view
    fn close(&self);
}
