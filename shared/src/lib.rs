//! Host-independent core of the expense entry WebApp.
//!
//! Everything here runs without a DOM or a chat host: the frontend crate wires
//! these types to `window.Telegram.WebApp` and the page markup.

pub mod amount;
pub mod bridge;
pub mod category;
pub mod config;
pub mod error;
pub mod form;
pub mod payload;
pub mod theme;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use amount::{apply_delta, parse_amount_digits, strip_non_digits};
pub use bridge::{BridgeError, HostBridge};
pub use category::Category;
pub use config::{FormConfig, ThemeDefaults};
pub use error::FormError;
pub use form::{ExpenseForm, FormPhase};
pub use payload::ExpensePayload;
pub use theme::{apply_theme, StyleSink, ThemeParams, ThemeVariable};
