//! In-memory fakes for the host bridge and the style sink.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::bridge::{BridgeError, HostBridge};
use crate::theme::{StyleSink, ThemeParams};

/// One call made against a `RecordingBridge`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeCall {
    Expand,
    ThemeParams,
    ShowAlert(String),
    SendData(String),
    Close,
}

/// Host bridge that records every call in order
#[derive(Debug, Default)]
pub struct RecordingBridge {
    theme: ThemeParams,
    calls: RefCell<Vec<BridgeCall>>,
}

impl RecordingBridge {
    pub fn with_theme(theme: ThemeParams) -> Self {
        Self {
            theme,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<BridgeCall> {
        self.calls.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                BridgeCall::ShowAlert(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn sent(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                BridgeCall::SendData(payload) => Some(payload.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn close_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, BridgeCall::Close))
            .count()
    }

    fn record(&self, call: BridgeCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl HostBridge for RecordingBridge {
    fn expand(&self) {
        self.record(BridgeCall::Expand);
    }

    fn theme_params(&self) -> ThemeParams {
        self.record(BridgeCall::ThemeParams);
        self.theme.clone()
    }

    fn show_alert(&self, message: &str) {
        self.record(BridgeCall::ShowAlert(message.to_string()));
    }

    fn send_data(&self, payload: &str) {
        self.record(BridgeCall::SendData(payload.to_string()));
    }

    fn close(&self) {
        self.record(BridgeCall::Close);
    }
}

/// Style sink backed by a map, optionally rejecting one property
#[derive(Debug, Default)]
pub struct RecordingSink {
    properties: RefCell<BTreeMap<String, String>>,
    reject: Option<String>,
}

impl RecordingSink {
    pub fn failing_on(name: &str) -> Self {
        Self {
            properties: RefCell::new(BTreeMap::new()),
            reject: Some(name.to_string()),
        }
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.properties.borrow().get(name).cloned()
    }
}

impl StyleSink for RecordingSink {
    fn set_property(&self, name: &str, value: &str) -> Result<(), BridgeError> {
        if self.reject.as_deref() == Some(name) {
            return Err(BridgeError::Style(format!("{} rejected", name)));
        }
        self.properties
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}
