use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

/// Console log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl From<&Level> for LogLevel {
    fn from(level: &Level) -> Self {
        match *level {
            Level::ERROR => LogLevel::Error,
            Level::WARN => LogLevel::Warn,
            Level::INFO => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }
}

pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Error, component, message);
    }

    pub fn log(level: LogLevel, component: &str, message: &str) {
        let line = format_line(level, component, message);
        match level {
            LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }
    }
}

fn format_line(level: LogLevel, component: &str, message: &str) -> String {
    format!("[{}] {}: {}", level.as_str(), component, message)
}

/// Collects an event's message and fields into one line
#[derive(Default)]
struct EventLine {
    message: String,
    fields: Vec<String>,
}

impl EventLine {
    fn render(&self) -> String {
        let mut line = self.message.clone();
        for field in &self.fields {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(field);
        }
        line
    }
}

impl Visit for EventLine {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

type Emitter = Box<dyn Fn(LogLevel, &str, &str) + Send + Sync>;

/// Forwards `tracing` events to the browser console through `Logger`,
/// using the event target as the component name
pub struct ConsoleLayer {
    emit: Emitter,
}

impl ConsoleLayer {
    pub fn new() -> Self {
        Self::with_emitter(Logger::log)
    }

    pub fn with_emitter(emit: impl Fn(LogLevel, &str, &str) + Send + Sync + 'static) -> Self {
        Self { emit: Box::new(emit) }
    }
}

impl Default for ConsoleLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut line = EventLine::default();
        event.record(&mut line);
        let metadata = event.metadata();
        (self.emit)(LogLevel::from(metadata.level()), metadata.target(), &line.render());
    }
}

/// Installs the console layer as the global subscriber
pub fn init_tracing() {
    let installed = tracing_subscriber::registry()
        .with(LevelFilter::DEBUG)
        .with(ConsoleLayer::new())
        .try_init();
    if installed.is_err() {
        Logger::warn_with_component("Logger", "tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_format_line_tags_component() {
        assert_eq!(
            format_line(LogLevel::Warn, "ExpenseForm", "amount missing"),
            "[warn] ExpenseForm: amount missing"
        );
    }

    #[test]
    fn test_console_layer_forwards_events_with_fields() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let captured = lines.clone();
        let layer = ConsoleLayer::with_emitter(move |level, component, message| {
            captured
                .lock()
                .unwrap()
                .push((level, component.to_string(), message.to_string()));
        });
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(amount = "abc", delta = 10_000, "submission rejected");
            tracing::info!("expense form loaded");
        });

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, LogLevel::Warn);
        assert!(lines[0].1.ends_with("services::logging::tests"));
        assert_eq!(lines[0].2, "submission rejected amount=abc delta=10000");
        assert_eq!(lines[1].0, LogLevel::Info);
        assert_eq!(lines[1].2, "expense form loaded");
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(LogLevel::from(&Level::ERROR), LogLevel::Error);
        assert_eq!(LogLevel::from(&Level::TRACE), LogLevel::Debug);
    }
}
