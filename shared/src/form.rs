use crate::amount::{apply_delta, parse_amount_digits};
use crate::bridge::HostBridge;
use crate::category::Category;
use crate::config::FormConfig;
use crate::error::FormError;
use crate::payload::ExpensePayload;
use crate::theme::{apply_theme, StyleSink};

/// Lifecycle of a form view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting user input
    Editing,
    /// Payload was sent and the host was asked to close; terminal
    Closed,
}

/// State of the expense entry form: the draft plus its lifecycle phase.
///
/// The category can only change through `select_category`, so it is always a
/// member of the known set. Once the form is `Closed` every mutator is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    category: Category,
    amount: String,
    description: String,
    person: String,
    missing_amount_message: String,
    amount_too_large_message: String,
    phase: FormPhase,
}

impl ExpenseForm {
    pub fn new(config: &FormConfig) -> Self {
        let mut form = Self {
            category: Category::default(),
            amount: String::new(),
            description: String::new(),
            person: String::new(),
            missing_amount_message: config.missing_amount_message.clone(),
            amount_too_large_message: config.amount_too_large_message.clone(),
            phase: FormPhase::Editing,
        };
        form.select_category(config.default_category);
        form
    }

    /// Page-load sequence: expand the view, sync the theme, build a fresh form
    pub fn load<B, S>(bridge: &B, sink: &S, config: &FormConfig) -> Self
    where
        B: HostBridge + ?Sized,
        S: StyleSink + ?Sized,
    {
        bridge.expand();
        apply_theme(bridge, sink, &config.theme_defaults);
        let form = Self::new(config);
        tracing::info!(category = form.category.key(), "expense form loaded");
        form
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_closed(&self) -> bool {
        self.phase == FormPhase::Closed
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Value of the hidden `category` input
    pub fn category_field(&self) -> &'static str {
        self.category.key()
    }

    /// Whether the chip for `category` should carry the active style
    pub fn is_active(&self, category: Category) -> bool {
        self.category == category
    }

    pub fn select_category(&mut self, category: Category) {
        if self.is_closed() {
            return;
        }
        tracing::debug!(from = self.category.key(), to = category.key(), "category selected");
        self.category = category;
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn set_amount(&mut self, value: impl Into<String>) {
        if self.is_closed() {
            return;
        }
        self.amount = value.into();
    }

    /// Adds a quick-add delta to the amount field and rewrites it as plain digits.
    ///
    /// The field is read with the same digit stripping used at submission; a
    /// field without digits counts as 0. The result is clamped at 0. A field
    /// too large for `u64` is left untouched so `submit` still rejects it.
    pub fn add_amount(&mut self, delta: i64) {
        if self.is_closed() {
            return;
        }
        let base = match parse_amount_digits(&self.amount) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(delta, error = %e, "quick-add ignored");
                return;
            }
        };
        let next = apply_delta(base, delta);
        tracing::debug!(base, delta, next, "amount adjusted");
        self.amount = next.to_string();
    }

    pub fn clear_amount(&mut self) {
        self.set_amount(String::new());
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        if self.is_closed() {
            return;
        }
        self.description = value.into();
    }

    pub fn person(&self) -> &str {
        &self.person
    }

    pub fn set_person(&mut self, value: impl Into<String>) {
        if self.is_closed() {
            return;
        }
        self.person = value.into();
    }

    /// Validates the current fields and builds the outbound record.
    ///
    /// Fails with `MissingAmount` when the amount field has no digits or is
    /// zero; "abc" is rejected the same way as an empty field.
    pub fn draft(&self) -> Result<ExpensePayload, FormError> {
        let amount = parse_amount_digits(&self.amount)?;
        if amount == 0 {
            return Err(FormError::MissingAmount);
        }

        let description = if self.description.is_empty() {
            self.category.key().to_string()
        } else {
            self.description.clone()
        };

        Ok(ExpensePayload {
            amount,
            category: self.category.key().to_string(),
            description,
            person: self.person.clone(),
        })
    }

    fn alert_message(&self, error: &FormError) -> Option<&str> {
        match error {
            FormError::MissingAmount => Some(&self.missing_amount_message),
            FormError::AmountOverflow(_) => Some(&self.amount_too_large_message),
            _ => None,
        }
    }

    /// Submits the draft to the host.
    ///
    /// On a validation failure the host shows one alert and the form stays in
    /// `Editing`. On success the JSON payload is sent, the view is closed, and
    /// the form becomes `Closed`.
    pub fn submit<B>(&mut self, bridge: &B) -> Result<ExpensePayload, FormError>
    where
        B: HostBridge + ?Sized,
    {
        if self.is_closed() {
            tracing::debug!("submit ignored, form already closed");
            return Err(FormError::AlreadyClosed);
        }

        let payload = match self.draft() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(amount = %self.amount, error = %e, "submission rejected");
                if let Some(message) = self.alert_message(&e) {
                    bridge.show_alert(message);
                }
                return Err(e);
            }
        };

        let json = payload.to_json().map_err(|e| {
            tracing::error!(error = %e, "failed to encode payload");
            FormError::from(e)
        })?;
        bridge.send_data(&json);
        bridge.close();
        self.phase = FormPhase::Closed;

        tracing::info!(
            amount = payload.amount,
            category = %payload.category,
            "expense submitted to host"
        );
        Ok(payload)
    }
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}
