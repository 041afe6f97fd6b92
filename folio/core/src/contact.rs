//! Contact Form
//!
//! Field values, schema validation and the submit flow.
//!
//! Submission is split in two so the caller can run the dispatch on its own
//! task:
//!
//! ```text
//! begin_submit()  -> validate -> Some(TemplateParams)   (or None + inline errors)
//!        ... dispatcher.send(params).await ...
//! finish_submit() -> success: clear fields + success toast
//!                    failure: keep fields  + error toast
//! ```
//!
//! [`ContactForm::submit`] runs both halves inline.

use std::sync::LazyLock;
use std::time::Instant;

use regex::Regex;
use serde::Serialize;

use crate::dispatch::{DispatchError, EmailDispatcher};
use crate::notification::Notification;

pub const NAME_REQUIRED: &str = "Name is required";
pub const INVALID_EMAIL: &str = "Invalid email";
pub const MESSAGE_REQUIRED: &str = "Message is required";

pub const SENT_MESSAGE: &str = "✅ Message sent successfully!";
pub const FAILED_MESSAGE: &str = "❌ Failed to send message.";

// Local part may not start with '.' or contain "..", checked separately.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is valid")
});

/// Whether `email` is well-formed
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

// ============================================================================
// Fields and values
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "you@example.com",
            ContactField::Message => "Your message here...",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, ContactField::Message)
    }
}

/// The three values typed into the form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormValues {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Check every field, collecting one message per failing field
    pub fn validate(&self) -> Result<TemplateParams, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.name.is_empty() {
            errors.push(ContactField::Name, NAME_REQUIRED);
        }
        if !is_valid_email(&self.email) {
            errors.push(ContactField::Email, INVALID_EMAIL);
        }
        if self.message.is_empty() {
            errors.push(ContactField::Message, MESSAGE_REQUIRED);
        }

        if errors.is_empty() {
            Ok(TemplateParams {
                from_name: self.name.clone(),
                from_email: self.email.clone(),
                message: self.message.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

/// Parameters handed to the email template
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

/// Per-field validation messages
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} contact field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<(ContactField, &'static str)>,
}

impl ValidationErrors {
    fn push(&mut self, field: ContactField, message: &'static str) {
        self.errors.push((field, message));
    }

    /// Message for `field`, if it failed
    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| *message)
    }

    pub fn clear(&mut self, field: ContactField) {
        self.errors.retain(|(f, _)| *f != field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &'static str)> + '_ {
        self.errors.iter().copied()
    }
}

// ============================================================================
// Interactive form
// ============================================================================

/// Which control has keyboard focus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormFocus {
    Field(ContactField),
    Submit,
}

impl FormFocus {
    const ORDER: [FormFocus; 4] = [
        FormFocus::Field(ContactField::Name),
        FormFocus::Field(ContactField::Email),
        FormFocus::Field(ContactField::Message),
        FormFocus::Submit,
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// What a submit attempt did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid,
    /// A dispatch was already in flight
    Ignored,
    Sent,
    Failed,
}

/// Contact form state: values, inline errors, focus and the last toast
#[derive(Debug)]
pub struct ContactForm {
    values: ContactFormValues,
    errors: ValidationErrors,
    focus: FormFocus,
    in_flight: bool,
    notification: Option<Notification>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            values: ContactFormValues::default(),
            errors: ValidationErrors::default(),
            focus: FormFocus::Field(ContactField::Name),
            in_flight: false,
            notification: None,
        }
    }

    pub fn with_values(values: ContactFormValues) -> Self {
        Self {
            values,
            ..Self::new()
        }
    }

    pub fn values(&self) -> &ContactFormValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: FormFocus) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Type a character into the focused field
    pub fn insert_char(&mut self, c: char) {
        if let FormFocus::Field(field) = self.focus {
            self.values.field_mut(field).push(c);
            self.errors.clear(field);
        }
    }

    /// Newline in the message, or move to the next control
    pub fn enter(&mut self) {
        match self.focus {
            FormFocus::Field(field) if field.is_multiline() => self.insert_char('\n'),
            FormFocus::Field(_) => self.focus_next(),
            FormFocus::Submit => {}
        }
    }

    pub fn backspace(&mut self) {
        if let FormFocus::Field(field) = self.focus {
            self.values.field_mut(field).pop();
            self.errors.clear(field);
        }
    }

    /// Validate and mark the form in flight.
    ///
    /// Returns the template parameters to dispatch, or `None` when the form is
    /// invalid (inline errors are set) or a dispatch is already running.
    pub fn begin_submit(&mut self) -> Option<TemplateParams> {
        if self.in_flight {
            tracing::debug!("submit ignored, dispatch already in flight");
            return None;
        }
        match self.values.validate() {
            Ok(params) => {
                self.errors = ValidationErrors::default();
                self.in_flight = true;
                Some(params)
            }
            Err(errors) => {
                tracing::debug!(failed = errors.len(), "contact form invalid");
                if let Some((field, _)) = errors.iter().next() {
                    self.focus = FormFocus::Field(field);
                }
                self.errors = errors;
                None
            }
        }
    }

    /// Apply the dispatch result
    pub fn finish_submit(&mut self, result: Result<(), DispatchError>, now: Instant) -> SubmitOutcome {
        self.in_flight = false;
        match result {
            Ok(()) => {
                tracing::info!("contact message sent");
                self.values = ContactFormValues::default();
                self.errors = ValidationErrors::default();
                self.focus = FormFocus::Field(ContactField::Name);
                self.notification = Some(Notification::success(SENT_MESSAGE, now));
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::warn!(error = %e, "contact message failed");
                self.notification = Some(Notification::error(FAILED_MESSAGE, now));
                SubmitOutcome::Failed
            }
        }
    }

    /// Validate, dispatch and apply the result in one go
    pub async fn submit(&mut self, dispatcher: &dyn EmailDispatcher) -> SubmitOutcome {
        if self.in_flight {
            return SubmitOutcome::Ignored;
        }
        let Some(params) = self.begin_submit() else {
            return SubmitOutcome::Invalid;
        };
        let result = dispatcher.send(&params).await;
        self.finish_submit(result, Instant::now())
    }

    /// The current toast, unless it has expired
    pub fn notification(&self, now: Instant) -> Option<&Notification> {
        self.notification.as_ref().filter(|n| !n.is_expired(now))
    }

    /// Drop the toast once its time is up
    pub fn expire_notification(&mut self, now: Instant) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notification = None;
        }
    }
}
