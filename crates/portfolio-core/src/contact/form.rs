//! Contact form state machine.
//!
//! `Idle -> Submitting -> Idle`. A submission is accepted only while idle and
//! only when every field is filled in and the email looks like an address.
//! Completing a submission returns the form to idle, clearing the fields on
//! success and keeping them on failure, and records one notification.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::notification::{Notification, NotificationLog};
use super::transport::{ContactTransport, Receipt, TransportError};

/// One input of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    /// Fields in tab order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    /// Next field in tab order, wrapping around.
    pub fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Subject,
            FormField::Subject => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    /// Previous field in tab order, wrapping around.
    pub fn prev(&self) -> FormField {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Subject => FormField::Email,
            FormField::Message => FormField::Subject,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reasons a submission is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    /// A field is empty or whitespace.
    #[error("{0} is required")]
    MissingField(FormField),

    /// The email is not of the form `local@domain.tld`.
    #[error("email address is invalid")]
    InvalidEmail,

    /// A submission is already in flight.
    #[error("a message is already being sent")]
    AlreadySubmitting,
}

/// Values of the four form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    /// Whether all four fields are empty.
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Checks required fields in tab order, then the email shape.
    pub fn validate(&self) -> Result<(), FormError> {
        if let Some(field) = FormField::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(FormError::MissingField(field));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self::new(
            self.name.trim(),
            self.email.trim(),
            self.subject.trim(),
            self.message.trim(),
        )
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern is valid")
    })
}

/// Whether `email` has a local part, a domain and a dotted suffix.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
}

/// Contact form with its notification history.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    state: FormState,
    notifications: NotificationLog,
}

impl ContactForm {
    /// Creates an empty idle form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an idle form prefilled with `fields`.
    pub fn with_fields(fields: ContactFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn field(&self, field: FormField) -> &str {
        self.fields.get(field)
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
    }

    /// Mutable access to one field, for in-place editing.
    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        self.fields.get_mut(field)
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Label of the submit button for the current state.
    pub fn submit_label(&self) -> &'static str {
        match self.state {
            FormState::Idle => "Send Message",
            FormState::Submitting => "Sending...",
        }
    }

    pub fn notifications(&self) -> &NotificationLog {
        &self.notifications
    }

    /// Accepts a submission and enters `Submitting`.
    ///
    /// Returns the trimmed field values to hand to a transport. On error the
    /// form is left untouched.
    pub fn begin_submit(&mut self) -> Result<ContactFields, FormError> {
        if self.is_submitting() {
            debug!("submit ignored while sending");
            return Err(FormError::AlreadySubmitting);
        }
        self.fields.validate()?;
        self.state = FormState::Submitting;
        debug!("contact form submitting");
        Ok(self.fields.trimmed())
    }

    /// Applies the transport outcome and returns to `Idle`.
    ///
    /// Returns `None` without recording anything if no submission was in
    /// flight.
    pub fn complete(
        &mut self,
        outcome: Result<Receipt, TransportError>,
    ) -> Option<&Notification> {
        if !self.is_submitting() {
            warn!("completion received with no submission in flight");
            return None;
        }
        self.state = FormState::Idle;

        let notification = match outcome {
            Ok(receipt) => {
                info!(receipt = %receipt.id, "contact message sent");
                self.fields = ContactFields::default();
                Notification::sent()
            }
            Err(err) => {
                warn!(error = %err, "contact message failed");
                Notification::failed(&err)
            }
        };
        Some(self.notifications.push(notification))
    }

    /// Runs a whole submission through `transport`.
    pub async fn submit_with<T>(&mut self, transport: &T) -> Result<Notification, FormError>
    where
        T: ContactTransport + ?Sized,
    {
        let fields = self.begin_submit()?;
        let outcome = transport.submit(&fields).await;
        match self.complete(outcome) {
            Some(notification) => Ok(notification.clone()),
            None => Err(FormError::AlreadySubmitting),
        }
    }
}
