//! Contact form validation and the submission state machine.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub const MIN_MESSAGE_CHARS: usize = 10;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern must compile"))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.email.trim().is_empty() && self.message.trim().is_empty()
    }

    /// Key/value pairs in the order the relay receives them.
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("name", self.name.trim()),
            ("email", self.email.trim()),
            ("message", self.message.trim()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

pub fn validate_name(name: &str) -> Option<String> {
    name.trim()
        .is_empty()
        .then(|| "Please enter your name".to_string())
}

pub fn validate_email(email: &str) -> Option<String> {
    let email = email.trim();
    if email.is_empty() {
        Some("Please enter your email".to_string())
    } else if !email_regex().is_match(email) {
        Some("Please enter a valid email address".to_string())
    } else {
        None
    }
}

pub fn validate_message(message: &str) -> Option<String> {
    (message.trim().chars().count() < MIN_MESSAGE_CHARS)
        .then(|| format!("Message must be at least {} characters", MIN_MESSAGE_CHARS))
}

pub fn validate(form: &ContactForm) -> FieldErrors {
    FieldErrors {
        name: validate_name(&form.name),
        email: validate_email(&form.email),
        message: validate_message(&form.message),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// The form's fields, inline errors and submission status.
///
/// `idle -> submitting -> submitted -> idle` on success;
/// `idle -> submitting -> idle` with a notice on failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactFlow {
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub status: SubmitStatus,
    /// Transient failure notice shown after a rejected submission.
    pub notice: Option<String>,
    /// Bumped on every successful delivery; identifies the banner a
    /// reset timer belongs to.
    success_ticket: u64,
    reset_after_ms: u32,
}

impl ContactFlow {
    pub fn new(success_reset_secs: u32) -> Self {
        Self {
            form: ContactForm::default(),
            errors: FieldErrors::default(),
            status: SubmitStatus::Idle,
            notice: None,
            success_ticket: 0,
            reset_after_ms: success_reset_secs.saturating_mul(1000),
        }
    }

    pub fn with_draft(mut self, draft: ContactForm) -> Self {
        self.form = draft;
        self
    }

    /// How long the success banner stays up before the form reopens.
    pub fn reset_after_ms(&self) -> u32 {
        self.reset_after_ms
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Update one field and drop its stale error.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.form.name = value,
            Field::Email => self.form.email = value,
            Field::Message => self.form.message = value,
        }
        self.errors.clear(field);
    }

    /// Validate and enter `submitting`. Returns the payload to send, or
    /// `None` when a submission is already in flight or a field is invalid.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.status != SubmitStatus::Idle {
            return None;
        }
        self.errors = validate(&self.form);
        if !self.errors.is_empty() {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        self.notice = None;
        Some(self.form.clone())
    }

    /// Apply the relay's answer. Ignored unless a submission is in flight.
    ///
    /// Returns the ticket for the success banner, which the caller hands
    /// back to [`ContactFlow::expire_success`] once `reset_after_ms` passes.
    pub fn complete(&mut self, result: Result<(), PortfolioError>) -> Option<u64> {
        if self.status != SubmitStatus::Submitting {
            return None;
        }
        match result {
            Ok(()) => {
                self.status = SubmitStatus::Submitted;
                self.form = ContactForm::default();
                self.errors = FieldErrors::default();
                self.success_ticket += 1;
                Some(self.success_ticket)
            }
            Err(err) => {
                self.status = SubmitStatus::Idle;
                self.notice = Some(err.user_message());
                None
            }
        }
    }

    /// Revert `submitted` to `idle` when `ticket` names the banner on
    /// screen. A timer left over from an earlier delivery does nothing.
    pub fn expire_success(&mut self, ticket: u64) -> bool {
        if self.status != SubmitStatus::Submitted || ticket != self.success_ticket {
            return false;
        }
        self.status = SubmitStatus::Idle;
        true
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
