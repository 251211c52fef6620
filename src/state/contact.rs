//! Contact form state.
//!
//! Submission is simulated: the form goes `Idle -> Submitting`, waits, then
//! lands in the terminal `Submitted` state until the user resets it. Nothing
//! is delivered anywhere.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Editable inputs on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Organization,
    Subject,
    Message,
}

/// Why a submission did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("please enter a valid email address")]
    InvalidEmail,
}

/// Everything the visitor typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub organization: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Organization => &self.organization,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::Organization => &mut self.organization,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// Check required fields in on-screen order and report the first problem.
    pub fn validate(&self) -> Result<(), FormError> {
        let required = [
            (&self.first_name, "First name"),
            (&self.last_name, "Last name"),
            (&self.email, "Email"),
            (&self.subject, "Subject"),
            (&self.message, "Message"),
        ];
        for (value, name) in required {
            if value.trim().is_empty() {
                return Err(FormError::Required(name));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Proof that a simulated delivery finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Which submission this answers.
    pub attempt: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    status: SubmissionStatus,
    error: Option<FormError>,
    /// Attempt number of the in-flight submission
    pending: Option<u64>,
}

impl ContactForm {
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn error(&self) -> Option<FormError> {
        self.error
    }

    /// Update one input. Ignored once the form has left `Idle`.
    pub fn edit(&mut self, field: ContactField, value: String) {
        if self.status != SubmissionStatus::Idle {
            return;
        }
        *self.draft.field_mut(field) = value;
        self.error = None;
    }

    /// Start submission number `attempt`.
    ///
    /// Attempt numbers are handed out by the caller and must be unique for
    /// the life of the application, so a receipt meant for an earlier form
    /// can never match this one. Returns the draft to deliver, or `None` if
    /// the form is not `Idle` or fails validation.
    pub fn begin_submit(&mut self, attempt: u64) -> Option<ContactDraft> {
        if self.status != SubmissionStatus::Idle {
            return None;
        }
        if let Err(err) = self.draft.validate() {
            debug!(%err, "Contact form rejected");
            self.error = Some(err);
            return None;
        }
        self.error = None;
        self.pending = Some(attempt);
        self.status = SubmissionStatus::Submitting;
        info!(attempt, "Contact form submitting");
        Some(self.draft.clone())
    }

    /// Record a finished delivery.
    ///
    /// Only the receipt for the pending attempt completes the form; anything
    /// else is stale and dropped.
    pub fn complete(&mut self, receipt: &Receipt) {
        if self.status != SubmissionStatus::Submitting || self.pending != Some(receipt.attempt) {
            debug!(attempt = receipt.attempt, "Dropping stale contact receipt");
            return;
        }
        self.pending = None;
        self.status = SubmissionStatus::Submitted;
        info!(attempt = receipt.attempt, "Contact form submitted");
    }

    /// "Send another message": back to an empty `Idle` form.
    pub fn reset(&mut self) {
        if self.status != SubmissionStatus::Submitted {
            return;
        }
        self.draft = ContactDraft::default();
        self.error = None;
        self.status = SubmissionStatus::Idle;
    }
}

/// Pretend to deliver `draft`.
///
/// There is no backend; this only waits `delay` so the form can show its
/// sending state.
pub async fn simulate_delivery(attempt: u64, draft: ContactDraft, delay: Duration) -> Receipt {
    debug!(
        attempt,
        subject = %draft.subject,
        delay_ms = delay.as_millis() as u64,
        "Simulating contact delivery"
    );
    tokio::time::sleep(delay).await;
    Receipt { attempt }
}
