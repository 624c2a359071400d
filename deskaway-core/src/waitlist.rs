//! Waitlist sign-up records forwarded to the marketing webhook
use serde::{Deserialize, Serialize};

/// Which form produced the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaitlistSource {
    /// Email-only "be first in new locations" form.
    #[serde(rename = "waitlist")]
    QuickSignup,
    /// Closing form with name, email, and update opt-in.
    #[serde(rename = "final_waitlist")]
    FinalSignup,
}

impl WaitlistSource {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::QuickSignup => "waitlist",
            Self::FinalSignup => "final_waitlist",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WaitlistError {
    #[error("a name is required")]
    MissingName,
    #[error("an email address is required")]
    MissingEmail,
    #[error("not a valid email address: {0}")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistSubmission {
    pub name: Option<String>,
    pub email: String,
    pub wants_updates: bool,
    pub destination: Option<String>,
    pub source: WaitlistSource,
    /// RFC 3339 timestamp supplied by the caller's clock.
    pub submitted_at: String,
}

#[must_use]
pub fn is_email_valid(email: &str) -> bool {
    regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

fn required_email(email: &str) -> Result<String, WaitlistError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(WaitlistError::MissingEmail);
    }
    if !is_email_valid(email) {
        return Err(WaitlistError::InvalidEmail(email.to_string()));
    }
    Ok(email.to_string())
}

fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

impl WaitlistSubmission {
    /// Email-only sign-up, optionally naming the location the visitor wants next.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is missing or malformed.
    pub fn quick(
        email: &str,
        destination: Option<&str>,
        submitted_at: impl Into<String>,
    ) -> Result<Self, WaitlistError> {
        Ok(Self {
            name: None,
            email: required_email(email)?,
            wants_updates: false,
            destination: optional_text(destination),
            source: WaitlistSource::QuickSignup,
            submitted_at: submitted_at.into(),
        })
    }

    /// Full sign-up with name and update opt-in.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the email is missing or malformed.
    pub fn full(
        name: &str,
        email: &str,
        wants_updates: bool,
        submitted_at: impl Into<String>,
    ) -> Result<Self, WaitlistError> {
        let name = optional_text(Some(name)).ok_or(WaitlistError::MissingName)?;
        Ok(Self {
            name: Some(name),
            email: required_email(email)?,
            wants_updates,
            destination: None,
            source: WaitlistSource::FinalSignup,
            submitted_at: submitted_at.into(),
        })
    }

    /// JSON body posted to the webhook.
    #[must_use]
    pub fn to_webhook_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "email": self.email,
            "wants_updates": self.wants_updates,
            "destination": self.destination,
            "source": self.source.key(),
            "timestamp": self.submitted_at,
        })
    }
}
