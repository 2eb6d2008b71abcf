//! Quote-request domain types.
//!
//! The modal form's state lives here as plain values rather than ambient
//! view state, so the validation and wire-encoding rules are testable
//! without a browser.

use std::fmt;

/// Validation failure for a quote request.
///
/// Mirrors the native `required`/`type="email"` gate on the form inputs;
/// under normal operation the browser blocks submission before these are
/// ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteError {
    EmptyName,
    EmptyEmail,
    InvalidEmail,
    EmptyMessage,
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name is required"),
            Self::EmptyEmail => write!(f, "email is required"),
            Self::InvalidEmail => write!(f, "email address looks invalid"),
            Self::EmptyMessage => write!(f, "message is required"),
        }
    }
}

/// A quote request as entered in the modal form.
///
/// Ephemeral: built from the field signals at submission time, handed to
/// the form backend whole, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl QuoteRequest {
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

    /// All three fields non-empty, email shaped like an address.
    pub fn validate(&self) -> Result<(), QuoteError> {
        if self.name.trim().is_empty() {
            return Err(QuoteError::EmptyName);
        }
        if self.email.trim().is_empty() {
            return Err(QuoteError::EmptyEmail);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(QuoteError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(QuoteError::EmptyMessage);
        }
        Ok(())
    }

    /// `application/x-www-form-urlencoded` body carrying `name`, `email`
    /// and `message`, in that order.
    pub fn form_body(&self) -> String {
        format!(
            "name={}&email={}&message={}",
            urlencoding::encode(&self.name),
            urlencoding::encode(&self.email),
            urlencoding::encode(&self.message),
        )
    }
}

/// Same bar as the browser's `input[type=email]`: exactly one `@` with a
/// non-empty local part and domain.
fn looks_like_email(s: &str) -> bool {
    let mut parts = s.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}

/// Where the quote form is in its submission lifecycle.
///
/// The modal disables its submit button while `Submitting`, swaps the form
/// for a confirmation on `Succeeded`, and shows the reason on `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmitStatus {
    /// True while a request is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> QuoteRequest {
        QuoteRequest::new("Jane Doe", "jane@example.com", "Need a quote")
    }

    #[test]
    fn valid_request_passes() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_name_rejected() {
        let mut req = filled();
        req.name = "   ".into();
        assert_eq!(req.validate(), Err(QuoteError::EmptyName));
    }

    #[test]
    fn blank_email_rejected() {
        let mut req = filled();
        req.email = String::new();
        assert_eq!(req.validate(), Err(QuoteError::EmptyEmail));
    }

    #[test]
    fn blank_message_rejected() {
        let mut req = filled();
        req.message = "\n".into();
        assert_eq!(req.validate(), Err(QuoteError::EmptyMessage));
    }

    #[test]
    fn malformed_emails_rejected() {
        for email in ["jane", "jane@", "@example.com", "a@b@c"] {
            let mut req = filled();
            req.email = email.into();
            assert_eq!(
                req.validate(),
                Err(QuoteError::InvalidEmail),
                "should reject {email:?}"
            );
        }
    }

    #[test]
    fn surrounding_whitespace_in_email_tolerated() {
        let mut req = filled();
        req.email = " jane@example.com ".into();
        assert_eq!(req.validate(), Ok(()));
    }

    #[test]
    fn form_body_encodes_the_three_fields() {
        assert_eq!(
            filled().form_body(),
            "name=Jane%20Doe&email=jane%40example.com&message=Need%20a%20quote"
        );
    }

    #[test]
    fn form_body_escapes_separator_characters() {
        let req = QuoteRequest::new("A&B Corp", "qa=lead@example.com", "x&y=z");
        let body = req.form_body();
        // only the two field separators and three key/value separators survive
        assert_eq!(body.matches('&').count(), 2);
        assert_eq!(body.matches('=').count(), 3);
    }

    #[test]
    fn status_busy_only_while_submitting() {
        assert!(!SubmitStatus::Idle.is_busy());
        assert!(SubmitStatus::Submitting.is_busy());
        assert!(!SubmitStatus::Succeeded.is_busy());
        assert!(!SubmitStatus::Failed("offline".into()).is_busy());
    }

    #[test]
    fn default_status_is_idle() {
        assert_eq!(SubmitStatus::default(), SubmitStatus::Idle);
    }
}
