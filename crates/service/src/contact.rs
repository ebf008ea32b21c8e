//! Contact form handling.
//!
//! Submissions are validated and logged, then dropped: nothing is stored and
//! nothing is forwarded.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::metrics;

const MAX_NAME_LEN: usize = 200;
const MAX_MESSAGE_LEN: usize = 5_000;

/// Body of `POST /api/contact`. Fields are optional on the wire so that a
/// missing field is a validation error rather than a decoding one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactService;

fn required(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

impl ContactService {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, req: ContactRequest) -> Result<ContactSubmission, ServiceError> {
        let (Some(name), Some(email), Some(message)) =
            (required(req.name), required(req.email), required(req.message))
        else {
            return Err(ServiceError::Validation("Tous les champs sont requis".into()));
        };
        if !looks_like_email(&email) {
            return Err(ServiceError::Validation("Adresse e-mail invalide".into()));
        }
        if name.chars().count() > MAX_NAME_LEN || message.chars().count() > MAX_MESSAGE_LEN {
            return Err(ServiceError::Validation("Message trop long".into()));
        }
        Ok(ContactSubmission { id: Uuid::new_v4(), name, email, message })
    }

    /// Validate and acknowledge a submission. Only metadata is logged; the
    /// message body never reaches the logs.
    #[instrument(skip(self, req))]
    pub fn submit(&self, req: ContactRequest) -> Result<ContactSubmission, ServiceError> {
        match self.validate(req) {
            Ok(sub) => {
                let domain = sub.email.rsplit('@').next().unwrap_or_default();
                info!(
                    submission_id = %sub.id,
                    email_domain = domain,
                    message_len = sub.message.len(),
                    "contact_submitted"
                );
                metrics::CONTACT_SUBMISSIONS_TOTAL.with_label_values(&["accepted"]).inc();
                Ok(sub)
            }
            Err(e) => {
                metrics::CONTACT_SUBMISSIONS_TOTAL.with_label_values(&["rejected"]).inc();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> ContactRequest {
        ContactRequest {
            name: name.map(String::from),
            email: email.map(String::from),
            message: message.map(String::from),
        }
    }

    #[test]
    fn accepts_complete_submission() {
        let sub = ContactService::new()
            .submit(req(Some(" Ada "), Some("ada@example.com"), Some("Bonjour")))
            .unwrap();
        assert_eq!(sub.name, "Ada");
        assert_eq!(sub.email, "ada@example.com");
    }

    #[test]
    fn missing_or_blank_fields_are_rejected() {
        let svc = ContactService::new();
        for r in [
            req(None, Some("a@b.fr"), Some("m")),
            req(Some("A"), None, Some("m")),
            req(Some("A"), Some("a@b.fr"), Some("   ")),
        ] {
            assert_eq!(
                svc.submit(r),
                Err(ServiceError::Validation("Tous les champs sont requis".into()))
            );
        }
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(looks_like_email("contact@agence.fr"));
        for bad in ["agence.fr", "a@b", "a@@b.fr", "@b.fr", "a b@c.fr", "a@.fr"] {
            assert!(!looks_like_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn overly_long_message_is_rejected() {
        let long = "x".repeat(MAX_MESSAGE_LEN + 1);
        let res = ContactService::new().validate(req(Some("A"), Some("a@b.fr"), Some(&long)));
        assert!(matches!(res, Err(ServiceError::Validation(_))));
    }
}
