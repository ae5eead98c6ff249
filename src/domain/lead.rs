//! Lead - Contact Form Payload

use serde::Serialize;
use uuid::Uuid;

use crate::error::{Error, Result};

/// JSON body posted to the lead endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Company name or socials/website link; optional on the form
    pub link: String,
}

impl LeadPayload {
    /// Validate the required fields before submission.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Invalid {
                message: "name is required".to_string(),
            });
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(Error::Invalid {
                message: "a valid email is required".to_string(),
            });
        }
        if self.message.trim().is_empty() {
            return Err(Error::Invalid {
                message: "message is required".to_string(),
            });
        }
        Ok(())
    }
}

/// One submission: the payload plus a request id used to correlate the
/// response event back to the form that sent it.
#[derive(Debug, Clone)]
pub struct LeadRequest {
    pub request_id: String,
    pub payload: LeadPayload,
}

impl LeadRequest {
    pub fn new(payload: LeadPayload) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> LeadPayload {
        LeadPayload {
            name: "Anna".to_string(),
            email: "anna@example.com".to_string(),
            message: "More bookings in 30 days".to_string(),
            link: String::new(),
        }
    }

    #[test]
    fn accepts_a_complete_payload() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn rejects_missing_required_fields() {
        let mut p = payload();
        p.name = "  ".to_string();
        assert!(p.validate().is_err());

        let mut p = payload();
        p.email = "not-an-address".to_string();
        assert!(p.validate().is_err());

        let mut p = payload();
        p.message = String::new();
        assert!(p.validate().is_err());
    }

    #[test]
    fn serializes_with_the_endpoint_field_names() {
        let value = serde_json::to_value(payload()).expect("serialize");
        let object = value.as_object().expect("object");
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["email", "link", "message", "name"]);
    }

    #[test]
    fn each_request_gets_its_own_id() {
        let a = LeadRequest::new(payload());
        let b = LeadRequest::new(payload());
        assert_ne!(a.request_id, b.request_id);
    }
}
