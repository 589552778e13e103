//! Submission of an accepted record to the onboarding endpoint.
//!
//! Transport lives in the frontend; this module owns the request body and the
//! single error type every failed submission is reported through.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::OnboardingRecord;

/// Every way a submission can fail. The UI shows the `Display` text as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum SubmissionError {
    #[error("Submission endpoint is not configured")]
    EndpointNotConfigured,

    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with {status}: {status_text}")]
    Rejected { status: u16, status_text: String },
}

impl SubmissionError {
    pub fn rejected(status: u16, status_text: impl Into<String>) -> Self {
        SubmissionError::Rejected {
            status,
            status_text: status_text.into(),
        }
    }

    /// HTTP status, when the endpoint answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmissionError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Any 2xx counts as accepted
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// JSON body for the onboarding POST
pub fn request_body(record: &OnboardingRecord) -> Result<String, SubmissionError> {
    serde_json::to_string(record).map_err(|e| SubmissionError::Serialize(e.to_string()))
}

/// Check the endpoint before any request goes out
pub fn require_endpoint(endpoint_url: &str) -> Result<&str, SubmissionError> {
    let endpoint_url = endpoint_url.trim();
    if endpoint_url.is_empty() {
        Err(SubmissionError::EndpointNotConfigured)
    } else {
        Ok(endpoint_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Service;
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    fn record(budget_usd: Option<f64>) -> OnboardingRecord {
        OnboardingRecord {
            full_name: "Ana Silva".to_string(),
            email: "ana@example.com".to_string(),
            company_name: "Silva Ltd".to_string(),
            services: vec![Service::MobileApp],
            budget_usd,
            project_start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            accept_terms: true,
        }
    }

    #[test]
    fn test_request_body_shape() {
        let body: Value = serde_json::from_str(&request_body(&record(Some(2500.0))).unwrap()).unwrap();
        assert_eq!(body["budgetUsd"], json!(2500.0));
        assert_eq!(body["projectStartDate"], json!("2026-01-05"));
        assert_eq!(body["services"], json!(["Mobile App"]));

        let body: Value = serde_json::from_str(&request_body(&record(None)).unwrap()).unwrap();
        assert!(body.get("budgetUsd").is_none());
    }

    #[test]
    fn test_success_statuses() {
        assert!(is_success_status(200));
        assert!(is_success_status(201));
        assert!(is_success_status(204));
        assert!(!is_success_status(199));
        assert!(!is_success_status(302));
        assert!(!is_success_status(422));
        assert!(!is_success_status(500));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SubmissionError::rejected(503, "Service Unavailable").to_string(),
            "Server responded with 503: Service Unavailable"
        );
        assert_eq!(
            SubmissionError::Network("Failed to fetch".to_string()).to_string(),
            "Network error: Failed to fetch"
        );
        assert_eq!(
            SubmissionError::EndpointNotConfigured.to_string(),
            "Submission endpoint is not configured"
        );
    }

    #[test]
    fn test_status_only_for_rejections() {
        assert_eq!(SubmissionError::rejected(404, "Not Found").status(), Some(404));
        assert_eq!(SubmissionError::Network("offline".to_string()).status(), None);
    }

    #[test]
    fn test_require_endpoint() {
        assert_eq!(require_endpoint(""), Err(SubmissionError::EndpointNotConfigured));
        assert_eq!(require_endpoint("  "), Err(SubmissionError::EndpointNotConfigured));
        assert_eq!(
            require_endpoint("https://hooks.example.com/onboard"),
            Ok("https://hooks.example.com/onboard")
        );
    }
}
