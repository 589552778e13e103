use gloo::net::http::Request;
use shared::submission::{is_success_status, request_body, require_endpoint};
use shared::{OnboardingRecord, SubmissionError};

use super::config::AppConfig;

/// Client for the external onboarding endpoint
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    endpoint_url: String,
}

impl ApiClient {
    /// Create a client for the configured endpoint
    pub fn new(config: &AppConfig) -> Self {
        Self::with_endpoint(config.endpoint_url.clone())
    }

    pub fn with_endpoint(endpoint_url: String) -> Self {
        Self { endpoint_url }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// POST an accepted record as JSON. One attempt, no retry.
    pub async fn submit_onboarding(&self, record: &OnboardingRecord) -> Result<(), SubmissionError> {
        let url = require_endpoint(&self.endpoint_url)?;
        let body = request_body(record)?;

        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| SubmissionError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        if is_success_status(response.status()) {
            Ok(())
        } else {
            Err(SubmissionError::rejected(response.status(), response.status_text()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::Service;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn record() -> OnboardingRecord {
        OnboardingRecord {
            full_name: "Lee Park".to_string(),
            email: "lee@example.com".to_string(),
            company_name: "Park & Co".to_string(),
            services: vec![Service::WebDev],
            budget_usd: None,
            project_start_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            accept_terms: true,
        }
    }

    #[test]
    fn test_client_uses_configured_endpoint() {
        let config = AppConfig {
            endpoint_url: "https://hooks.example.com/onboard".to_string(),
            debug_logging: false,
        };
        assert_eq!(ApiClient::new(&config).endpoint_url(), "https://hooks.example.com/onboard");
    }

    #[wasm_bindgen_test]
    async fn test_empty_endpoint_fails_without_request() {
        let client = ApiClient::with_endpoint(String::new());
        let result = client.submit_onboarding(&record()).await;
        assert_eq!(result, Err(SubmissionError::EndpointNotConfigured));
    }
}
