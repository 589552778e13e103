//! Form state for the onboarding page.
//!
//! Holds raw input exactly as typed so the UI stays a thin renderer; turning
//! it into a candidate for the validator happens here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{OnboardingCandidate, OnboardingRecord, Service};

/// Raw values of every input on the onboarding form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingFormState {
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    /// Checked services in the order they were ticked
    pub services: Vec<Service>,
    /// Budget input text; blank means no budget
    pub budget_input: String,
    /// Value of the date input (YYYY-MM-DD or empty)
    pub project_start_date: String,
    pub accept_terms: bool,
}

impl OnboardingFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the service selection from a query-string pre-fill
    pub fn with_prefill(mut self, service: Option<Service>) -> Self {
        if let Some(service) = service {
            self.services = vec![service];
        }
        self
    }

    pub fn is_service_selected(&self, service: Service) -> bool {
        self.services.contains(&service)
    }

    /// Apply a checkbox change for `service`
    pub fn toggle_service(&mut self, service: Service, checked: bool) {
        if checked {
            if !self.is_service_selected(service) {
                self.services.push(service);
            }
        } else {
            self.services.retain(|selected| *selected != service);
        }
    }

    /// Build the untyped candidate handed to the validator
    pub fn to_candidate(&self) -> OnboardingCandidate {
        let budget = self.budget_input.trim();
        let budget_usd = if budget.is_empty() {
            Value::Null
        } else {
            Value::String(budget.to_string())
        };

        OnboardingCandidate {
            full_name: Value::String(self.full_name.clone()),
            email: Value::String(self.email.clone()),
            company_name: Value::String(self.company_name.clone()),
            services: Value::Array(
                self.services
                    .iter()
                    .map(|service| Value::String(service.label().to_string()))
                    .collect(),
            ),
            budget_usd,
            project_start_date: Value::String(self.project_start_date.clone()),
            accept_terms: Value::Bool(self.accept_terms),
        }
    }
}

/// Where the page is in the validate -> submit cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    /// Endpoint accepted the record; drives the confirmation view
    Success(OnboardingRecord),
    /// User-facing submission error message
    Failed(String),
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }

    /// A new submit is only taken when nothing is in flight
    pub fn accepts_submit(&self) -> bool {
        !self.is_submitting()
    }

    /// Status after the user dismisses a finished submission. A submission
    /// still in flight is left alone.
    pub fn acknowledged(&self) -> SubmitStatus {
        match self {
            SubmitStatus::Submitting => SubmitStatus::Submitting,
            _ => SubmitStatus::Idle,
        }
    }

    pub fn success_record(&self) -> Option<&OnboardingRecord> {
        match self {
            SubmitStatus::Success(record) => Some(record),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmitStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}
