use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub mod form;
pub mod prefill;
pub mod submission;
pub mod validation;

pub use form::{OnboardingFormState, SubmitStatus};
pub use prefill::service_from_query;
pub use submission::SubmissionError;
pub use validation::{validate, OnboardingRules, OnboardingValidator};

/// Services a prospective client can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    #[serde(rename = "UI/UX")]
    UiUx,
    #[serde(rename = "Branding")]
    Branding,
    #[serde(rename = "Web Dev")]
    WebDev,
    #[serde(rename = "Mobile App")]
    MobileApp,
}

impl Service {
    /// Every service in display order
    pub const ALL: [Service; 4] = [
        Service::UiUx,
        Service::Branding,
        Service::WebDev,
        Service::MobileApp,
    ];

    /// Label shown in the form and sent over the wire
    pub fn label(&self) -> &'static str {
        match self {
            Service::UiUx => "UI/UX",
            Service::Branding => "Branding",
            Service::WebDev => "Web Dev",
            Service::MobileApp => "Mobile App",
        }
    }

    /// Exact, case-sensitive match against the labels
    pub fn from_label(label: &str) -> Option<Service> {
        Self::ALL.into_iter().find(|service| service.label() == label)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An accepted onboarding submission.
///
/// Only produced by the validator, so every constraint on the fields already
/// holds. Serializes to the JSON body posted to the onboarding endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRecord {
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    /// Non-empty, no duplicates, in the order the client picked them
    pub services: Vec<Service>,
    /// `None` means no budget was given, which is not the same as zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_usd: Option<f64>,
    /// ISO 8601 date (YYYY-MM-DD) on the wire
    pub project_start_date: NaiveDate,
    pub accept_terms: bool,
}

impl OnboardingRecord {
    /// Services joined for the confirmation view, e.g. "UI/UX, Web Dev"
    pub fn services_display(&self) -> String {
        self.services
            .iter()
            .map(Service::label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn budget_display(&self) -> Option<String> {
        self.budget_usd.map(format_usd)
    }
}

/// Unvalidated input as an untyped form layer would hand it over.
///
/// Missing keys deserialize to `Value::Null`, so absent and wrong-typed
/// fields both reach the validator instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingCandidate {
    pub full_name: Value,
    pub email: Value,
    pub company_name: Value,
    pub services: Value,
    pub budget_usd: Value,
    pub project_start_date: Value,
    pub accept_terms: Value,
}

/// Form fields in declaration order. Errors are reported in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    CompanyName,
    Services,
    BudgetUsd,
    ProjectStartDate,
    AcceptTerms,
}

impl Field {
    /// Wire name of the field, matching the JSON keys of the record
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::CompanyName => "companyName",
            Field::Services => "services",
            Field::BudgetUsd => "budgetUsd",
            Field::ProjectStartDate => "projectStartDate",
            Field::AcceptTerms => "acceptTerms",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation failure tied to one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub path: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(path: Field, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Every violation found in a candidate, ordered by field declaration order.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{}", join_issues(.issues))]
pub struct ValidationErrors {
    issues: Vec<FieldError>,
}

impl ValidationErrors {
    pub(crate) fn new(issues: Vec<FieldError>) -> Self {
        debug_assert!(!issues.is_empty());
        Self { issues }
    }

    /// The most salient violation
    pub fn first(&self) -> Option<&FieldError> {
        self.issues.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.issues.iter()
    }

    /// Number of violations, at least one
    pub fn count(&self) -> usize {
        self.issues.len()
    }

    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &FieldError> {
        self.issues.iter().filter(move |issue| issue.path == field)
    }

    /// Message shown beneath the input for `field`, if it failed
    pub fn first_message_for(&self, field: Field) -> Option<&str> {
        self.for_field(field).next().map(|issue| issue.message.as_str())
    }
}

fn join_issues(issues: &[FieldError]) -> String {
    issues
        .iter()
        .map(FieldError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Format a dollar amount with thousands separators: 1000000 -> "$1,000,000",
/// 1234.5 -> "$1,234.50". Cents are dropped for whole-dollar amounts.
pub fn format_usd(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (total_cents / 100).to_string();
    let cents = total_cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (index, digit) in dollars.chars().enumerate() {
        if index > 0 && (dollars.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if cents == 0 {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{:02}", sign, grouped, cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> OnboardingRecord {
        OnboardingRecord {
            full_name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            company_name: "Tech Corp".to_string(),
            services: vec![Service::UiUx, Service::WebDev],
            budget_usd: Some(50000.0),
            project_start_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            accept_terms: true,
        }
    }

    #[test]
    fn test_service_labels() {
        assert_eq!(Service::UiUx.label(), "UI/UX");
        assert_eq!(Service::MobileApp.to_string(), "Mobile App");

        assert_eq!(Service::from_label("Web Dev"), Some(Service::WebDev));
        assert_eq!(Service::from_label("web dev"), None);
        assert_eq!(Service::from_label("Marketing"), None);
    }

    #[test]
    fn test_service_serializes_as_label() {
        let json = serde_json::to_value(Service::ALL).unwrap();
        assert_eq!(json, json!(["UI/UX", "Branding", "Web Dev", "Mobile App"]));
    }

    #[test]
    fn test_record_json_shape() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(
            json,
            json!({
                "fullName": "John Doe",
                "email": "john@example.com",
                "companyName": "Tech Corp",
                "services": ["UI/UX", "Web Dev"],
                "budgetUsd": 50000.0,
                "projectStartDate": "2025-12-01",
                "acceptTerms": true,
            })
        );
    }

    #[test]
    fn test_record_omits_missing_budget() {
        let record = OnboardingRecord {
            budget_usd: None,
            ..sample_record()
        };
        let json = serde_json::to_value(record).unwrap();
        assert!(json.get("budgetUsd").is_none());
    }

    #[test]
    fn test_record_display_helpers() {
        let record = sample_record();
        assert_eq!(record.services_display(), "UI/UX, Web Dev");
        assert_eq!(record.budget_display(), Some("$50,000".to_string()));
    }

    #[test]
    fn test_candidate_missing_keys_are_null() {
        let candidate: OnboardingCandidate =
            serde_json::from_value(json!({ "fullName": "Jane" })).unwrap();
        assert_eq!(candidate.full_name, json!("Jane"));
        assert!(candidate.budget_usd.is_null());
        assert!(candidate.accept_terms.is_null());
    }

    #[test]
    fn test_field_wire_names() {
        assert_eq!(Field::ProjectStartDate.as_str(), "projectStartDate");
        assert_eq!(serde_json::to_value(Field::FullName).unwrap(), json!("fullName"));
        assert!(Field::FullName < Field::AcceptTerms);
    }

    #[test]
    fn test_validation_errors_lookup() {
        let errors = ValidationErrors::new(vec![
            FieldError::new(Field::FullName, "too short"),
            FieldError::new(Field::FullName, "bad characters"),
            FieldError::new(Field::Email, "not an email"),
        ]);

        assert_eq!(errors.count(), 3);
        assert_eq!(errors.first().unwrap().path, Field::FullName);
        assert_eq!(errors.for_field(Field::FullName).count(), 2);
        assert_eq!(errors.first_message_for(Field::Email), Some("not an email"));
        assert_eq!(errors.first_message_for(Field::Services), None);
        assert_eq!(
            errors.to_string(),
            "fullName: too short; fullName: bad characters; email: not an email"
        );
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(100.0), "$100");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000");
        assert_eq!(format_usd(150000.0), "$150,000");
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(999.99), "$999.99");
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(-2500.0), "-$2,500");
    }
}
