//! Validation rules for onboarding submissions.
//!
//! The validator turns a loosely-typed [`OnboardingCandidate`] into a
//! normalized [`OnboardingRecord`], or reports every violated rule. Each field
//! is checked on its own and failures are collected in field declaration
//! order, so callers can show only the first issue or all of them without
//! validating twice.
//!
//! Message wording is part of the contract: the UI and its tests match on
//! fragments such as "valid email", "at least $100" and "today or later".

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{
    format_usd, Field, FieldError, OnboardingCandidate, OnboardingRecord, Service,
    ValidationErrors,
};

/// Letters from any script (with combining marks, so decomposed accents
/// pass), plain spaces, apostrophes and hyphens
static FULL_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{M} '\-]+$").unwrap());

/// Exactly what a date input produces: zero-padded, no sign, no padding
static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9._%+'\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
    )
    .unwrap()
});

const MAX_EMAIL_LENGTH: usize = 254;

const FULL_NAME_REQUIRED: &str = "Full name is required";
const FULL_NAME_CHARSET: &str = "Full name can only contain letters, spaces, apostrophes, and hyphens";
const EMAIL_INVALID: &str = "Please enter a valid email address";
const COMPANY_REQUIRED: &str = "Company name is required";
const SERVICES_REQUIRED: &str = "Please select at least one service";
const BUDGET_NOT_A_NUMBER: &str = "Budget must be a number";
const START_DATE_REQUIRED: &str = "Project start date is required";
const START_DATE_INVALID: &str = "Project start date must be a valid date (YYYY-MM-DD)";
const START_DATE_PAST: &str = "Project start date must be today or later";
const TERMS_REQUIRED: &str = "You must accept the terms and conditions";

/// Bounds applied by the validator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingRules {
    pub min_name_length: usize,
    pub max_name_length: usize,
    pub max_company_length: usize,
    pub min_budget_usd: f64,
    pub max_budget_usd: f64,
}

impl Default for OnboardingRules {
    fn default() -> Self {
        Self {
            min_name_length: 2,
            max_name_length: 100,
            max_company_length: 200,
            min_budget_usd: 100.0,
            max_budget_usd: 1_000_000.0,
        }
    }
}

/// Validate `candidate` with the default rules.
///
/// `today` is the caller's local calendar date; start dates before it are
/// rejected.
pub fn validate(
    candidate: &OnboardingCandidate,
    today: NaiveDate,
) -> Result<OnboardingRecord, ValidationErrors> {
    OnboardingValidator::new().validate(candidate, today)
}

/// Stateless validator holding the configured bounds
#[derive(Debug, Clone, Default)]
pub struct OnboardingValidator {
    rules: OnboardingRules,
}

impl OnboardingValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: OnboardingRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &OnboardingRules {
        &self.rules
    }

    /// Check every field of `candidate` and build a normalized record.
    ///
    /// Text fields are trimmed and duplicate services dropped. The candidate
    /// itself is never modified.
    pub fn validate(
        &self,
        candidate: &OnboardingCandidate,
        today: NaiveDate,
    ) -> Result<OnboardingRecord, ValidationErrors> {
        let mut collector = IssueCollector::default();

        let full_name = collector.check(Field::FullName, self.check_full_name(&candidate.full_name));
        let email = collector.check(Field::Email, check_email(&candidate.email));
        let company_name =
            collector.check(Field::CompanyName, self.check_company_name(&candidate.company_name));
        let services = collector.check(Field::Services, check_services(&candidate.services));
        let budget_usd = collector.check(Field::BudgetUsd, self.check_budget(&candidate.budget_usd));
        let project_start_date = collector.check(
            Field::ProjectStartDate,
            check_start_date(&candidate.project_start_date, today),
        );
        let accept_terms = collector.check(Field::AcceptTerms, check_accept_terms(&candidate.accept_terms));

        let (
            Some(full_name),
            Some(email),
            Some(company_name),
            Some(services),
            Some(budget_usd),
            Some(project_start_date),
            Some(accept_terms),
        ) = (
            full_name,
            email,
            company_name,
            services,
            budget_usd,
            project_start_date,
            accept_terms,
        )
        else {
            let errors = collector.into_errors();
            if let Some(first) = errors.first() {
                debug!(
                    issue_count = errors.count(),
                    first_field = %first.path,
                    "Onboarding candidate rejected"
                );
            }
            return Err(errors);
        };

        Ok(OnboardingRecord {
            full_name,
            email,
            company_name,
            services,
            budget_usd,
            project_start_date,
            accept_terms,
        })
    }

    fn check_full_name(&self, value: &Value) -> Result<String, Vec<String>> {
        let Some(raw) = value.as_str() else {
            return Err(vec![FULL_NAME_REQUIRED.to_string()]);
        };
        let name = raw.trim();
        let length = name.chars().count();

        let mut messages = Vec::new();
        if length < self.rules.min_name_length {
            messages.push(format!(
                "Full name must be at least {} characters",
                self.rules.min_name_length
            ));
        } else if length > self.rules.max_name_length {
            messages.push(format!(
                "Full name must be at most {} characters",
                self.rules.max_name_length
            ));
        }
        if !name.is_empty() && !FULL_NAME_RE.is_match(name) {
            messages.push(FULL_NAME_CHARSET.to_string());
        }

        if messages.is_empty() {
            Ok(name.to_string())
        } else {
            Err(messages)
        }
    }

    fn check_company_name(&self, value: &Value) -> Result<String, Vec<String>> {
        let name = value.as_str().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(vec![COMPANY_REQUIRED.to_string()]);
        }
        if name.chars().count() > self.rules.max_company_length {
            return Err(vec![format!(
                "Company name must be at most {} characters",
                self.rules.max_company_length
            )]);
        }
        Ok(name.to_string())
    }

    fn check_budget(&self, value: &Value) -> Result<Option<f64>, Vec<String>> {
        let amount = match value {
            Value::Null => return Ok(None),
            Value::String(raw) if raw.trim().is_empty() => return Ok(None),
            Value::String(raw) => raw.trim().parse::<f64>().ok(),
            Value::Number(number) => number.as_f64(),
            _ => None,
        };
        let Some(amount) = amount.filter(|amount| amount.is_finite()) else {
            return Err(vec![BUDGET_NOT_A_NUMBER.to_string()]);
        };

        if amount < self.rules.min_budget_usd {
            Err(vec![format!(
                "Budget must be at least {}",
                format_usd(self.rules.min_budget_usd)
            )])
        } else if amount > self.rules.max_budget_usd {
            Err(vec![format!(
                "Budget cannot exceed {}",
                format_usd(self.rules.max_budget_usd)
            )])
        } else {
            Ok(Some(amount))
        }
    }
}

fn check_email(value: &Value) -> Result<String, Vec<String>> {
    match value.as_str().map(str::trim) {
        Some(email) if is_valid_email(email) => Ok(email.to_string()),
        _ => Err(vec![EMAIL_INVALID.to_string()]),
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LENGTH || !EMAIL_RE.is_match(email) {
        return false;
    }
    // the pattern allows exactly one '@'
    let local = email.split('@').next().unwrap_or_default();
    !local.starts_with('.') && !local.ends_with('.') && !local.contains("..")
}

fn check_services(value: &Value) -> Result<Vec<Service>, Vec<String>> {
    let entries = match value.as_array() {
        Some(entries) if !entries.is_empty() => entries,
        _ => return Err(vec![SERVICES_REQUIRED.to_string()]),
    };

    let mut services = Vec::with_capacity(entries.len());
    let mut messages = Vec::new();
    for entry in entries {
        match entry.as_str().and_then(Service::from_label) {
            Some(service) if !services.contains(&service) => services.push(service),
            Some(_) => {}
            None => {
                let shown = entry.as_str().map(str::to_string).unwrap_or_else(|| entry.to_string());
                messages.push(format!("Unknown service: {}", shown));
            }
        }
    }

    if messages.is_empty() {
        Ok(services)
    } else {
        Err(messages)
    }
}

fn check_start_date(value: &Value, today: NaiveDate) -> Result<NaiveDate, Vec<String>> {
    let raw = match value {
        Value::Null => return Err(vec![START_DATE_REQUIRED.to_string()]),
        Value::String(raw) if raw.trim().is_empty() => {
            return Err(vec![START_DATE_REQUIRED.to_string()])
        }
        Value::String(raw) => raw.as_str(),
        _ => return Err(vec![START_DATE_INVALID.to_string()]),
    };

    if !ISO_DATE_RE.is_match(raw) {
        return Err(vec![START_DATE_INVALID.to_string()]);
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| vec![START_DATE_INVALID.to_string()])?;
    if date < today {
        return Err(vec![START_DATE_PAST.to_string()]);
    }
    Ok(date)
}

fn check_accept_terms(value: &Value) -> Result<bool, Vec<String>> {
    match value {
        Value::Bool(true) => Ok(true),
        _ => Err(vec![TERMS_REQUIRED.to_string()]),
    }
}

/// Gathers per-field failures in the order fields are checked
#[derive(Default)]
struct IssueCollector {
    issues: Vec<FieldError>,
}

impl IssueCollector {
    fn check<T>(&mut self, field: Field, outcome: Result<T, Vec<String>>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(messages) => {
                self.issues
                    .extend(messages.into_iter().map(|message| FieldError::new(field, message)));
                None
            }
        }
    }

    fn into_errors(self) -> ValidationErrors {
        ValidationErrors::new(self.issues)
    }
}
