use shared::{
    service_from_query, OnboardingFormState, OnboardingValidator, Service, SubmitStatus,
    ValidationErrors,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils::today_local;
use crate::services::logging::Logger;

const COMPONENT: &str = "OnboardingForm";

/// A single change coming from one of the form inputs
#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    FullName(String),
    Email(String),
    CompanyName(String),
    Service(Service, bool),
    Budget(String),
    StartDate(String),
    AcceptTerms(bool),
}

impl FormEdit {
    pub fn apply(self, state: &mut OnboardingFormState) {
        match self {
            FormEdit::FullName(value) => state.full_name = value,
            FormEdit::Email(value) => state.email = value,
            FormEdit::CompanyName(value) => state.company_name = value,
            FormEdit::Service(service, checked) => state.toggle_service(service, checked),
            FormEdit::Budget(value) => state.budget_input = value,
            FormEdit::StartDate(value) => state.project_start_date = value,
            FormEdit::AcceptTerms(checked) => state.accept_terms = checked,
        }
    }
}

#[derive(Clone)]
pub struct OnboardingFormHookState {
    pub form: OnboardingFormState,
    /// Errors from the last validation; `None` until a submit is attempted
    pub errors: Option<ValidationErrors>,
    pub status: SubmitStatus,
}

#[derive(Clone, PartialEq)]
pub struct OnboardingFormActions {
    pub edit: Callback<FormEdit>,
    pub submit: Callback<()>,
    /// Dismiss the last result; the entered values stay in the form
    pub reset: Callback<()>,
}

pub struct UseOnboardingFormResult {
    pub state: OnboardingFormHookState,
    pub actions: OnboardingFormActions,
}

#[hook]
pub fn use_onboarding_form(api_client: &ApiClient) -> UseOnboardingFormResult {
    let form = use_state(OnboardingFormState::new);
    let errors = use_state(|| Option::<ValidationErrors>::None);
    let status = use_state(SubmitStatus::default);
    // Once a submit has failed validation, every edit re-validates
    let attempted = use_state(|| false);

    // Pre-select a service from ?service=... on first render
    use_effect_with((), {
        let form = form.clone();
        move |_| {
            let search = gloo::utils::window().location().search().unwrap_or_default();
            if let Some(service) = service_from_query(&search) {
                Logger::debug_with_component(COMPONENT, &format!("Pre-selecting service {}", service));
                form.set(OnboardingFormState::new().with_prefill(Some(service)));
            }
            || ()
        }
    });

    let edit = {
        let form = form.clone();
        let errors = errors.clone();
        let attempted = attempted.clone();

        Callback::from(move |edit: FormEdit| {
            let mut next = (*form).clone();
            edit.apply(&mut next);

            if *attempted {
                let outcome = OnboardingValidator::new().validate(&next.to_candidate(), today_local());
                errors.set(outcome.err());
            }
            form.set(next);
        })
    };

    let submit = {
        let form = form.clone();
        let errors = errors.clone();
        let status = status.clone();
        let attempted = attempted.clone();
        let api_client = api_client.clone();

        Callback::from(move |_| {
            if !status.accepts_submit() {
                Logger::debug_with_component(COMPONENT, "Submit ignored, one is already in flight");
                return;
            }

            attempted.set(true);
            let record = match OnboardingValidator::new().validate(&form.to_candidate(), today_local()) {
                Ok(record) => record,
                Err(validation_errors) => {
                    Logger::debug_with_component(
                        COMPONENT,
                        &serde_json::to_string(&validation_errors).unwrap_or_default(),
                    );
                    errors.set(Some(validation_errors));
                    return;
                }
            };

            errors.set(None);
            status.set(SubmitStatus::Submitting);

            let status = status.clone();
            let api_client = api_client.clone();
            spawn_local(async move {
                match api_client.submit_onboarding(&record).await {
                    Ok(()) => {
                        Logger::info_with_component(COMPONENT, "Application submitted");
                        status.set(SubmitStatus::Success(record));
                    }
                    Err(e) => {
                        let detail = match e.status() {
                            Some(code) => format!("Submission rejected with HTTP {}", code),
                            None => format!("Submission failed: {}", e),
                        };
                        Logger::error_with_component(COMPONENT, &detail);
                        status.set(SubmitStatus::Failed(e.to_string()));
                    }
                }
            });
        })
    };

    let reset = {
        let errors = errors.clone();
        let status = status.clone();

        Callback::from(move |_| {
            errors.set(None);
            status.set(status.acknowledged());
        })
    };

    let state = OnboardingFormHookState {
        form: (*form).clone(),
        errors: (*errors).clone(),
        status: (*status).clone(),
    };

    let actions = OnboardingFormActions { edit, submit, reset };

    UseOnboardingFormResult { state, actions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_edits_apply_to_state() {
        let mut state = OnboardingFormState::new();
        FormEdit::FullName("Ada Lovelace".to_string()).apply(&mut state);
        FormEdit::Service(Service::Branding, true).apply(&mut state);
        FormEdit::Service(Service::UiUx, true).apply(&mut state);
        FormEdit::Service(Service::Branding, false).apply(&mut state);
        FormEdit::Budget("2500".to_string()).apply(&mut state);
        FormEdit::AcceptTerms(true).apply(&mut state);

        assert_eq!(state.full_name, "Ada Lovelace");
        assert_eq!(state.services, vec![Service::UiUx]);
        assert_eq!(state.budget_input, "2500");
        assert!(state.accept_terms);
    }
}
