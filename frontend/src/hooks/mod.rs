pub mod use_onboarding_form;
