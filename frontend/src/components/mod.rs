pub mod field_error;
pub mod onboarding_form;
pub mod submission_banner;
pub mod success_view;
