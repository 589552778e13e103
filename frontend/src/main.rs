use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::onboarding_form::OnboardingForm;
use components::submission_banner::SubmissionBanner;
use components::success_view::SuccessView;
use hooks::use_onboarding_form::use_onboarding_form;
use services::api::ApiClient;
use services::config::AppConfig;
use services::date_utils::{to_input_value, today_local};
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| {
        let config = AppConfig::from_env();
        if config.endpoint_url.is_empty() {
            Logger::warn_with_component("App", "ONBOARD_URL was not set at build time; submissions will fail");
        }
        ApiClient::new(&config)
    });
    let onboarding = use_onboarding_form(&api_client);
    let state = onboarding.state;
    let actions = onboarding.actions;

    if let Some(record) = state.status.success_record() {
        return html! {
            <main class="onboarding-page">
                <SuccessView record={record.clone()} on_reset={actions.reset.clone()} />
            </main>
        };
    }

    html! {
        <main class="onboarding-page">
            <h1>{"Client Onboarding Form"}</h1>
            <SubmissionBanner message={state.status.error_message().map(str::to_string)} />
            <OnboardingForm
                form={state.form.clone()}
                errors={state.errors.clone()}
                submitting={state.status.is_submitting()}
                min_start_date={to_input_value(today_local())}
                on_edit={actions.edit.clone()}
                on_submit={actions.submit.clone()}
            />
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
