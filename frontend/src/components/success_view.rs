use shared::OnboardingRecord;
use yew::prelude::*;

use crate::services::date_utils::format_date_for_display;

#[derive(Properties, PartialEq)]
pub struct SuccessViewProps {
    pub record: OnboardingRecord,
    pub on_reset: Callback<()>,
}

/// Confirmation shown once the endpoint accepted the application
#[function_component(SuccessView)]
pub fn success_view(props: &SuccessViewProps) -> Html {
    let record = &props.record;
    let on_click = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    html! {
        <section class="success-view">
            <h2>{"🎉 Application Submitted Successfully!"}</h2>
            <dl class="submission-summary">
                <dt>{"Name"}</dt>
                <dd>{&record.full_name}</dd>
                <dt>{"Email"}</dt>
                <dd>{&record.email}</dd>
                <dt>{"Company"}</dt>
                <dd>{&record.company_name}</dd>
                <dt>{"Services"}</dt>
                <dd>{record.services_display()}</dd>
                {if let Some(budget) = record.budget_display() {
                    html! {
                        <>
                            <dt>{"Budget"}</dt>
                            <dd>{budget}</dd>
                        </>
                    }
                } else { html! {} }}
                <dt>{"Start Date"}</dt>
                <dd>{format_date_for_display(record.project_start_date)}</dd>
            </dl>
            <button type="button" class="btn btn-primary" onclick={on_click}>
                {"Submit Another Application"}
            </button>
        </section>
    }
}
