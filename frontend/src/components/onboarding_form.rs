use shared::{Field, OnboardingFormState, Service, ValidationErrors};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::field_error::FieldErrorMessage;
use crate::hooks::use_onboarding_form::FormEdit;

#[derive(Properties, PartialEq)]
pub struct OnboardingFormProps {
    // Form state
    pub form: OnboardingFormState,
    pub errors: Option<ValidationErrors>,
    pub submitting: bool,
    /// Earliest selectable start date (YYYY-MM-DD)
    pub min_start_date: String,

    // Event handlers
    pub on_edit: Callback<FormEdit>,
    pub on_submit: Callback<()>,
}

/// Emits on every keystroke so errors follow the value as it is typed
fn text_input(on_edit: &Callback<FormEdit>, to_edit: fn(String) -> FormEdit) -> Callback<InputEvent> {
    on_edit.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        to_edit(input.value())
    })
}

#[function_component(OnboardingForm)]
pub fn onboarding_form(props: &OnboardingFormProps) -> Html {
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_terms_change = props.on_edit.reform(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        FormEdit::AcceptTerms(input.checked())
    });

    let invalid = |field: Field| -> &'static str {
        match props.errors.as_ref() {
            Some(errors) if errors.first_message_for(field).is_some() => "true",
            _ => "false",
        }
    };

    html! {
        <form class="onboarding-form" onsubmit={on_submit} novalidate=true>
            <div class="form-group">
                <label for="fullName">{"Full Name *"}</label>
                <input
                    id="fullName"
                    type="text"
                    placeholder="Enter your full name"
                    value={props.form.full_name.clone()}
                    oninput={text_input(&props.on_edit, FormEdit::FullName)}
                    aria-invalid={invalid(Field::FullName)}
                    disabled={props.submitting}
                />
                <FieldErrorMessage errors={props.errors.clone()} field={Field::FullName} />
            </div>

            <div class="form-group">
                <label for="email">{"Email *"}</label>
                <input
                    id="email"
                    type="email"
                    placeholder="Enter your email address"
                    value={props.form.email.clone()}
                    oninput={text_input(&props.on_edit, FormEdit::Email)}
                    aria-invalid={invalid(Field::Email)}
                    disabled={props.submitting}
                />
                <FieldErrorMessage errors={props.errors.clone()} field={Field::Email} />
            </div>

            <div class="form-group">
                <label for="companyName">{"Company Name *"}</label>
                <input
                    id="companyName"
                    type="text"
                    placeholder="Enter your company name"
                    value={props.form.company_name.clone()}
                    oninput={text_input(&props.on_edit, FormEdit::CompanyName)}
                    aria-invalid={invalid(Field::CompanyName)}
                    disabled={props.submitting}
                />
                <FieldErrorMessage errors={props.errors.clone()} field={Field::CompanyName} />
            </div>

            <fieldset class="form-group services">
                <legend>{"Services Interested In *"}</legend>
                {for Service::ALL.iter().map(|service| {
                    let service = *service;
                    let on_change = props.on_edit.reform(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        FormEdit::Service(service, input.checked())
                    });
                    html! {
                        <div class="checkbox-row" key={service.label()}>
                            <input
                                id={service.label()}
                                type="checkbox"
                                checked={props.form.is_service_selected(service)}
                                onchange={on_change}
                                disabled={props.submitting}
                            />
                            <label for={service.label()}>{service.label()}</label>
                        </div>
                    }
                })}
                <FieldErrorMessage errors={props.errors.clone()} field={Field::Services} />
            </fieldset>

            <div class="form-group">
                <label for="budgetUsd">{"Budget (USD)"}</label>
                <input
                    id="budgetUsd"
                    type="number"
                    min="100"
                    max="1000000"
                    placeholder="Enter your budget (optional)"
                    value={props.form.budget_input.clone()}
                    oninput={text_input(&props.on_edit, FormEdit::Budget)}
                    aria-invalid={invalid(Field::BudgetUsd)}
                    disabled={props.submitting}
                />
                <FieldErrorMessage errors={props.errors.clone()} field={Field::BudgetUsd} />
            </div>

            <div class="form-group">
                <label for="projectStartDate">{"Project Start Date *"}</label>
                <input
                    id="projectStartDate"
                    type="date"
                    min={props.min_start_date.clone()}
                    value={props.form.project_start_date.clone()}
                    oninput={text_input(&props.on_edit, FormEdit::StartDate)}
                    aria-invalid={invalid(Field::ProjectStartDate)}
                    disabled={props.submitting}
                />
                <FieldErrorMessage errors={props.errors.clone()} field={Field::ProjectStartDate} />
            </div>

            <div class="form-group">
                <div class="checkbox-row">
                    <input
                        id="acceptTerms"
                        type="checkbox"
                        checked={props.form.accept_terms}
                        onchange={on_terms_change}
                        disabled={props.submitting}
                    />
                    <label for="acceptTerms">{"I accept the terms and conditions *"}</label>
                </div>
                <FieldErrorMessage errors={props.errors.clone()} field={Field::AcceptTerms} />
            </div>

            <button
                type="submit"
                class="btn btn-primary submit-btn"
                disabled={props.submitting}
            >
                {if props.submitting {
                    "Submitting..."
                } else {
                    "Submit Application"
                }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Event, EventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_typing_emits_edit_per_input_event() {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let edits = Rc::new(RefCell::new(Vec::new()));
        let props = OnboardingFormProps {
            form: OnboardingFormState::new(),
            errors: None,
            submitting: false,
            min_start_date: "2030-01-01".to_string(),
            on_edit: {
                let edits = edits.clone();
                Callback::from(move |edit: FormEdit| edits.borrow_mut().push(edit))
            },
            on_submit: Callback::noop(),
        };
        yew::Renderer::<OnboardingForm>::with_root_and_props(root.clone(), props).render();
        yew::platform::time::sleep(Duration::ZERO).await;

        let name: HtmlInputElement = root
            .query_selector("#fullName")
            .unwrap()
            .unwrap()
            .unchecked_into();
        name.set_value("Ad");

        let init = EventInit::new();
        init.set_bubbles(true);
        let input = Event::new_with_event_init_dict("input", &init).unwrap();
        name.dispatch_event(&input).unwrap();

        assert_eq!(*edits.borrow(), vec![FormEdit::FullName("Ad".to_string())]);
    }
}
