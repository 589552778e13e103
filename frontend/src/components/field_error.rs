use shared::{Field, ValidationErrors};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FieldErrorMessageProps {
    pub errors: Option<ValidationErrors>,
    pub field: Field,
}

/// First validation message for one field, rendered under its input
#[function_component(FieldErrorMessage)]
pub fn field_error_message(props: &FieldErrorMessageProps) -> Html {
    let message = props
        .errors
        .as_ref()
        .and_then(|errors| errors.first_message_for(props.field));

    match message {
        Some(message) => html! {
            <p class="field-error" id={format!("{}-error", props.field)}>{message}</p>
        },
        None => html! {},
    }
}
