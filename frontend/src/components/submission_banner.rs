use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SubmissionBannerProps {
    pub message: Option<String>,
}

#[function_component(SubmissionBanner)]
pub fn submission_banner(props: &SubmissionBannerProps) -> Html {
    if let Some(message) = props.message.as_ref() {
        html! {
            <div class="form-message error" role="alert">
                <strong>{"Error: "}</strong>{message}
            </div>
        }
    } else {
        html! {}
    }
}
