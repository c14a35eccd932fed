//! Neutral message card for failed or empty states.

use yew::prelude::*;

/// Properties for ErrorBanner component.
#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub message: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// Error banner component.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class="card error-banner">
            <h2>{ &props.title }</h2>
            if let Some(message) = &props.message {
                <p class="text-secondary">{ message }</p>
            }
            { props.children.clone() }
        </div>
    }
}
