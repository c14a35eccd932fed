//! Loading indicator shown while a hero fetch is pending.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or(AttrValue::Static("Loading heroes..."))]
    pub label: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading" role="status">
            <div class="spinner"></div>
            <span class="loading-label">{ &props.label }</span>
        </div>
    }
}
