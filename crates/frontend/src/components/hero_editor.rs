//! Editable view of one hero.

use hero_types::Hero;
use yew::prelude::*;

/// Properties for HeroEditor component.
#[derive(Properties, PartialEq)]
pub struct HeroEditorProps {
    pub hero: Hero,
    /// Current content of the name field, which may differ from the stored name
    pub draft: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or_default]
    pub notice: Option<AttrValue>,
}

/// Hero editor component.
#[function_component(HeroEditor)]
pub fn hero_editor(props: &HeroEditorProps) -> Html {
    let oninput = props.oninput.reform(|e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    html! {
        <div class="card hero-editor">
            <div class="card-header">
                <h2 class="card-title">
                    { format!("{} details!", props.hero.name.to_uppercase()) }
                </h2>
            </div>
            <div class="field">
                <label>{"id: "}</label>
                <span>{ props.hero.id.to_string() }</span>
            </div>
            <div class="field">
                <label for="hero-name">{"name: "}</label>
                <input
                    id="hero-name"
                    type="text"
                    placeholder="name"
                    value={props.draft.clone()}
                    {oninput}
                />
            </div>
            if let Some(notice) = &props.notice {
                <p class="field-notice">{ notice }</p>
            }
        </div>
    }
}
