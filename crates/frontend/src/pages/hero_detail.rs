//! Hero detail page component.

use hero_types::HeroError;
use hero_views::DetailState;
use yew::prelude::*;

use crate::components::{ErrorBanner, HeroEditor, Loading};
use crate::hooks::use_app;

/// Properties for HeroDetailPage.
#[derive(Properties, PartialEq)]
pub struct HeroDetailPageProps {
    /// Raw `:id` route parameter
    pub hero_id: AttrValue,
}

/// Hero detail page component.
#[function_component(HeroDetailPage)]
pub fn hero_detail_page(props: &HeroDetailPageProps) -> Html {
    let app = use_app();
    // One view model per page instance so in-flight loads share a tracker.
    let vm = use_state(move || app.map(|app| app.detail()));
    let state = use_state(|| DetailState::Loading);
    let draft = use_state(String::new);
    let notice = use_state(|| None::<String>);

    // Fetch the hero whenever the id parameter changes
    {
        let vm = (*vm).clone();
        let state = state.clone();
        let draft = draft.clone();
        let notice = notice.clone();

        use_effect_with(props.hero_id.clone(), move |hero_id| {
            let hero_id = hero_id.to_string();
            let cleanup = vm.clone();

            if let Some(vm) = vm {
                state.set(DetailState::Loading);
                notice.set(None);
                wasm_bindgen_futures::spawn_local(async move {
                    if let Some(loaded) = vm.load(&hero_id).await {
                        if let Some(hero) = loaded.hero() {
                            draft.set(hero.name.clone());
                        }
                        state.set(loaded);
                    }
                });
            }

            move || {
                if let Some(vm) = cleanup {
                    vm.cancel();
                }
            }
        });
    }

    let Some(vm) = (*vm).clone() else {
        return html! { <ErrorBanner title="Hero detail unavailable" /> };
    };

    let on_name_input = {
        let vm = vm.clone();
        let state = state.clone();
        let draft = draft.clone();
        let notice = notice.clone();
        Callback::from(move |value: String| {
            draft.set(value.clone());
            let Some(hero) = state.hero().cloned() else {
                return;
            };
            let vm = vm.clone();
            let state = state.clone();
            let notice = notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let Some(result) = vm.rename(&hero, &value).await else {
                    return;
                };
                match result {
                    Ok(stored) => {
                        notice.set(None);
                        state.set(DetailState::Loaded(stored));
                    }
                    Err(HeroError::EmptyName) => {
                        notice.set(Some("A hero needs a name.".to_string()));
                    }
                    Err(e) => {
                        log::warn!("detail: rename of hero id={} failed: {e}", hero.id);
                        notice.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    let on_back = Callback::from(move |_: MouseEvent| vm.go_back());

    let body = match &*state {
        DetailState::Loading => html! { <Loading label="Loading hero..." /> },
        DetailState::Loaded(hero) => html! {
            <HeroEditor
                hero={hero.clone()}
                draft={AttrValue::from((*draft).clone())}
                oninput={on_name_input}
                notice={(*notice).clone().map(AttrValue::from)}
            />
        },
        DetailState::NotFound(id) => html! {
            <ErrorBanner
                title="Hero Not Found"
                message={AttrValue::from(format!("There is no hero with id {id}."))}
            />
        },
        DetailState::InvalidId(raw) => html! {
            <ErrorBanner
                title="Hero Not Found"
                message={AttrValue::from(format!("{raw:?} is not a hero id."))}
            />
        },
        DetailState::Failed(message) => html! {
            <ErrorBanner
                title="Could not load hero"
                message={AttrValue::from(message.clone())}
            />
        },
    };

    html! {
        <div>
            { body }
            <button class="btn btn-secondary" onclick={on_back}>
                {"Back"}
            </button>
        </div>
    }
}
