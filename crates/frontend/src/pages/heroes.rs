//! Heroes list page: select, add and delete heroes.

use std::rc::Rc;

use hero_types::HeroId;
use hero_views::{HeroesAction, HeroesState};
use yew::prelude::*;

use crate::components::{ErrorBanner, HeroListItem, Loading};
use crate::hooks::use_app;

/// Reducer wrapper so the list state can be driven by `use_reducer`.
#[derive(Clone, PartialEq)]
struct HeroesModel(HeroesState);

impl Default for HeroesModel {
    fn default() -> Self {
        Self(HeroesState::loading())
    }
}

impl Reducible for HeroesModel {
    type Action = HeroesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.clone().apply(action)))
    }
}

/// Heroes page component.
#[function_component(HeroesPage)]
pub fn heroes_page() -> Html {
    let app = use_app();
    let model = use_reducer(HeroesModel::default);
    let new_name = use_state(String::new);

    // Fetch heroes
    {
        let dispatcher = model.dispatcher();
        let app = app.clone();

        use_effect_with((), move |_| {
            if let Some(app) = app {
                wasm_bindgen_futures::spawn_local(async move {
                    dispatcher.dispatch(app.heroes().load().await);
                });
            }
        });
    }

    let Some(app) = app else {
        return html! { <ErrorBanner title="Heroes unavailable" /> };
    };
    let state = &model.0;

    let on_name_input = {
        let new_name = new_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            new_name.set(input.value());
        })
    };

    let on_add = {
        let vm = app.heroes();
        let dispatcher = model.dispatcher();
        let new_name = new_name.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let vm = vm.clone();
            let dispatcher = dispatcher.clone();
            let name = (*new_name).clone();
            new_name.set(String::new());
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(action) = vm.add(&name).await {
                    dispatcher.dispatch(action);
                }
            });
        })
    };

    let on_select = {
        let dispatcher = model.dispatcher();
        Callback::from(move |id: HeroId| dispatcher.dispatch(HeroesAction::Select(id)))
    };

    let on_delete = {
        let vm = app.heroes();
        let dispatcher = model.dispatcher();
        Callback::from(move |id: HeroId| {
            let vm = vm.clone();
            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                dispatcher.dispatch(vm.delete(id).await);
            });
        })
    };

    let on_view_details = {
        let vm = app.heroes();
        let state = state.clone();
        Callback::from(move |_: MouseEvent| vm.goto_detail(&state))
    };

    html! {
        <div>
            <h2>{"My Heroes"}</h2>

            <form class="filter-bar" onsubmit={on_add}>
                <label for="new-hero">{"Hero name: "}</label>
                <input
                    id="new-hero"
                    type="text"
                    class="search-input"
                    value={(*new_name).clone()}
                    oninput={on_name_input}
                />
                <button type="submit" class="btn btn-primary">{"Add"}</button>
            </form>

            if let Some(message) = &state.error {
                <ErrorBanner
                    title="Something went wrong"
                    message={AttrValue::from(message.clone())}
                />
            }

            if state.loading {
                <Loading />
            } else if state.heroes.is_empty() {
                <div class="card">
                    <p>{"No heroes found."}</p>
                </div>
            } else {
                <ul class="hero-list">
                    { for state.heroes.iter().map(|hero| html! {
                        <HeroListItem
                            key={hero.id.0}
                            hero={hero.clone()}
                            selected={state.selected == Some(hero.id)}
                            onselect={on_select.clone()}
                            ondelete={on_delete.clone()}
                        />
                    })}
                </ul>
            }

            if let Some(hero) = state.selected_hero() {
                <div class="card selected-hero">
                    <h2>{ format!("{} is my hero", hero.name.to_uppercase()) }</h2>
                    <button class="btn btn-primary" onclick={on_view_details}>
                        {"View Details"}
                    </button>
                </div>
            }
        </div>
    }
}
