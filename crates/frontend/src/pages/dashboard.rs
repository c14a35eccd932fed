//! Dashboard page: the top heroes as clickable tiles.

use hero_types::{Hero, HeroId};
use hero_views::Loadable;
use yew::prelude::*;

use crate::components::{ErrorBanner, HeroTile, Loading};
use crate::hooks::use_app;

/// Dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let app = use_app();
    let heroes = use_state(|| Loadable::<Vec<Hero>>::Loading);

    {
        let heroes = heroes.clone();
        let app = app.clone();

        use_effect_with((), move |_| {
            if let Some(app) = app {
                wasm_bindgen_futures::spawn_local(async move {
                    heroes.set(app.dashboard().load().await);
                });
            }
        });
    }

    let Some(app) = app else {
        return html! { <ErrorBanner title="Dashboard unavailable" /> };
    };

    let on_select = {
        let vm = app.dashboard();
        Callback::from(move |id: HeroId| vm.select(id))
    };

    html! {
        <div>
            <h2>{"Top Heroes"}</h2>
            {
                match &*heroes {
                    Loadable::Loading => html! { <Loading /> },
                    Loadable::Failed(message) => html! {
                        <ErrorBanner
                            title="Could not load heroes"
                            message={AttrValue::from(message.clone())}
                        />
                    },
                    Loadable::Ready(tiles) if tiles.is_empty() => html! {
                        <div class="card">
                            <p>{"No heroes yet."}</p>
                        </div>
                    },
                    Loadable::Ready(tiles) => html! {
                        <div class="hero-grid">
                            { for tiles.iter().map(|hero| html! {
                                <HeroTile
                                    key={hero.id.0}
                                    hero={hero.clone()}
                                    onselect={on_select.clone()}
                                />
                            })}
                        </div>
                    },
                }
            }
        </div>
    }
}
