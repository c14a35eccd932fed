//! Dashboard tile for a single hero.

use hero_types::{Hero, HeroId};
use yew::prelude::*;

/// Properties for HeroTile component.
#[derive(Properties, PartialEq)]
pub struct HeroTileProps {
    pub hero: Hero,
    pub onselect: Callback<HeroId>,
}

/// Hero tile component.
#[function_component(HeroTile)]
pub fn hero_tile(props: &HeroTileProps) -> Html {
    let id = props.hero.id;
    let onclick = props.onselect.reform(move |_: MouseEvent| id);

    html! {
        <button class="card hero-tile" {onclick}>
            <div class="hero-tile-name">{ &props.hero.name }</div>
        </button>
    }
}
