//! Hero list item component.

use hero_types::{Hero, HeroId};
use yew::prelude::*;

/// Properties for HeroListItem component.
#[derive(Properties, PartialEq)]
pub struct HeroListItemProps {
    pub hero: Hero,
    pub selected: bool,
    pub onselect: Callback<HeroId>,
    pub ondelete: Callback<HeroId>,
}

/// Hero list item component.
#[function_component(HeroListItem)]
pub fn hero_list_item(props: &HeroListItemProps) -> Html {
    let hero = &props.hero;
    let id = hero.id;

    let onclick = props.onselect.reform(move |_: MouseEvent| id);
    let on_delete = {
        let ondelete = props.ondelete.clone();
        Callback::from(move |e: MouseEvent| {
            // Deleting must not also select the row.
            e.stop_propagation();
            ondelete.emit(id);
        })
    };

    let class = if props.selected {
        "hero-item selected"
    } else {
        "hero-item"
    };

    html! {
        <li {class} {onclick}>
            <span class="hero-id">{ hero.id.to_string() }</span>
            <span class="hero-name">{ &hero.name }</span>
            <button class="btn btn-delete" title="delete hero" onclick={on_delete}>
                {"x"}
            </button>
        </li>
    }
}
