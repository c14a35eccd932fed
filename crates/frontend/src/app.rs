//! Main application component with routing.

use hero_types::AppRoute;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::AppConfig;
use crate::pages::{DashboardPage, HeroDetailPage, HeroesPage, NotFoundPage};
use crate::services::AppContext;

/// Application routes.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/heroes")]
    Heroes,
    #[at("/detail/:id")]
    HeroDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<AppRoute> for Route {
    fn from(route: AppRoute) -> Self {
        match route {
            AppRoute::Dashboard => Route::Dashboard,
            AppRoute::Heroes => Route::Heroes,
            AppRoute::Detail(id) => Route::HeroDetail { id: id.to_string() },
            AppRoute::NotFound => Route::NotFound,
        }
    }
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::from(AppRoute::DEFAULT)} /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Heroes => html! { <HeroesPage /> },
        Route::HeroDetail { id } => html! { <HeroDetailPage hero_id={id} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let context = use_state(|| AppContext::new(AppConfig::from_env()));
    let title = context.config.title.clone();

    html! {
        <ContextProvider<AppContext> context={(*context).clone()}>
            <BrowserRouter>
                <div class="app-container">
                    <NavBar {title} />
                    <main class="main-content">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </BrowserRouter>
        </ContextProvider<AppContext>>
    }
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    title: AttrValue,
}

/// Top navigation bar.
#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    let route = use_route::<Route>();
    let class_for = |target: Route| {
        let active = match (&route, &target) {
            (Some(Route::HeroDetail { .. }), Route::Heroes) => false,
            (Some(current), target) => current == target,
            (None, _) => false,
        };
        if active { "nav-link active" } else { "nav-link" }
    };

    html! {
        <header class="nav-bar">
            <h1 class="nav-brand">{ &props.title }</h1>
            <nav class="nav-links">
                <Link<Route> to={Route::Dashboard} classes={classes!(class_for(Route::Dashboard))}>
                    {"Dashboard"}
                </Link<Route>>
                <Link<Route> to={Route::Heroes} classes={classes!(class_for(Route::Heroes))}>
                    {"Heroes"}
                </Link<Route>>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hero_types::HeroId;

    #[test]
    fn test_app_routes_map_to_router_paths() {
        for route in [
            AppRoute::Dashboard,
            AppRoute::Heroes,
            AppRoute::Detail(HeroId(11)),
            AppRoute::NotFound,
        ] {
            assert_eq!(Route::from(route).to_path(), route.path());
        }
    }

    #[test]
    fn test_detail_route_carries_raw_id() {
        assert_eq!(
            Route::recognize("/detail/15"),
            Some(Route::HeroDetail { id: "15".to_string() })
        );
    }

    #[test]
    fn test_non_numeric_detail_id_reaches_detail_page() {
        // The detail page turns the raw id into its "not a hero id" card.
        assert_eq!(
            Route::recognize("/detail/abc"),
            Some(Route::HeroDetail { id: "abc".to_string() })
        );
    }

    #[test]
    fn test_root_is_home() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }
}
