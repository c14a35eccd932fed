use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::ErrorBanner;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <ErrorBanner
            title="404 - Page Not Found"
            message={AttrValue::from("The page you're looking for doesn't exist.")}
        >
            <Link<Route> to={Route::Dashboard} classes="btn btn-primary">
                {"Back to the dashboard"}
            </Link<Route>>
        </ErrorBanner>
    }
}
