use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <section class="page error-page">
            <h2>{"Oops! Page not found"}</h2>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Dashboard} classes="btn btn-primary">{"Go home"}</Link<Route>>
        </section>
    }
}
