use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let current = use_route::<Route>().unwrap_or(Route::NotFound);

    html! {
        <header class="header">
            <div class="container">
                <h1>{"📚 Library Manager"}</h1>
                <nav class="header-nav">
                    {for Route::NAVIGATION.iter().map(|(route, label)| {
                        let classes = if current.is_within(route) {
                            "nav-link active"
                        } else {
                            "nav-link"
                        };
                        html! {
                            <Link<Route> to={route.clone()} classes={classes!(classes)}>
                                {*label}
                            </Link<Route>>
                        }
                    })}
                </nav>
            </div>
        </header>
    }
}
