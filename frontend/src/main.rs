use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
mod routes;
mod services;
mod views;

use components::header::Header;
use components::loading_overlay::LoadingOverlay;
use components::toaster::Toaster;
use hooks::use_library::use_library;
use routes::{switch, Route};
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let library = use_library();

    // Load every collection once on startup
    use_effect_with((), {
        let library = library.clone();
        move |_| {
            library.refresh_all();
            || ()
        }
    });

    let render = {
        let library = library.clone();
        Callback::from(move |route: Route| switch(route, &library))
    };

    let on_dismiss_toast = {
        let library = library.clone();
        Callback::from(move |id: u32| library.dismiss_toast(id))
    };

    html! {
        <BrowserRouter>
            <div class="app">
                <Header />
                <main class="main">
                    <div class="container">
                        <Switch<Route> {render} />
                    </div>
                </main>
                <LoadingOverlay loading={library.loading()} />
                <Toaster toasts={library.toasts()} on_dismiss={on_dismiss_toast} />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    Logger::init();
    log::info!("Starting library frontend");
    yew::Renderer::<App>::new().render();
}
