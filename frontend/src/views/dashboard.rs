use shared::display::LibraryStats;
use shared::CacheStore;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_library::LibraryHandle;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub library: LibraryHandle,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let library = &props.library;
    let stats = LibraryStats::collect(
        &library.books(),
        &library.users(),
        &library.transactions(),
    );

    let card = |label: &'static str, value: String, route: Route| {
        html! {
            <Link<Route> to={route} classes="stat-card">
                <span class="stat-value">{value}</span>
                <span class="stat-label">{label}</span>
            </Link<Route>>
        }
    };

    html! {
        <section class="page dashboard-page">
            <h2>{"Dashboard"}</h2>
            <div class="stat-grid">
                {card("Titles", stats.titles.to_string(), Route::Books)}
                {card("Copies in stock", stats.copies_in_stock.to_string(), Route::Books)}
                {card("Members", stats.members.to_string(), Route::Users)}
                {card("Books out", stats.books_out.to_string(), Route::Checkout)}
            </div>
        </section>
    }
}
