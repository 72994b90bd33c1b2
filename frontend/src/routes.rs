use shared::BookId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_library::LibraryHandle;
use crate::views::book_detail::BookDetailPage;
use crate::views::books::BooksPage;
use crate::views::dashboard::DashboardPage;
use crate::views::error_page::ErrorPage;
use crate::views::transactions::TransactionsPage;
use crate::views::users::UsersPage;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/books")]
    Books,
    #[at("/books/:id")]
    BookDetail { id: BookId },
    #[at("/users")]
    Users,
    #[at("/checkout")]
    Checkout,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Entries of the navigation bar, in display order
    pub const NAVIGATION: [(Route, &'static str); 4] = [
        (Route::Dashboard, "Dashboard"),
        (Route::Books, "Books"),
        (Route::Users, "Users"),
        (Route::Checkout, "Checkout"),
    ];

    /// Whether `self` belongs to the section of `nav`
    pub fn is_within(&self, nav: &Route) -> bool {
        match (self, nav) {
            (Route::BookDetail { .. }, Route::Books) => true,
            _ => self == nav,
        }
    }
}

pub fn switch(route: Route, library: &LibraryHandle) -> Html {
    let library = library.clone();
    match route {
        Route::Dashboard => html! { <DashboardPage {library} /> },
        Route::Books => html! { <BooksPage {library} /> },
        Route::BookDetail { id } => html! { <BookDetailPage {library} {id} /> },
        Route::Users => html! { <UsersPage {library} /> },
        Route::Checkout => html! { <TransactionsPage {library} /> },
        Route::NotFound => html! { <ErrorPage /> },
    }
}
