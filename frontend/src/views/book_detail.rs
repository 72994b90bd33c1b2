use shared::display::{authors_line, format_date};
use shared::{Book, BookId, LibraryApi, Notifier, Toast};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_library::LibraryHandle;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct BookDetailPageProps {
    pub library: LibraryHandle,
    pub id: BookId,
}

#[function_component(BookDetailPage)]
pub fn book_detail_page(props: &BookDetailPageProps) -> Html {
    let book = use_state(|| Option::<Book>::None);
    let loaded = use_state(|| false);

    use_effect_with(props.id, {
        let library = props.library.clone();
        let book = book.clone();
        let loaded = loaded.clone();
        move |id: &BookId| {
            let id = *id;
            loaded.set(false);
            spawn_local(async move {
                library.set_loading(true);
                let fetched = library.api.get_book(id).await;
                library.set_loading(false);
                if fetched.is_none() {
                    library.notify(Toast::error("Failed to fetch book"));
                }
                book.set(fetched);
                loaded.set(true);
            });
            || ()
        }
    });

    let optional = |value: Option<&str>| value.map_or_else(|| "-".to_string(), str::to_string);

    let body = match (*loaded, (*book).clone()) {
        (false, _) => html! {},
        (true, None) => html! { <p class="empty-table">{"Book not found"}</p> },
        (true, Some(book)) => html! {
            <div class="book-detail">
                <h2>{book.title.clone()}</h2>
                <p class="book-authors">{authors_line(&book)}</p>
                <dl class="details-list">
                    <dt>{"Publisher"}</dt>
                    <dd>{book.publisher.clone()}</dd>
                    <dt>{"Published"}</dt>
                    <dd>
                        {book.publication_date.as_deref().map_or_else(|| "-".into(), format_date)}
                    </dd>
                    <dt>{"Language"}</dt>
                    <dd>{optional(book.language_code.as_deref())}</dd>
                    <dt>{"ISBN"}</dt>
                    <dd>{optional(book.isbn.as_deref())}</dd>
                    <dt>{"ISBN-13"}</dt>
                    <dd>{optional(book.isbn13.as_deref())}</dd>
                    <dt>{"Pages"}</dt>
                    <dd>{book.num_pages.to_string()}</dd>
                    <dt>{"In stock"}</dt>
                    <dd>{book.stock_quantity.to_string()}</dd>
                    <dt>{"Added"}</dt>
                    <dd>{format_date(&book.created_at)}</dd>
                </dl>
            </div>
        },
    };

    html! {
        <section class="page book-detail-page">
            <Link<Route> to={Route::Books} classes="back-link">{"← Back to books"}</Link<Route>>
            {body}
        </section>
    }
}
