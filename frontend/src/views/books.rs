use shared::display::{authors_line, format_date};
use shared::forms::FormMode;
use shared::{Book, BookId, BookInput, CacheStore, Pagination};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::books::book_form_modal::BookFormModal;
use crate::components::books::delete_book_modal::DeleteBookModal;
use crate::components::books::import_books_modal::ImportBooksModal;
use crate::components::pagination_footer::PaginationFooter;
use crate::hooks::use_library::LibraryHandle;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct BooksPageProps {
    pub library: LibraryHandle,
}

/// Which dialog, if any, is open over the table
#[derive(Clone, PartialEq)]
enum BookDialog {
    Closed,
    Create,
    Edit(Book),
    Delete(Book),
    Import,
}

#[function_component(BooksPage)]
pub fn books_page(props: &BooksPageProps) -> Html {
    let pagination = use_state(Pagination::default);
    let dialog = use_state(|| BookDialog::Closed);

    use_effect_with((), {
        let library = props.library.clone();
        move |_| {
            library.refresh_books();
            || ()
        }
    });

    let books = props.library.books();
    let page = pagination.clamped(books.len());

    let open = |next: BookDialog| {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(next.clone()))
    };

    let on_close = {
        let dialog = dialog.clone();
        Callback::from(move |_: ()| dialog.set(BookDialog::Closed))
    };

    // Mutations close the dialog and reload the list
    let on_changed = {
        let dialog = dialog.clone();
        let library = props.library.clone();
        Callback::from(move |_: ()| {
            dialog.set(BookDialog::Closed);
            library.refresh_books();
        })
    };

    let on_page_change = {
        let pagination = pagination.clone();
        Callback::from(move |next: Pagination| pagination.set(next))
    };

    let dialog_view = match (*dialog).clone() {
        BookDialog::Closed => html! {},
        BookDialog::Create => html! {
            <BookFormModal
                library={props.library.clone()}
                mode={FormMode::<BookId>::Create}
                initial={BookInput::default()}
                on_close={on_close.clone()}
                on_saved={on_changed.clone()}
            />
        },
        BookDialog::Edit(book) => html! {
            <BookFormModal
                library={props.library.clone()}
                mode={FormMode::Edit(book.id)}
                initial={BookInput::from(&book)}
                on_close={on_close.clone()}
                on_saved={on_changed.clone()}
            />
        },
        BookDialog::Delete(book) => html! {
            <DeleteBookModal
                library={props.library.clone()}
                {book}
                on_close={on_close.clone()}
                on_deleted={on_changed.clone()}
            />
        },
        BookDialog::Import => html! {
            <ImportBooksModal
                library={props.library.clone()}
                on_close={on_close.clone()}
                on_imported={on_changed.clone()}
            />
        },
    };

    html! {
        <section class="page books-page">
            <div class="page-header">
                <h2>{"Books"}</h2>
                <div class="page-actions">
                    <button
                        class="btn btn-secondary"
                        onclick={open(BookDialog::Import)}
                    >
                        {"Import Books"}
                    </button>
                    <button
                        class="btn btn-primary"
                        onclick={open(BookDialog::Create)}
                    >
                        {"Add Book"}
                    </button>
                </div>
            </div>

            <div class="table-container">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Title"}</th>
                            <th>{"Authors"}</th>
                            <th>{"Publisher"}</th>
                            <th>{"Published"}</th>
                            <th>{"Stock"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for page.slice(&books).iter().map(|book| html! {
                            <tr key={book.id}>
                                <td>
                                    <Link<Route> to={Route::BookDetail { id: book.id }}>
                                        {book.title.clone()}
                                    </Link<Route>>
                                </td>
                                <td>{authors_line(book)}</td>
                                <td>{book.publisher.clone()}</td>
                                <td>
                                    {book
                                        .publication_date
                                        .as_deref()
                                        .map(format_date)
                                        .unwrap_or_default()}
                                </td>
                                <td>{book.stock_quantity.to_string()}</td>
                                <td class="row-actions">
                                    <button
                                        class="btn btn-small"
                                        onclick={open(BookDialog::Edit(book.clone()))}
                                    >
                                        {"Edit"}
                                    </button>
                                    <button
                                        class="btn btn-small btn-danger"
                                        onclick={open(BookDialog::Delete(book.clone()))}
                                    >
                                        {"Delete"}
                                    </button>
                                </td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>

            <PaginationFooter total={books.len()} pagination={page} on_change={on_page_change} />

            {dialog_view}
        </section>
    }
}
