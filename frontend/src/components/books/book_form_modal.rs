use shared::forms::{submit_book, FormMode};
use shared::{BookId, BookInput};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::hooks::use_library::LibraryHandle;

#[derive(Properties, PartialEq)]
pub struct BookFormModalProps {
    pub library: LibraryHandle,
    pub mode: FormMode<BookId>,
    /// Values the form opens with: empty on create, the book on edit
    pub initial: BookInput,
    pub on_close: Callback<()>,
    pub on_saved: Callback<()>,
}

fn text_handler(
    draft: &UseStateHandle<BookInput>,
    apply: fn(&mut BookInput, String),
) -> Callback<Event> {
    let draft = draft.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, input.value());
        draft.set(next);
    })
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn number(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

#[function_component(BookFormModal)]
pub fn book_form_modal(props: &BookFormModalProps) -> Html {
    let draft = use_state(|| props.initial.clone());
    let pending_author = use_state(String::new);
    let is_submitting = use_state(|| false);

    // Reset when reopened for another book
    use_effect_with(props.initial.clone(), {
        let draft = draft.clone();
        let pending_author = pending_author.clone();
        move |initial: &BookInput| {
            draft.set(initial.clone());
            pending_author.set(String::new());
            || ()
        }
    });

    let on_title_change = text_handler(&draft, |d, v| d.title = v);
    let on_publisher_change = text_handler(&draft, |d, v| d.publisher = v);
    let on_language_change = text_handler(&draft, |d, v| d.language_code = optional(v));
    let on_isbn_change = text_handler(&draft, |d, v| d.isbn = optional(v));
    let on_isbn13_change = text_handler(&draft, |d, v| d.isbn13 = optional(v));
    let on_date_change = text_handler(&draft, |d, v| d.publication_date = optional(v));
    let on_stock_change = text_handler(&draft, |d, v| d.stock_quantity = number(&v));
    let on_pages_change = text_handler(&draft, |d, v| d.num_pages = number(&v));

    let on_author_input = {
        let pending_author = pending_author.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            pending_author.set(input.value());
        })
    };

    let on_add_author = {
        let draft = draft.clone();
        let pending_author = pending_author.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            if next.add_author(&pending_author) {
                draft.set(next);
                pending_author.set(String::new());
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        let library = props.library.clone();
        let mode = props.mode;
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            is_submitting.set(true);

            let input = (*draft).clone();
            let is_submitting = is_submitting.clone();
            let library = library.clone();
            let on_saved = on_saved.clone();

            spawn_local(async move {
                let saved = submit_book(&library.api, &library, mode, &input).await;
                is_submitting.set(false);
                if saved {
                    on_saved.emit(());
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let (title, submit_label) = if props.mode.is_editing() {
        ("Edit Book", "Save")
    } else {
        ("Add Book", "Create")
    };

    html! {
        <Modal title={title} on_close={props.on_close.clone()} wide=true>
            <form class="book-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="book-title">{"Title"}</label>
                    <input id="book-title" type="text" value={draft.title.clone()}
                        onchange={on_title_change} disabled={*is_submitting} />
                </div>

                <div class="form-group">
                    <label for="book-author">{"Authors"}</label>
                    <div class="author-entry">
                        <input id="book-author" type="text" placeholder="Author name"
                            value={(*pending_author).clone()} oninput={on_author_input}
                            disabled={*is_submitting} />
                        <button type="button" class="btn btn-secondary"
                            onclick={on_add_author} disabled={*is_submitting}>
                            {"Add Author"}
                        </button>
                    </div>
                    <div class="author-chips">
                        {for draft.authors.iter().enumerate().map(|(index, author)| {
                            let on_remove = {
                                let draft = draft.clone();
                                Callback::from(move |_: MouseEvent| {
                                    let mut next = (*draft).clone();
                                    next.remove_author(index);
                                    draft.set(next);
                                })
                            };
                            html! {
                                <span class="chip" key={index}>
                                    {author.clone()}
                                    <button type="button" class="chip-remove" onclick={on_remove}>
                                        {"×"}
                                    </button>
                                </span>
                            }
                        })}
                    </div>
                </div>

                <div class="form-group">
                    <label for="book-publisher">{"Publisher"}</label>
                    <input id="book-publisher" type="text" value={draft.publisher.clone()}
                        onchange={on_publisher_change} disabled={*is_submitting} />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="book-language">{"Language code"}</label>
                        <input id="book-language" type="text"
                            value={draft.language_code.clone().unwrap_or_default()}
                            onchange={on_language_change} disabled={*is_submitting} />
                    </div>
                    <div class="form-group">
                        <label for="book-date">{"Publication date"}</label>
                        <input id="book-date" type="date"
                            value={draft.publication_date.clone().unwrap_or_default()}
                            onchange={on_date_change} disabled={*is_submitting} />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="book-isbn">{"ISBN"}</label>
                        <input id="book-isbn" type="text"
                            value={draft.isbn.clone().unwrap_or_default()}
                            onchange={on_isbn_change} disabled={*is_submitting} />
                    </div>
                    <div class="form-group">
                        <label for="book-isbn13">{"ISBN-13"}</label>
                        <input id="book-isbn13" type="text"
                            value={draft.isbn13.clone().unwrap_or_default()}
                            onchange={on_isbn13_change} disabled={*is_submitting} />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="book-stock">{"Stock quantity"}</label>
                        <input id="book-stock" type="number" min="0"
                            value={draft.stock_quantity.to_string()}
                            onchange={on_stock_change} disabled={*is_submitting} />
                    </div>
                    <div class="form-group">
                        <label for="book-pages">{"Number of pages"}</label>
                        <input id="book-pages" type="number" min="0"
                            value={draft.num_pages.to_string()}
                            onchange={on_pages_change} disabled={*is_submitting} />
                    </div>
                </div>

                <div class="modal-buttons">
                    <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                        {submit_label}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel}
                        disabled={*is_submitting}>
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
