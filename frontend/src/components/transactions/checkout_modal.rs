use shared::circulation::submit_checkout;
use shared::display::{find_book, find_user};
use shared::validation::CheckoutDraft;
use shared::{Book, User};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::hooks::use_library::LibraryHandle;

#[derive(Properties, PartialEq)]
pub struct CheckoutModalProps {
    pub library: LibraryHandle,
    pub users: Vec<User>,
    pub books: Vec<Book>,
    pub on_close: Callback<()>,
    pub on_issued: Callback<()>,
    /// Some copies were issued before a failure; the modal stays open
    pub on_partially_issued: Callback<()>,
}

fn initial_draft() -> CheckoutDraft {
    CheckoutDraft {
        user_id: None,
        book_id: None,
        quantity: 1,
    }
}

#[function_component(CheckoutModal)]
pub fn checkout_modal(props: &CheckoutModalProps) -> Html {
    let draft = use_state(initial_draft);
    let is_submitting = use_state(|| false);

    let on_user_change = {
        let draft = draft.clone();
        let users = props.users.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let user_id = select
                .value()
                .parse()
                .ok()
                .and_then(|id| find_user(&users, id))
                .map(|user| user.id);
            draft.set(CheckoutDraft { user_id, ..*draft });
        })
    };

    let on_book_change = {
        let draft = draft.clone();
        let books = props.books.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let book_id = select
                .value()
                .parse()
                .ok()
                .and_then(|id| find_book(&books, id))
                .map(|book| book.id);
            draft.set(CheckoutDraft { book_id, ..*draft });
        })
    };

    let on_quantity_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let quantity = input.value().trim().parse().unwrap_or(0);
            draft.set(CheckoutDraft { quantity, ..*draft });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        let library = props.library.clone();
        let on_issued = props.on_issued.clone();
        let on_partially_issued = props.on_partially_issued.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            is_submitting.set(true);

            let current = *draft;
            let draft = draft.clone();
            let is_submitting = is_submitting.clone();
            let library = library.clone();
            let on_issued = on_issued.clone();
            let on_partially_issued = on_partially_issued.clone();

            spawn_local(async move {
                let outcome = submit_checkout(&library.api, &library, &current).await;
                is_submitting.set(false);
                if outcome.closes_modal() {
                    draft.set(initial_draft());
                    on_issued.emit(());
                } else if outcome.needs_refresh() {
                    on_partially_issued.emit(());
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Modal title="Issue Books" on_close={props.on_close.clone()}>
            <form class="checkout-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="checkout-user">{"User"}</label>
                    <select id="checkout-user" onchange={on_user_change} disabled={*is_submitting}>
                        <option value="" selected={draft.user_id.is_none()}>
                            {"Select a user"}
                        </option>
                        {for props.users.iter().map(|user| html! {
                            <option
                                key={user.id}
                                value={user.id.to_string()}
                                selected={draft.user_id == Some(user.id)}
                            >
                                {format!("{} ({})", user.name, user.email)}
                            </option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="checkout-book">{"Book"}</label>
                    <select id="checkout-book" onchange={on_book_change} disabled={*is_submitting}>
                        <option value="" selected={draft.book_id.is_none()}>
                            {"Select a book"}
                        </option>
                        {for props.books.iter().map(|book| html! {
                            <option
                                key={book.id}
                                value={book.id.to_string()}
                                selected={draft.book_id == Some(book.id)}
                            >
                                {book.title.clone()}
                            </option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="checkout-quantity">{"Number of books"}</label>
                    <input
                        id="checkout-quantity"
                        type="number"
                        min="1"
                        value={draft.quantity.to_string()}
                        onchange={on_quantity_change}
                        disabled={*is_submitting}
                    />
                </div>
                <div class="modal-buttons">
                    <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                        {if *is_submitting { "Issuing..." } else { "Issue" }}
                    </button>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        onclick={on_cancel}
                        disabled={*is_submitting}
                    >
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
