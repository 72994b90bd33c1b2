use shared::forms::confirm_delete_book;
use shared::Book;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::hooks::use_library::LibraryHandle;

#[derive(Properties, PartialEq)]
pub struct DeleteBookModalProps {
    pub library: LibraryHandle,
    pub book: Book,
    pub on_close: Callback<()>,
    /// Fired after the delete request settles, whatever its outcome
    pub on_deleted: Callback<()>,
}

#[function_component(DeleteBookModal)]
pub fn delete_book_modal(props: &DeleteBookModalProps) -> Html {
    let is_deleting = use_state(|| false);

    let on_confirm = {
        let library = props.library.clone();
        let book = props.book.clone();
        let is_deleting = is_deleting.clone();
        let on_deleted = props.on_deleted.clone();

        Callback::from(move |_: MouseEvent| {
            if *is_deleting {
                return;
            }
            is_deleting.set(true);

            let library = library.clone();
            let book = book.clone();
            let on_deleted = on_deleted.clone();
            spawn_local(async move {
                confirm_delete_book(&library.api, &library, &book).await;
                on_deleted.emit(());
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Modal title="Delete Book" on_close={props.on_close.clone()}>
            <p class="modal-message">
                {format!("Are you sure you want to delete \"{}\"?", props.book.title)}
            </p>
            <div class="modal-buttons">
                <button class="btn btn-danger" onclick={on_confirm} disabled={*is_deleting}>
                    {if *is_deleting { "Deleting..." } else { "Delete" }}
                </button>
                <button class="btn btn-secondary" onclick={on_cancel} disabled={*is_deleting}>
                    {"Cancel"}
                </button>
            </div>
        </Modal>
    }
}
