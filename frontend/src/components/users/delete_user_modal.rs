use shared::forms::confirm_delete_user;
use shared::User;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::hooks::use_library::LibraryHandle;

#[derive(Properties, PartialEq)]
pub struct DeleteUserModalProps {
    pub library: LibraryHandle,
    pub user: User,
    pub on_close: Callback<()>,
    pub on_deleted: Callback<()>,
}

#[function_component(DeleteUserModal)]
pub fn delete_user_modal(props: &DeleteUserModalProps) -> Html {
    let is_deleting = use_state(|| false);

    let on_confirm = {
        let library = props.library.clone();
        let user = props.user.clone();
        let is_deleting = is_deleting.clone();
        let on_deleted = props.on_deleted.clone();

        Callback::from(move |_: MouseEvent| {
            if *is_deleting {
                return;
            }
            is_deleting.set(true);

            let library = library.clone();
            let user = user.clone();
            let on_deleted = on_deleted.clone();
            spawn_local(async move {
                confirm_delete_user(&library.api, &library, &user).await;
                on_deleted.emit(());
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Modal title="Delete User" on_close={props.on_close.clone()}>
            <p class="modal-message">
                {format!("Are you sure you want to delete {}?", props.user.name)}
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
