use shared::forms::{submit_user, FormMode};
use shared::{UserId, UserInput};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::hooks::use_library::LibraryHandle;

#[derive(Properties, PartialEq)]
pub struct UserFormModalProps {
    pub library: LibraryHandle,
    pub mode: FormMode<UserId>,
    pub initial: UserInput,
    pub on_close: Callback<()>,
    pub on_saved: Callback<()>,
}

#[function_component(UserFormModal)]
pub fn user_form_modal(props: &UserFormModalProps) -> Html {
    let name = use_state(|| props.initial.name.clone());
    let email = use_state(|| props.initial.email.clone());
    let is_submitting = use_state(|| false);

    use_effect_with(props.initial.clone(), {
        let name = name.clone();
        let email = email.clone();
        move |initial: &UserInput| {
            name.set(initial.name.clone());
            email.set(initial.email.clone());
            || ()
        }
    });

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
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

            let input = UserInput {
                email: (*email).clone(),
                name: (*name).clone(),
            };
            let is_submitting = is_submitting.clone();
            let library = library.clone();
            let on_saved = on_saved.clone();

            spawn_local(async move {
                let saved = submit_user(&library.api, &library, mode, &input).await;
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

    let title = if props.mode.is_editing() { "Edit User" } else { "Add User" };

    html! {
        <Modal title={title} on_close={props.on_close.clone()}>
            <form class="user-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="user-name">{"Name"}</label>
                    <input
                        id="user-name"
                        type="text"
                        placeholder="Full name"
                        value={(*name).clone()}
                        onchange={on_name_change}
                        disabled={*is_submitting}
                        autofocus=true
                    />
                </div>
                <div class="form-group">
                    <label for="user-email">{"Email"}</label>
                    <input
                        id="user-email"
                        type="email"
                        placeholder="name@example.com"
                        value={(*email).clone()}
                        onchange={on_email_change}
                        disabled={*is_submitting}
                    />
                </div>
                <div class="modal-buttons">
                    <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                        {if *is_submitting { "Saving..." } else { "Save" }}
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
