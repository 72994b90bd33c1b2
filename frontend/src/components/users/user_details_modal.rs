use shared::display::{book_title, format_date};
use shared::{Book, LibraryApi, Notifier, Toast, User, UserId, UserTransactions};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::hooks::use_library::LibraryHandle;

#[derive(Properties, PartialEq)]
pub struct UserDetailsModalProps {
    pub library: LibraryHandle,
    pub user_id: UserId,
    pub books: Vec<Book>,
    pub on_close: Callback<()>,
}

/// Profile plus borrowing history of one member
#[function_component(UserDetailsModal)]
pub fn user_details_modal(props: &UserDetailsModalProps) -> Html {
    let user = use_state(|| Option::<User>::None);
    let history = use_state(|| Option::<UserTransactions>::None);
    let loading = use_state(|| true);

    use_effect_with(props.user_id, {
        let library = props.library.clone();
        let user = user.clone();
        let history = history.clone();
        let loading = loading.clone();
        move |user_id: &UserId| {
            let user_id = *user_id;
            loading.set(true);
            spawn_local(async move {
                let profile = library.api.get_user(user_id).await;
                let transactions = library.api.list_user_transactions(user_id).await;
                if profile.is_none() || transactions.is_none() {
                    library.notify(Toast::generic_failure());
                }
                user.set(profile);
                history.set(transactions);
                loading.set(false);
            });
            || ()
        }
    });

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let body = if *loading {
        html! { <p class="modal-message">{"Loading..."}</p> }
    } else {
        match ((*user).clone(), (*history).clone()) {
            (Some(user), Some(history)) => html! {
                <>
                    <dl class="details-list">
                        <dt>{"Name"}</dt>
                        <dd>{user.name.clone()}</dd>
                        <dt>{"Email"}</dt>
                        <dd>{user.email.clone()}</dd>
                        <dt>{"Member since"}</dt>
                        <dd>{format_date(&user.created_at)}</dd>
                        <dt>{"Books borrowed"}</dt>
                        <dd>{history.borrowed_count().to_string()}</dd>
                        <dt>{"Total due"}</dt>
                        <dd>{format!("${:.2}", history.total_due)}</dd>
                    </dl>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Book"}</th>
                                <th>{"Status"}</th>
                                <th>{"Issued"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for history.transactions.iter().map(|t| html! {
                                <tr key={t.id}>
                                    <td>{book_title(&props.books, t.book_id).to_string()}</td>
                                    <td>{t.status.to_string()}</td>
                                    <td>{format_date(&t.created_at)}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </>
            },
            _ => html! { <p class="modal-message">{"User details are unavailable"}</p> },
        }
    };

    html! {
        <Modal title="User Details" on_close={props.on_close.clone()} wide=true>
            {body}
            <div class="modal-buttons">
                <button class="btn btn-secondary" onclick={on_close}>{"Close"}</button>
            </div>
        </Modal>
    }
}
