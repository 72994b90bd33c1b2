use shared::display::format_date;
use shared::forms::FormMode;
use shared::{CacheStore, Pagination, User, UserId, UserInput};
use yew::prelude::*;

use crate::components::pagination_footer::PaginationFooter;
use crate::components::users::delete_user_modal::DeleteUserModal;
use crate::components::users::user_details_modal::UserDetailsModal;
use crate::components::users::user_form_modal::UserFormModal;
use crate::hooks::use_library::LibraryHandle;

#[derive(Properties, PartialEq)]
pub struct UsersPageProps {
    pub library: LibraryHandle,
}

#[derive(Clone, PartialEq)]
enum UserDialog {
    Closed,
    Create,
    Edit(User),
    Delete(User),
    Details(UserId),
}

#[function_component(UsersPage)]
pub fn users_page(props: &UsersPageProps) -> Html {
    let pagination = use_state(Pagination::default);
    let dialog = use_state(|| UserDialog::Closed);

    use_effect_with((), {
        let library = props.library.clone();
        move |_| {
            library.refresh_users();
            || ()
        }
    });

    let users = props.library.users();
    let page = pagination.clamped(users.len());

    let open = |next: UserDialog| {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(next.clone()))
    };

    let on_close = {
        let dialog = dialog.clone();
        Callback::from(move |_: ()| dialog.set(UserDialog::Closed))
    };

    let on_changed = {
        let dialog = dialog.clone();
        let library = props.library.clone();
        Callback::from(move |_: ()| {
            dialog.set(UserDialog::Closed);
            library.refresh_users();
        })
    };

    let on_page_change = {
        let pagination = pagination.clone();
        Callback::from(move |next: Pagination| pagination.set(next))
    };

    let dialog_view = match (*dialog).clone() {
        UserDialog::Closed => html! {},
        UserDialog::Create => html! {
            <UserFormModal
                library={props.library.clone()}
                mode={FormMode::<UserId>::Create}
                initial={UserInput::default()}
                on_close={on_close.clone()}
                on_saved={on_changed.clone()}
            />
        },
        UserDialog::Edit(user) => html! {
            <UserFormModal
                library={props.library.clone()}
                mode={FormMode::Edit(user.id)}
                initial={UserInput::from(&user)}
                on_close={on_close.clone()}
                on_saved={on_changed.clone()}
            />
        },
        UserDialog::Delete(user) => html! {
            <DeleteUserModal
                library={props.library.clone()}
                {user}
                on_close={on_close.clone()}
                on_deleted={on_changed.clone()}
            />
        },
        UserDialog::Details(user_id) => html! {
            <UserDetailsModal
                library={props.library.clone()}
                {user_id}
                books={props.library.books()}
                on_close={on_close.clone()}
            />
        },
    };

    html! {
        <section class="page users-page">
            <div class="page-header">
                <h2>{"Users"}</h2>
                <div class="page-actions">
                    <button
                        class="btn btn-primary"
                        onclick={open(UserDialog::Create)}
                    >
                        {"Add User"}
                    </button>
                </div>
            </div>

            <div class="table-container">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Email"}</th>
                            <th>{"Joined"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for page.slice(&users).iter().map(|user| html! {
                            <tr key={user.id}>
                                <td>
                                    <button
                                        class="link-button"
                                        onclick={open(UserDialog::Details(user.id))}
                                    >
                                        {user.name.clone()}
                                    </button>
                                </td>
                                <td>{user.email.clone()}</td>
                                <td>{format_date(&user.created_at)}</td>
                                <td class="row-actions">
                                    <button
                                        class="btn btn-small"
                                        onclick={open(UserDialog::Edit(user.clone()))}
                                    >
                                        {"Edit"}
                                    </button>
                                    <button
                                        class="btn btn-small btn-danger"
                                        onclick={open(UserDialog::Delete(user.clone()))}
                                    >
                                        {"Delete"}
                                    </button>
                                </td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>

            <PaginationFooter total={users.len()} pagination={page} on_change={on_page_change} />

            {dialog_view}
        </section>
    }
}
