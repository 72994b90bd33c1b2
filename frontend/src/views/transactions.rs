use shared::circulation::toggle_status;
use shared::{CacheStore, Pagination, Transaction};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::pagination_footer::PaginationFooter;
use crate::components::transactions::{CheckoutModal, TransactionTable};
use crate::hooks::use_library::LibraryHandle;

#[derive(Properties, PartialEq)]
pub struct TransactionsPageProps {
    pub library: LibraryHandle,
}

/// Checkout desk: issue books and mark them returned
#[function_component(TransactionsPage)]
pub fn transactions_page(props: &TransactionsPageProps) -> Html {
    let pagination = use_state(Pagination::default);
    let checkout_open = use_state(|| false);

    use_effect_with((), {
        let library = props.library.clone();
        move |_| {
            library.refresh_transactions();
            || ()
        }
    });

    let transactions = props.library.transactions();
    let users = props.library.users();
    let books = props.library.books();
    let page = pagination.clamped(transactions.len());

    let on_open_checkout = {
        let checkout_open = checkout_open.clone();
        Callback::from(move |_: MouseEvent| checkout_open.set(true))
    };

    let on_close = {
        let checkout_open = checkout_open.clone();
        Callback::from(move |_: ()| checkout_open.set(false))
    };

    let on_issued = {
        let checkout_open = checkout_open.clone();
        let library = props.library.clone();
        Callback::from(move |_: ()| {
            checkout_open.set(false);
            library.refresh_transactions();
        })
    };

    let on_partially_issued = {
        let library = props.library.clone();
        Callback::from(move |_: ()| library.refresh_transactions())
    };

    let on_toggle_status = {
        let library = props.library.clone();
        Callback::from(move |transaction: Transaction| {
            let library = library.clone();
            spawn_local(async move {
                toggle_status(&library.api, &library, &library, &transaction).await;
            });
        })
    };

    let on_page_change = {
        let pagination = pagination.clone();
        Callback::from(move |next: Pagination| pagination.set(next))
    };

    html! {
        <section class="page transactions-page">
            <div class="page-header">
                <h2>{"Checkout"}</h2>
                <div class="page-actions">
                    <button class="btn btn-primary" onclick={on_open_checkout}>
                        {"Issue Books"}
                    </button>
                </div>
            </div>

            <TransactionTable
                transactions={page.slice(&transactions).to_vec()}
                users={users.clone()}
                books={books.clone()}
                {on_toggle_status}
            />

            <PaginationFooter
                total={transactions.len()}
                pagination={page}
                on_change={on_page_change}
            />

            {if *checkout_open {
                html! {
                    <CheckoutModal
                        library={props.library.clone()}
                        {users}
                        {books}
                        {on_close}
                        {on_issued}
                        {on_partially_issued}
                    />
                }
            } else {
                html! {}
            }}
        </section>
    }
}
