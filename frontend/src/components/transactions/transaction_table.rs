use yew::prelude::*;
use shared::display::{book_title, format_date, user_name};
use shared::{Book, Transaction, TransactionStatus, User};

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    /// Rows of the current page
    pub transactions: Vec<Transaction>,
    pub users: Vec<User>,
    pub books: Vec<Book>,
    pub on_toggle_status: Callback<Transaction>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    if props.transactions.is_empty() {
        return html! { <div class="empty-table">{"No books have been issued yet"}</div> };
    }

    html! {
        <div class="table-container">
            <table class="data-table transactions-table">
                <thead>
                    <tr>
                        <th>{"User"}</th>
                        <th>{"Book"}</th>
                        <th>{"Issued"}</th>
                        <th>{"Status"}</th>
                        <th>{"Action"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.transactions.iter().map(|transaction| {
                        let status_class = match transaction.status {
                            TransactionStatus::Pending => "status pending",
                            TransactionStatus::Completed => "status completed",
                        };
                        let on_toggle = {
                            let on_toggle_status = props.on_toggle_status.clone();
                            let transaction = transaction.clone();
                            Callback::from(move |_: MouseEvent| {
                                on_toggle_status.emit(transaction.clone());
                            })
                        };

                        html! {
                            <tr key={transaction.id}>
                                <td>{user_name(&props.users, transaction.user_id)}</td>
                                <td>{book_title(&props.books, transaction.book_id)}</td>
                                <td class="date">{format_date(&transaction.created_at)}</td>
                                <td class={status_class}>{transaction.status.to_string()}</td>
                                <td>
                                    <button class="btn btn-small" onclick={on_toggle}>
                                        {transaction.status.action_label()}
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
