use shared::display::authors_line;
use shared::import::{add_to_library, fetch_preview, ImportSelection, SelectAllState};
use shared::validation::ImportQuery;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::hooks::use_library::LibraryHandle;

#[derive(Properties, PartialEq)]
pub struct ImportBooksModalProps {
    pub library: LibraryHandle,
    pub on_close: Callback<()>,
    pub on_imported: Callback<()>,
}

#[function_component(ImportBooksModal)]
pub fn import_books_modal(props: &ImportBooksModalProps) -> Html {
    let query = use_state(ImportQuery::default);
    let selection = use_state(ImportSelection::default);
    let is_busy = use_state(|| false);

    let on_keyword_change = {
        let query = query.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(ImportQuery {
                keyword: input.value(),
                ..(*query).clone()
            });
        })
    };

    let on_limit_change = {
        let query = query.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(ImportQuery {
                limit: input.value().trim().parse().unwrap_or(0),
                ..(*query).clone()
            });
        })
    };

    let on_fetch = {
        let library = props.library.clone();
        let query = query.clone();
        let selection = selection.clone();
        let is_busy = is_busy.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let library = library.clone();
            let query = (*query).clone();
            let selection = selection.clone();
            let is_busy = is_busy.clone();

            is_busy.set(true);
            spawn_local(async move {
                if let Some(preview) = fetch_preview(&library.api, &library, &query).await {
                    selection.set(preview);
                }
                is_busy.set(false);
            });
        })
    };

    let on_toggle_all = {
        let selection = selection.clone();
        Callback::from(move |_: Event| {
            let mut next = (*selection).clone();
            let select = next.select_all_state() != SelectAllState::Checked;
            next.set_all(select);
            selection.set(next);
        })
    };

    let on_add = {
        let library = props.library.clone();
        let selection = selection.clone();
        let is_busy = is_busy.clone();
        let on_imported = props.on_imported.clone();

        Callback::from(move |_: MouseEvent| {
            let library = library.clone();
            let current = (*selection).clone();
            let is_busy = is_busy.clone();
            let on_imported = on_imported.clone();

            is_busy.set(true);
            spawn_local(async move {
                let added = add_to_library(&library.api, &library, &current).await;
                is_busy.set(false);
                if added {
                    on_imported.emit(());
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let select_all_state = selection.select_all_state();
    let select_all_class = match select_all_state {
        SelectAllState::Indeterminate => "select-all indeterminate",
        _ => "select-all",
    };

    html! {
        <Modal title="Import Books" on_close={props.on_close.clone()} wide=true>
            <form class="import-query" onsubmit={on_fetch}>
                <div class="form-group">
                    <label for="import-keyword">{"Title keyword"}</label>
                    <input id="import-keyword" type="text" value={query.keyword.clone()}
                        onchange={on_keyword_change} disabled={*is_busy} />
                </div>
                <div class="form-group">
                    <label for="import-limit">{"Number of books"}</label>
                    <input id="import-limit" type="number" min="1"
                        value={query.limit.to_string()}
                        onchange={on_limit_change} disabled={*is_busy} />
                </div>
                <button type="submit" class="btn btn-secondary" disabled={*is_busy}>
                    {"Fetch"}
                </button>
            </form>

            {if selection.is_empty() {
                html! {}
            } else {
                html! {
                    <table class="data-table import-table">
                        <thead>
                            <tr>
                                <th>
                                    <input type="checkbox" class={select_all_class}
                                        checked={select_all_state == SelectAllState::Checked}
                                        onchange={on_toggle_all} />
                                </th>
                                <th>{"Title"}</th>
                                <th>{"Authors"}</th>
                                <th>{"Publisher"}</th>
                                <th>{"ISBN-13"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for selection.books().iter().enumerate().map(|(index, book)| {
                                let on_toggle = {
                                    let selection = selection.clone();
                                    Callback::from(move |_: Event| {
                                        let mut next = (*selection).clone();
                                        next.toggle(index);
                                        selection.set(next);
                                    })
                                };
                                html! {
                                    <tr key={index}>
                                        <td>
                                            <input type="checkbox"
                                                checked={selection.is_selected(index)}
                                                onchange={on_toggle} />
                                        </td>
                                        <td>{book.title.clone()}</td>
                                        <td>{authors_line(book)}</td>
                                        <td>{book.publisher.clone()}</td>
                                        <td>{book.isbn13.clone().unwrap_or_default()}</td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                }
            }}

            <div class="modal-buttons">
                <button class="btn btn-primary" onclick={on_add} disabled={*is_busy}>
                    {format!("Add to Library ({})", selection.selected_count())}
                </button>
                <button class="btn btn-secondary" onclick={on_cancel} disabled={*is_busy}>
                    {"Cancel"}
                </button>
            </div>
        </Modal>
    }
}
