use shared::pagination::ROWS_PER_PAGE_OPTIONS;
use shared::Pagination;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationFooterProps {
    pub total: usize,
    pub pagination: Pagination,
    pub on_change: Callback<Pagination>,
}

#[function_component(PaginationFooter)]
pub fn pagination_footer(props: &PaginationFooterProps) -> Html {
    let pagination = props.pagination;
    let total = props.total;

    let on_rows_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(rows) = select.value().parse::<usize>() {
                on_change.emit(pagination.with_rows_per_page(rows));
            }
        })
    };

    let on_previous = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(pagination.previous()))
    };

    let on_next = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(pagination.next(total)))
    };

    html! {
        <div class="pagination-footer">
            <label class="rows-per-page">
                {"Rows per page:"}
                <select onchange={on_rows_change}>
                    {for ROWS_PER_PAGE_OPTIONS.iter().map(|rows| html! {
                        <option
                            value={rows.to_string()}
                            selected={*rows == pagination.rows_per_page()}
                        >
                            {rows.to_string()}
                        </option>
                    })}
                </select>
            </label>
            <span class="pagination-summary">{pagination.summary(total)}</span>
            <button
                class="btn btn-icon"
                onclick={on_previous}
                disabled={!pagination.has_previous()}
            >
                {"‹"}
            </button>
            <button
                class="btn btn-icon"
                onclick={on_next}
                disabled={!pagination.has_next(total)}
            >
                {"›"}
            </button>
        </div>
    }
}
