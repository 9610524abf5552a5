use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PagerProps {
    pub page: usize,
    pub has_previous: bool,
    pub has_more: bool,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
    /// Known total (in-memory paging); the cursor-driven list omits it.
    #[prop_or_default]
    pub total_pages: Option<usize>,
}

#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    let on_previous = {
        let on_previous = props.on_previous.clone();
        Callback::from(move |_| on_previous.emit(()))
    };
    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_| on_next.emit(()))
    };

    let page_info = match props.total_pages {
        Some(total) => format!("Page {} of {}", props.page, total),
        None => format!("Page {}", props.page),
    };

    html! {
        <nav class="pagination" aria-label="Pagination">
            <button
                type="button"
                class="pagination-btn"
                disabled={!props.has_previous}
                onclick={on_previous}
            >
                <i class="fas fa-chevron-left" aria-hidden="true"></i>
                { " Previous" }
            </button>
            <span class="page-info">{ page_info }</span>
            <button
                type="button"
                class="pagination-btn"
                disabled={!props.has_more}
                onclick={on_next}
            >
                { "Next " }
                <i class="fas fa-chevron-right" aria-hidden="true"></i>
            </button>
        </nav>
    }
}
