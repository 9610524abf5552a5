use newsdesk_shared::{
    paging::{CursorPager, PAGE_SIZE},
    ArticleSummary,
};
use yew::prelude::*;

use crate::{
    api,
    components::{
        article_card::ArticleCard,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        pager::Pager,
    },
};

/// All published articles, newest first, six to a page. Paging is driven by
/// the store cursor; a cursor is kept per page so "previous" replays the
/// earlier query exactly.
#[function_component(ArticlesPage)]
pub fn articles_page() -> Html {
    let articles = use_state(Vec::<ArticleSummary>::new);
    let pager = use_state(|| CursorPager::new(PAGE_SIZE));
    let loading = use_state(|| true);
    let notice = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    // Guards against a stale fetch overwriting a newer page.
    let request_seq = use_mut_ref(|| 0_u64);

    let load_page = {
        let articles = articles.clone();
        let pager = pager.clone();
        let loading = loading.clone();
        let notice = notice.clone();
        let error = error.clone();
        let request_seq = request_seq.clone();
        Callback::from(move |page: usize| {
            let cursor = pager.cursor_for(page).cloned();
            let request_id = {
                let mut seq = request_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            loading.set(true);

            let articles = articles.clone();
            let pager = pager.clone();
            let loading = loading.clone();
            let notice = notice.clone();
            let error = error.clone();
            let request_seq = request_seq.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result =
                    api::query_published(None, Some(PAGE_SIZE as u32), cursor.as_ref()).await;
                if *request_seq.borrow() != request_id {
                    return;
                }
                match result {
                    Ok(fetched) => {
                        let mut next_pager = (*pager).clone();
                        next_pager.record_page(page, fetched.items.len(), fetched.next_cursor);
                        if fetched.items.is_empty() {
                            articles.set(Vec::new());
                            notice.set(Some(if page == 1 {
                                "No articles found.".to_string()
                            } else {
                                "No more articles to show.".to_string()
                            }));
                        } else {
                            notice.set(None);
                            articles.set(
                                fetched
                                    .items
                                    .into_iter()
                                    .map(ArticleSummary::from)
                                    .collect(),
                            );
                        }
                        error.set(None);
                        pager.set(next_pager);
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Error getting articles: {err}").into(),
                        );
                        error.set(Some(
                            "Error loading articles. Please try again later.".to_string(),
                        ));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let load_page = load_page.clone();
        use_effect_with((), move |_| {
            load_page.emit(1);
            || ()
        });
    }

    let on_previous = {
        let pager = pager.clone();
        let load_page = load_page.clone();
        Callback::from(move |_| {
            if pager.has_previous() {
                load_page.emit(pager.current_page() - 1);
            }
        })
    };

    let on_next = {
        let pager = pager.clone();
        let load_page = load_page.clone();
        Callback::from(move |_| {
            if pager.has_more() {
                load_page.emit(pager.current_page() + 1);
            }
        })
    };

    let body = if *loading {
        html! { <LoadingSpinner size={SpinnerSize::Large} /> }
    } else if let Some(message) = (*error).clone() {
        html! { <p class="error-message">{ message }</p> }
    } else if let Some(message) = (*notice).clone() {
        html! { <p class="empty-state">{ message }</p> }
    } else {
        html! {
            <div class="article-grid">
                { for articles.iter().cloned().map(|article| {
                    html! { <ArticleCard key={article.id.clone()} article={article.clone()} /> }
                }) }
            </div>
        }
    };

    html! {
        <main class="main articles-page">
            <div class="container">
                <h1 class="page-title">{ "All Articles" }</h1>
                { body }
                <Pager
                    page={pager.current_page()}
                    has_previous={pager.has_previous()}
                    has_more={pager.has_more()}
                    on_previous={on_previous}
                    on_next={on_next}
                />
            </div>
        </main>
    }
}
