use newsdesk_shared::{
    paging::{has_more_pages, PAGE_SIZE},
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
    hooks::use_pagination,
};

#[derive(Properties, Clone, PartialEq)]
pub struct CategoryPageProps {
    pub category: String,
}

/// Category listing. Pulls the whole published set once, filters by exact
/// category match client-side, and pages the result in memory. Simple and
/// stable while the archive stays small; revisit if it ever is not.
#[function_component(CategoryPage)]
pub fn category_page(props: &CategoryPageProps) -> Html {
    let category = props.category.trim().to_string();
    let articles = use_state(Vec::<ArticleSummary>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let request_seq = use_mut_ref(|| 0_u64);

    {
        let articles = articles.clone();
        let loading = loading.clone();
        let error = error.clone();
        let request_seq = request_seq.clone();
        let category = category.clone();
        use_effect_with(category.clone(), move |_| {
            let request_id = {
                let mut seq = request_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = api::query_published(None, None, None).await;
                if *request_seq.borrow() != request_id {
                    return;
                }
                match result {
                    Ok(page) => {
                        let matching: Vec<ArticleSummary> = page
                            .items
                            .into_iter()
                            .filter(|article| article.category == category)
                            .map(ArticleSummary::from)
                            .collect();
                        articles.set(matching);
                        error.set(None);
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Error loading articles: {err}").into(),
                        );
                        error.set(Some(format!("Error loading articles: {err}")));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let page_view = use_pagination((*articles).clone(), PAGE_SIZE);
    let page = page_view.page;
    let total_pages = page_view.total_pages;
    let has_more = has_more_pages(page, articles.len(), PAGE_SIZE);

    let on_previous = {
        let go_to = page_view.go_to.clone();
        Callback::from(move |_| {
            if page > 1 {
                go_to.emit(page - 1);
            }
        })
    };
    let on_next = {
        let go_to = page_view.go_to.clone();
        Callback::from(move |_| go_to.emit(page + 1))
    };

    let display_category = if category.is_empty() {
        "Uncategorized".to_string()
    } else {
        category.clone()
    };

    let body = if *loading {
        html! { <LoadingSpinner size={SpinnerSize::Large} /> }
    } else if let Some(message) = (*error).clone() {
        html! { <p class="error-message">{ message }</p> }
    } else if articles.is_empty() {
        html! {
            <p class="empty-state">
                { format!("No {display_category} articles found.") }
            </p>
        }
    } else {
        html! {
            <>
                <div class="article-grid">
                    { for page_view.items.iter().cloned().map(|article| {
                        html! { <ArticleCard key={article.id.clone()} article={article.clone()} /> }
                    }) }
                </div>
                <Pager
                    page={page}
                    has_previous={page > 1}
                    has_more={has_more}
                    on_previous={on_previous}
                    on_next={on_next}
                    total_pages={Some(total_pages)}
                />
            </>
        }
    };

    html! {
        <main class="main category-page">
            <div class="container">
                <h1 class="page-title">{ display_category.clone() }</h1>
                <p class="page-description">
                    {
                        if *loading || articles.is_empty() {
                            String::new()
                        } else {
                            format!("{} articles in this section.", articles.len())
                        }
                    }
                </p>
                { body }
            </div>
        </main>
    }
}
