use newsdesk_shared::{time::display_relative, ArticleSummary};
use web_sys::HtmlImageElement;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    config,
    router::{ReaderQuery, Route},
    utils,
};

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: ArticleSummary,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = props.article.clone();
    let reader_query = ReaderQuery::for_article(&article.id);
    let image_src = utils::article_image_src(&article.image_url);
    let category = if article.category.trim().is_empty() {
        "General".to_string()
    } else {
        article.category.clone()
    };

    let on_image_error = Callback::from(|event: Event| {
        if let Some(image) = event.target_dyn_into::<HtmlImageElement>() {
            if image.src().ends_with(config::PLACEHOLDER_IMAGE) {
                return;
            }
            image.set_src(config::PLACEHOLDER_IMAGE);
        }
    });

    html! {
        <article class="article-card">
            <Link<Route, ReaderQuery>
                to={Route::Article}
                query={Some(reader_query.clone())}
                classes={classes!("article-image")}
            >
                <img
                    src={image_src}
                    alt={article.title.clone()}
                    loading="lazy"
                    onerror={on_image_error}
                />
            </Link<Route, ReaderQuery>>
            <div class="article-content">
                <Link<Route>
                    to={Route::Category { category: article.category.clone() }}
                    classes={classes!("article-category")}
                >
                    { category }
                </Link<Route>>
                <h3 class="article-title">
                    <Link<Route, ReaderQuery>
                        to={Route::Article}
                        query={Some(reader_query.clone())}
                        classes={classes!("article-title-link")}
                    >
                        { &article.title }
                    </Link<Route, ReaderQuery>>
                </h3>
                <p class="article-excerpt">{ &article.excerpt }</p>
                <div class="article-meta">
                    <span class="article-meta-item">
                        <i class="far fa-calendar" aria-hidden="true"></i>
                        { display_relative(article.created_at.as_deref(), utils::now_ms()) }
                    </span>
                    <span class="article-meta-item">
                        <i class="fas fa-clock" aria-hidden="true"></i>
                        { format!("{} min read", article.read_time) }
                    </span>
                    <Link<Route, ReaderQuery>
                        to={Route::Article}
                        query={Some(reader_query)}
                        classes={classes!("read-more")}
                    >
                        { "Read More" }
                        <i class="fas fa-arrow-right" aria-hidden="true"></i>
                    </Link<Route, ReaderQuery>>
                </div>
            </div>
        </article>
    }
}
