use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/articles")]
    Articles,

    #[at("/category/:category")]
    Category { category: String },

    // The reader takes its article id from the `?id=` query parameter.
    #[at("/article")]
    Article,

    #[at("/admin")]
    Admin,

    #[at("/update")]
    Update,

    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query parameters for the reader route (`/article?id=...`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderQuery {
    #[serde(default)]
    pub id: Option<String>,
}

impl ReaderQuery {
    pub fn for_article(id: &str) -> Self {
        ReaderQuery {
            id: Some(id.to_string()),
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Articles => html! { <pages::articles::ArticlesPage /> },
        Route::Category {
            category,
        } => {
            html! { <pages::category::CategoryPage category={category} /> }
        }
        Route::Article => html! { <pages::article_detail::ArticleDetailPage /> },
        Route::Admin => html! { <pages::admin::AdminPage /> },
        Route::Update => html! { <pages::update::UpdatePage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-shell">
                <Header />
                <div class="app-content">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
