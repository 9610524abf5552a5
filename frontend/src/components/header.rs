use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{components::toast::Toast, config, router::Route, search};

fn outcome_message(matches: usize) -> String {
    match matches {
        0 => "No matches found".to_string(),
        1 => "1 match found".to_string(),
        n => format!("{n} matches found"),
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let search_query = use_state(String::new);
    let toast_message = use_state(|| None::<String>);

    let on_search_input = {
        let search_query = search_query.clone();
        let toast_message = toast_message.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let value = input.value();
                // Emptying the field drops all marks and the toast right away.
                if value.trim().is_empty() {
                    search::clear_highlights();
                    toast_message.set(None);
                }
                search_query.set(value);
            }
        })
    };

    let do_search = {
        let search_query = search_query.clone();
        let toast_message = toast_message.clone();
        Callback::from(move |_: ()| {
            let query = (*search_query).trim().to_string();
            if query.is_empty() {
                search::clear_highlights();
                toast_message.set(None);
                return;
            }
            if let Some(outcome) = search::run_search(&query) {
                toast_message.set(Some(outcome_message(outcome.matches)));
            }
        })
    };

    let on_search_click = {
        let do_search = do_search.clone();
        Callback::from(move |_: MouseEvent| do_search.emit(()))
    };

    let on_search_keypress = {
        let do_search = do_search.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                do_search.emit(());
            }
        })
    };

    let on_toast_close = {
        let toast_message = toast_message.clone();
        Callback::from(move |_| toast_message.set(None))
    };

    html! {
        <header class="site-header">
            <nav class="navbar" aria-label="Main">
                <Link<Route> to={Route::Home} classes={classes!("brand")}>
                    { config::SITE_NAME }
                </Link<Route>>
                <ul class="nav-links">
                    <li>
                        <Link<Route> to={Route::Home} classes={classes!("nav-link")}>
                            { "Home" }
                        </Link<Route>>
                    </li>
                    <li>
                        <Link<Route> to={Route::Articles} classes={classes!("nav-link")}>
                            { "Articles" }
                        </Link<Route>>
                    </li>
                    <li>
                        <Link<Route>
                            to={Route::Category { category: "International News".to_string() }}
                            classes={classes!("nav-link")}
                        >
                            { "International" }
                        </Link<Route>>
                    </li>
                    <li>
                        <Link<Route> to={Route::Admin} classes={classes!("nav-link")}>
                            { "Publish" }
                        </Link<Route>>
                    </li>
                    <li>
                        <Link<Route> to={Route::Update} classes={classes!("nav-link")}>
                            { "Manage" }
                        </Link<Route>>
                    </li>
                </ul>
                <div class="search-box">
                    <input
                        type="search"
                        class="search-input"
                        placeholder="Search this page..."
                        aria-label="Search this page"
                        value={(*search_query).clone()}
                        oninput={on_search_input}
                        onkeypress={on_search_keypress}
                    />
                    <button
                        type="button"
                        class="search-button"
                        aria-label="Search"
                        onclick={on_search_click}
                    >
                        <i class="fas fa-search" aria-hidden="true"></i>
                    </button>
                </div>
            </nav>
            {
                if let Some(message) = (*toast_message).clone() {
                    html! { <Toast message={message} on_close={on_toast_close} /> }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
