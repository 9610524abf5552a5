use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{config, router::Route};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container">
                <p class="footer-brand">{ config::SITE_NAME }</p>
                <nav class="footer-links" aria-label="Footer">
                    <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
                    <Link<Route> to={Route::Articles}>{ "All Articles" }</Link<Route>>
                </nav>
                <p class="footer-note">{ "Independent reporting, delivered daily." }</p>
            </div>
        </footer>
    }
}
