use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="main not-found-page">
            <div class="container">
                <div class="error-panel">
                    <p class="error-code">{ "404" }</p>
                    <h1>{ "Page Not Found" }</h1>
                    <p>{ "The page you are looking for does not exist." }</p>
                    <Link<Route> to={Route::Home} classes={classes!("btn", "btn-primary")}>
                        { "Return to Homepage" }
                    </Link<Route>>
                </div>
            </div>
        </main>
    }
}
