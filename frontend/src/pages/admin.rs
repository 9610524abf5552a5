use newsdesk_shared::{content::excerpt_of, media::normalize_image_url, ArticleDraft};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    api,
    auth::{use_auth, AuthAction},
    components::{
        login_form::LoginForm,
        status_line::{Status, StatusLine},
    },
    config,
};

/// Publish workflow: validates the form, normalizes the image link, derives
/// the excerpt and submits a new published record. The form only appears for
/// a signed-in actor.
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let auth = use_auth();
    let title = use_state(String::new);
    let category = use_state(|| config::CATEGORIES[0].to_string());
    let image_url = use_state(String::new);
    let content = use_state(String::new);
    let status = use_state(|| None::<Status>);
    let publishing = use_state(|| false);

    let on_title_input = {
        let title = title.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                title.set(input.value());
            }
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                category.set(select.value());
            }
        })
    };

    let on_image_input = {
        let image_url = image_url.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                image_url.set(input.value());
            }
        })
    };

    let on_content_input = {
        let content = content.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                content.set(area.value());
            }
        })
    };

    let on_publish = {
        let auth = auth.clone();
        let title = title.clone();
        let category = category.clone();
        let image_url = image_url.clone();
        let content = content.clone();
        let status = status.clone();
        let publishing = publishing.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(actor) = auth.actor.clone() else {
                status.set(Some(Status::error("Please log in first")));
                return;
            };
            let title_value = (*title).trim().to_string();
            let content_value = (*content).trim().to_string();
            // Validation happens before anything touches the network.
            if title_value.is_empty() || content_value.is_empty() {
                status.set(Some(Status::error("Title and content are required")));
                return;
            }
            if *publishing {
                return;
            }
            publishing.set(true);
            status.set(Some(Status::info("Publishing article...")));

            let draft = ArticleDraft {
                title: title_value,
                category: (*category).clone(),
                image_url: normalize_image_url((*image_url).trim()),
                content: content_value.clone(),
                excerpt: excerpt_of(&content_value),
                author: actor.email.clone(),
                author_id: actor.uid.clone(),
            };

            let title = title.clone();
            let image_url = image_url.clone();
            let content = content.clone();
            let status = status.clone();
            let publishing = publishing.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::create_article(&actor, &draft).await {
                    Ok(id) => {
                        web_sys::console::log_1(
                            &format!("Article published with id {id}").into(),
                        );
                        title.set(String::new());
                        image_url.set(String::new());
                        content.set(String::new());
                        status.set(Some(Status::success("Article published successfully!")));
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Publish error: {err}").into());
                        status.set(Some(Status::error(err.status_line("Publishing"))));
                    }
                }
                publishing.set(false);
            });
        })
    };

    let on_sign_out = {
        let auth = auth.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            auth.dispatch(AuthAction::SignedOut);
            status.set(Some(Status::success("Logged out successfully")));
        })
    };

    if auth.actor.is_none() {
        return html! {
            <main class="main admin-page">
                <div class="container">
                    <LoginForm />
                </div>
            </main>
        };
    }

    html! {
        <main class="main admin-page">
            <div class="container">
                <div class="admin-head">
                    <h1 class="page-title">{ "Publish Article" }</h1>
                    <button type="button" class="btn btn-ghost" onclick={on_sign_out}>
                        { "Sign Out" }
                    </button>
                </div>
                <div class="admin-form">
                    <label for="article-title">{ "Title" }</label>
                    <input
                        id="article-title"
                        type="text"
                        placeholder="Article title"
                        value={(*title).clone()}
                        oninput={on_title_input}
                    />

                    <label for="article-category">{ "Category" }</label>
                    <select id="article-category" onchange={on_category_change}>
                        { for config::CATEGORIES.iter().map(|name| {
                            html! {
                                <option
                                    value={*name}
                                    selected={*name == (*category).as_str()}
                                >
                                    { *name }
                                </option>
                            }
                        }) }
                    </select>

                    <label for="article-image">{ "Image URL (optional)" }</label>
                    <input
                        id="article-image"
                        type="url"
                        placeholder="Direct image URL or a drive sharing link"
                        value={(*image_url).clone()}
                        oninput={on_image_input}
                    />

                    <label for="article-editor">{ "Content" }</label>
                    <textarea
                        id="article-editor"
                        class="editor"
                        rows="14"
                        placeholder="Write your article here..."
                        value={(*content).clone()}
                        oninput={on_content_input}
                    />

                    <button
                        type="button"
                        class="btn btn-primary"
                        disabled={*publishing}
                        onclick={on_publish}
                    >
                        { "Publish Article" }
                    </button>
                    <StatusLine status={(*status).clone()} />
                </div>
            </div>
        </main>
    }
}
