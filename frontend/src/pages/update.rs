use newsdesk_shared::{
    content::excerpt_of,
    error::StoreError,
    media::resolve_update_image,
    time::display_date,
    Article, ArticlePatch, ArticleSummary,
};
use web_sys::{HtmlImageElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    api,
    auth::{use_auth, AuthAction},
    components::{
        login_form::LoginForm,
        status_line::{Status, StatusLine},
    },
    config, utils,
};

const RECENT_GRID_COUNT: u32 = 6;

/// Update workflow. The dropdown and the recent-articles grid both converge
/// on one selected article; updating preserves the stored image when the
/// input stays blank, and deleting asks for confirmation first. Either
/// mutation reloads both lists afterwards.
#[function_component(UpdatePage)]
pub fn update_page() -> Html {
    let auth = use_auth();
    let options = use_state(Vec::<ArticleSummary>::new);
    let recent = use_state(Vec::<ArticleSummary>::new);
    let selected = use_state(|| None::<Article>);
    let form_title = use_state(String::new);
    let form_category = use_state(|| config::CATEGORIES[0].to_string());
    let form_image = use_state(String::new);
    let form_content = use_state(String::new);
    let status = use_state(|| None::<Status>);
    let busy = use_state(|| false);
    let request_seq = use_mut_ref(|| 0_u64);

    let refresh_lists = {
        let options = options.clone();
        let recent = recent.clone();
        let status = status.clone();
        let request_seq = request_seq.clone();
        Callback::from(move |_: ()| {
            let request_id = {
                let mut seq = request_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            let options = options.clone();
            let recent = recent.clone();
            let status = status.clone();
            let request_seq = request_seq.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let all = api::fetch_recent(None).await;
                let latest = api::fetch_recent(Some(RECENT_GRID_COUNT)).await;
                if *request_seq.borrow() != request_id {
                    return;
                }
                match (all, latest) {
                    (Ok(all), Ok(latest)) => {
                        options.set(all.into_iter().map(ArticleSummary::from).collect());
                        recent.set(latest.into_iter().map(ArticleSummary::from).collect());
                    }
                    (Err(err), _) | (_, Err(err)) => {
                        web_sys::console::error_1(
                            &format!("Error loading articles: {err}").into(),
                        );
                        status.set(Some(Status::error(format!(
                            "Error loading articles: {err}"
                        ))));
                    }
                }
            });
        })
    };

    {
        let refresh_lists = refresh_lists.clone();
        let signed_in = auth.actor.is_some();
        use_effect_with(signed_in, move |signed_in| {
            if *signed_in {
                refresh_lists.emit(());
            }
            || ()
        });
    }

    let clear_selection = {
        let selected = selected.clone();
        let form_title = form_title.clone();
        let form_category = form_category.clone();
        let form_image = form_image.clone();
        let form_content = form_content.clone();
        Callback::from(move |_: ()| {
            selected.set(None);
            form_title.set(String::new());
            form_category.set(config::CATEGORIES[0].to_string());
            form_image.set(String::new());
            form_content.set(String::new());
        })
    };

    let select_article = {
        let selected = selected.clone();
        let form_title = form_title.clone();
        let form_category = form_category.clone();
        let form_image = form_image.clone();
        let form_content = form_content.clone();
        let status = status.clone();
        Callback::from(move |id: String| {
            status.set(Some(Status::info("Loading article...")));
            let selected = selected.clone();
            let form_title = form_title.clone();
            let form_category = form_category.clone();
            let form_image = form_image.clone();
            let form_content = form_content.clone();
            let status = status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_article(&id).await {
                    Ok(article) => {
                        form_title.set(article.title.clone());
                        form_category.set(article.category.clone());
                        // The image input stays blank; an untouched field
                        // means "keep the stored URL" on submit.
                        form_image.set(String::new());
                        form_content.set(article.content.clone());
                        selected.set(Some(article));
                        status.set(Some(Status::success("Article loaded successfully")));
                    }
                    Err(StoreError::NotFound) => {
                        status.set(Some(Status::error("Article not found")));
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Error loading article: {err}").into(),
                        );
                        status.set(Some(Status::error(format!(
                            "Error loading article: {err}"
                        ))));
                    }
                }
            });
        })
    };

    let on_select_change = {
        let select_article = select_article.clone();
        let clear_selection = clear_selection.clone();
        let status = status.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            let id = select.value();
            if id.is_empty() {
                clear_selection.emit(());
                status.set(None);
            } else {
                select_article.emit(id);
            }
        })
    };

    let on_title_input = {
        let form_title = form_title.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form_title.set(input.value());
            }
        })
    };

    let on_category_change = {
        let form_category = form_category.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                form_category.set(select.value());
            }
        })
    };

    let on_image_input = {
        let form_image = form_image.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form_image.set(input.value());
            }
        })
    };

    let on_content_input = {
        let form_content = form_content.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                form_content.set(area.value());
            }
        })
    };

    let on_update = {
        let auth = auth.clone();
        let selected = selected.clone();
        let form_title = form_title.clone();
        let form_category = form_category.clone();
        let form_image = form_image.clone();
        let form_content = form_content.clone();
        let status = status.clone();
        let busy = busy.clone();
        let refresh_lists = refresh_lists.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(actor) = auth.actor.clone() else {
                status.set(Some(Status::error("Please log in first")));
                return;
            };
            let Some(current) = (*selected).clone() else {
                status.set(Some(Status::error("Please select an article first")));
                return;
            };
            let title_value = (*form_title).trim().to_string();
            let content_value = (*form_content).trim().to_string();
            if title_value.is_empty() || content_value.is_empty() {
                status.set(Some(Status::error("Title and content are required")));
                return;
            }
            if *busy {
                return;
            }
            busy.set(true);
            status.set(Some(Status::info("Updating article...")));

            // Blank input keeps the stored image; anything else goes through
            // the sharing-link rewrite (non-matching URLs store verbatim).
            let image_url = resolve_update_image(&current.image_url, &form_image);

            let patch = ArticlePatch {
                title: title_value,
                category: (*form_category).clone(),
                image_url,
                content: content_value.clone(),
                excerpt: excerpt_of(&content_value),
            };

            let selected = selected.clone();
            let status = status.clone();
            let busy = busy.clone();
            let refresh_lists = refresh_lists.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::update_article(&actor, &current.id, &patch).await {
                    Ok(()) => {
                        status.set(Some(Status::success("Article updated successfully!")));
                        // Reflect the edit in the preview immediately; the
                        // lists re-sync on their own fetch.
                        selected.set(Some(Article {
                            title: patch.title.clone(),
                            category: patch.category.clone(),
                            image_url: patch.image_url.clone(),
                            content: patch.content.clone(),
                            excerpt: patch.excerpt.clone(),
                            ..current
                        }));
                        refresh_lists.emit(());
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Update error: {err}").into());
                        status.set(Some(Status::error(err.status_line("Update"))));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_delete = {
        let auth = auth.clone();
        let selected = selected.clone();
        let status = status.clone();
        let busy = busy.clone();
        let refresh_lists = refresh_lists.clone();
        let clear_selection = clear_selection.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(actor) = auth.actor.clone() else {
                status.set(Some(Status::error("Please log in first")));
                return;
            };
            let Some(current) = (*selected).clone() else {
                status.set(Some(Status::error("Please select an article first")));
                return;
            };

            let prompt = format!(
                "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                current.title
            );
            let confirmed = web_sys::window()
                .map(|win| win.confirm_with_message(&prompt).unwrap_or(false))
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            if *busy {
                return;
            }
            busy.set(true);
            status.set(Some(Status::info("Deleting article...")));

            let status = status.clone();
            let busy = busy.clone();
            let refresh_lists = refresh_lists.clone();
            let clear_selection = clear_selection.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_article(&actor, &current.id).await {
                    Ok(()) => {
                        status.set(Some(Status::success("Article deleted successfully!")));
                        clear_selection.emit(());
                        refresh_lists.emit(());
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Delete error: {err}").into());
                        status.set(Some(Status::error(err.status_line("Delete"))));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_cancel = {
        let clear_selection = clear_selection.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            clear_selection.emit(());
            status.set(None);
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

    let on_preview_image_error = Callback::from(|event: Event| {
        if let Some(image) = event.target_dyn_into::<HtmlImageElement>() {
            if image.src().ends_with(config::PLACEHOLDER_IMAGE) {
                return;
            }
            image.set_src(config::PLACEHOLDER_IMAGE);
        }
    });

    if auth.actor.is_none() {
        return html! {
            <main class="main update-page">
                <div class="container">
                    <LoginForm />
                </div>
            </main>
        };
    }

    let selected_id = selected.as_ref().map(|article| article.id.clone());

    html! {
        <main class="main update-page">
            <div class="container">
                <div class="admin-head">
                    <h1 class="page-title">{ "Manage Articles" }</h1>
                    <button type="button" class="btn btn-ghost" onclick={on_sign_out}>
                        { "Sign Out" }
                    </button>
                </div>

                <section class="article-picker">
                    <label for="article-select">{ "Select an article" }</label>
                    <select id="article-select" onchange={on_select_change}>
                        <option value="" selected={selected_id.is_none()}>
                            { if options.is_empty() {
                                "No articles found"
                            } else {
                                "Select an article to update..."
                            } }
                        </option>
                        { for options.iter().map(|item| {
                            html! {
                                <option
                                    value={item.id.clone()}
                                    selected={selected_id.as_deref() == Some(item.id.as_str())}
                                >
                                    {
                                        format!(
                                            "{} ({})",
                                            item.title,
                                            display_date(item.created_at.as_deref())
                                        )
                                    }
                                </option>
                            }
                        }) }
                    </select>
                </section>

                <StatusLine status={(*status).clone()} />

                {
                    if let Some(current) = (*selected).clone() {
                        html! {
                            <>
                                <section class="article-preview">
                                    {
                                        if current.image_url.trim().is_empty() {
                                            html! {}
                                        } else {
                                            html! {
                                                <img
                                                    src={utils::article_image_src(&current.image_url)}
                                                    alt={current.title.clone()}
                                                    onerror={on_preview_image_error.clone()}
                                                />
                                            }
                                        }
                                    }
                                    <h2>{ current.title.clone() }</h2>
                                    <p class="article-excerpt">
                                        { if current.excerpt.is_empty() {
                                            "No excerpt available".to_string()
                                        } else {
                                            current.excerpt.clone()
                                        } }
                                    </p>
                                    <div class="article-meta">
                                        <span>{ current.category.clone() }</span>
                                        <span>{ display_date(current.created_at.as_deref()) }</span>
                                        <span>{ format!("{} views", current.views) }</span>
                                    </div>
                                </section>

                                <section class="admin-form">
                                    <label for="update-title">{ "Title" }</label>
                                    <input
                                        id="update-title"
                                        type="text"
                                        value={(*form_title).clone()}
                                        oninput={on_title_input}
                                    />

                                    <label for="update-category">{ "Category" }</label>
                                    <select id="update-category" onchange={on_category_change}>
                                        { for config::CATEGORIES.iter().map(|name| {
                                            html! {
                                                <option
                                                    value={*name}
                                                    selected={*name == (*form_category).as_str()}
                                                >
                                                    { *name }
                                                </option>
                                            }
                                        }) }
                                    </select>

                                    <label for="update-image">{ "New image URL (leave blank to keep current)" }</label>
                                    <input
                                        id="update-image"
                                        type="url"
                                        value={(*form_image).clone()}
                                        oninput={on_image_input}
                                    />

                                    <label for="update-editor">{ "Content" }</label>
                                    <textarea
                                        id="update-editor"
                                        class="editor"
                                        rows="14"
                                        placeholder="Edit your article content here..."
                                        value={(*form_content).clone()}
                                        oninput={on_content_input}
                                    />

                                    <div class="form-actions">
                                        <button
                                            type="button"
                                            class="btn btn-primary"
                                            disabled={*busy}
                                            onclick={on_update}
                                        >
                                            { "Update Article" }
                                        </button>
                                        <button
                                            type="button"
                                            class="btn btn-danger"
                                            disabled={*busy}
                                            onclick={on_delete}
                                        >
                                            { "Delete Article" }
                                        </button>
                                        <button
                                            type="button"
                                            class="btn btn-ghost"
                                            onclick={on_cancel}
                                        >
                                            { "Cancel" }
                                        </button>
                                    </div>
                                </section>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }

                <section class="recent-articles">
                    <h2>{ "Recent Articles" }</h2>
                    {
                        if recent.is_empty() {
                            html! { <p class="empty-state">{ "No articles found" }</p> }
                        } else {
                            html! {
                                <div class="article-grid">
                                    { for recent.iter().map(|item| {
                                        let on_pick = {
                                            let select_article = select_article.clone();
                                            let id = item.id.clone();
                                            Callback::from(move |_: MouseEvent| {
                                                select_article.emit(id.clone());
                                            })
                                        };
                                        html! {
                                            <div
                                                key={item.id.clone()}
                                                class="recent-article-card"
                                                onclick={on_pick}
                                            >
                                                <img
                                                    src={utils::article_image_src(&item.image_url)}
                                                    alt={item.title.clone()}
                                                    loading="lazy"
                                                    onerror={on_preview_image_error.clone()}
                                                />
                                                <div class="recent-article-content">
                                                    <span class="article-category">{ item.category.clone() }</span>
                                                    <h4>{ item.title.clone() }</h4>
                                                    <p class="article-excerpt">
                                                        { if item.excerpt.is_empty() {
                                                            "No excerpt available".to_string()
                                                        } else {
                                                            item.excerpt.clone()
                                                        } }
                                                    </p>
                                                    <div class="article-meta">
                                                        <span>{ display_date(item.created_at.as_deref()) }</span>
                                                        <span>{ format!("{} views", item.views) }</span>
                                                    </div>
                                                </div>
                                            </div>
                                        }
                                    }) }
                                </div>
                            }
                        }
                    }
                </section>
            </div>
        </main>
    }
}
