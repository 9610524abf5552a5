use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    api,
    auth::{use_auth, AuthAction},
    components::status_line::{Status, StatusLine},
};

/// Credential form shown by the write-capable views while no actor is
/// signed in.
#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let auth = use_auth();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let status = use_state(|| None::<Status>);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let do_login = {
        let auth = auth.clone();
        let email = email.clone();
        let password = password.clone();
        let status = status.clone();
        Callback::from(move |_: ()| {
            let email_value = (*email).trim().to_string();
            let password_value = (*password).clone();
            if email_value.is_empty() || password_value.is_empty() {
                status.set(Some(Status::error("Email and password are required")));
                return;
            }

            status.set(Some(Status::info("Logging in...")));
            let auth = auth.clone();
            let status = status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::sign_in(&email_value, &password_value).await {
                    Ok(actor) => {
                        status.set(Some(Status::success("Login successful!")));
                        auth.dispatch(AuthAction::SignedIn(actor));
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Login error: {err}").into());
                        status.set(Some(Status::error(format!("Login failed: {err}"))));
                    }
                }
            });
        })
    };

    let on_login = {
        let do_login = do_login.clone();
        Callback::from(move |_: MouseEvent| do_login.emit(()))
    };

    let on_keypress = {
        let do_login = do_login.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                do_login.emit(());
            }
        })
    };

    html! {
        <section class="auth-panel">
            <h2>{ "Editor Sign In" }</h2>
            <div class="auth-fields">
                <input
                    type="email"
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={on_email_input}
                />
                <input
                    type="password"
                    placeholder="Password"
                    value={(*password).clone()}
                    oninput={on_password_input}
                    onkeypress={on_keypress}
                />
                <button type="button" class="btn btn-primary" onclick={on_login}>
                    { "Sign In" }
                </button>
            </div>
            <StatusLine status={(*status).clone()} />
        </section>
    }
}
