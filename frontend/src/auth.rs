//! Reactive current-actor state. Write-capable views read the context to
//! decide between the credential form and their editing surface.

use serde::{Deserialize, Serialize};
use yew::prelude::*;

const STORAGE_KEY: &str = "newsdesk.actor";

/// The signed-in editorial user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub uid: String,
    pub email: String,
    pub id_token: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub actor: Option<Actor>,
}

pub enum AuthAction {
    SignedIn(Actor),
    SignedOut,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: std::rc::Rc<Self>, action: AuthAction) -> std::rc::Rc<Self> {
        match action {
            AuthAction::SignedIn(actor) => {
                persist_actor(&actor);
                AuthState {
                    actor: Some(actor),
                }
                .into()
            }
            AuthAction::SignedOut => {
                clear_actor();
                AuthState {
                    actor: None,
                }
                .into()
            }
        }
    }
}

pub type AuthContext = UseReducerHandle<AuthState>;

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|win| win.session_storage().ok().flatten())
}

fn persist_actor(actor: &Actor) {
    if let (Some(storage), Ok(raw)) = (session_storage(), serde_json::to_string(actor)) {
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
}

fn clear_actor() {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

fn restore_actor() -> Option<Actor> {
    let raw = session_storage()?.get_item(STORAGE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let state = use_reducer(|| AuthState {
        actor: restore_actor(),
    });

    html! {
        <ContextProvider<AuthContext> context={state}>
            { props.children.clone() }
        </ContextProvider<AuthContext>>
    }
}

/// Current-actor handle; the provider wraps the whole app.
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider wraps the app")
}
