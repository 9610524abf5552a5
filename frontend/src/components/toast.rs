use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

const AUTO_DISMISS_MS: u32 = 3_000;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: String,
    pub on_close: Callback<()>,
}

/// Transient notification bubble (search results use it for match counts).
/// Auto-dismisses after a fixed interval; the owner can also close it early
/// by dropping the message.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let auto_timeout = {
        let on_close = props.on_close.clone();
        use_timeout(move || on_close.emit(()), AUTO_DISMISS_MS)
    };

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(props.message.clone(), move |_| {
            auto_timeout.reset();
        });
    }

    if props.message.trim().is_empty() {
        return Html::default();
    }

    html! {
        <div class="toast" role="status" aria-live="polite">
            { props.message.clone() }
        </div>
    }
}
