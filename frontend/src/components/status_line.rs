use yew::prelude::*;

/// Severity of a workflow status message; drives the text color only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Status {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Status {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Status {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusLineProps {
    pub status: Option<Status>,
}

/// Transient status text under a form's action buttons. Renders nothing
/// while there is no status to show.
#[function_component(StatusLine)]
pub fn status_line(props: &StatusLineProps) -> Html {
    let Some(status) = props.status.as_ref() else {
        return Html::default();
    };
    let kind_class = match status.kind {
        StatusKind::Info => "status-info",
        StatusKind::Success => "status-success",
        StatusKind::Error => "status-error",
    };

    html! {
        <p class={classes!("status-message", kind_class)} role="status" aria-live="polite">
            { status.text.clone() }
        </p>
    }
}
