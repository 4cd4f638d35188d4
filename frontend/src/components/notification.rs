use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn error(title: &str, description: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Notice,
    pub on_dismiss: Callback<()>,
    #[prop_or(5000)]
    pub visible_ms: u32,
}

/// Corner notice that dismisses itself after `visible_ms`.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let visible_ms = props.visible_ms;
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(visible_ms, move || on_dismiss.emit(()));
                move || drop(timeout)
            },
            props.notice.clone(),
        );
    }

    let class = match props.notice.kind {
        NoticeKind::Success => "toast toast-success",
        NoticeKind::Error => "toast toast-error",
    };
    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={class} role="status">
            <div class="toast-title">{ props.notice.title.clone() }</div>
            <div class="toast-description">{ props.notice.description.clone() }</div>
            <button class="toast-close" onclick={dismiss}>{"×"}</button>
        </div>
    }
}
