use yew::prelude::*;

use flashdeck::status::{StatusKind, StatusMessage};

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub status: Option<StatusMessage>,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    let (tag, text) = match &props.status {
        Some(message) => (message.kind.css_class(), message.text.clone()),
        None => ("message".to_string(), String::new()),
    };

    let palette = match props.status.as_ref().map(|m| m.kind) {
        Some(StatusKind::Success) => "p-3 mb-4 rounded-md bg-green-50 border border-green-200 text-green-700",
        Some(StatusKind::Error) => "p-3 mb-4 rounded-md bg-red-50 border border-red-200 text-red-700",
        Some(StatusKind::Info) => "p-3 mb-4 rounded-md bg-blue-50 border border-blue-200 text-blue-700",
        None => "hidden",
    };

    html! {
        <div id="message" class={format!("{tag} {palette}")} role="status" aria-live="polite">
            { text }
        </div>
    }
}
