use dioxus::prelude::*;

use crate::attendance::StatusMessage;

#[derive(Props, PartialEq, Clone)]
pub struct MessageBannerProps {
    pub message: StatusMessage,
}

/// Success or error banner in the tracker's message area.
#[component]
pub fn MessageBanner(props: MessageBannerProps) -> Element {
    match props.message {
        StatusMessage::Success(text) => rsx! {
            div {
                class: "alert alert-success",
                strong { "Success! " }
                "{text}"
            }
        },
        StatusMessage::Error(text) => rsx! {
            div {
                class: "alert alert-error",
                strong { "Error: " }
                "{text}"
            }
        },
    }
}
