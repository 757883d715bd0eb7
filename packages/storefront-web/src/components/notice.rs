//! Inline status messages

use dioxus::prelude::*;

#[component]
pub fn ErrorNotice(message: String) -> Element {
    rsx! {
        div {
            class: "mb-4 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
            "{message}"
        }
    }
}

#[component]
pub fn EmptyState(title: String, #[props(default)] hint: String) -> Element {
    rsx! {
        div {
            class: "text-center py-16",
            p { class: "text-gray-700 font-medium", "{title}" }
            if !hint.is_empty() {
                p { class: "text-sm text-gray-500 mt-1", "{hint}" }
            }
        }
    }
}
