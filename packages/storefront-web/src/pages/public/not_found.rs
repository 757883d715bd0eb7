//! Fallback for unknown paths

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center bg-gray-50 px-6 text-center",
            h1 { class: "text-6xl font-bold text-gray-300 mb-4", "404" }
            p { class: "text-gray-600 mb-8", "Nothing lives at {path}" }
            Link {
                to: Route::Landing {},
                class: "text-indigo-700 hover:underline",
                "Go home"
            }
        }
    }
}
