//! Loading components

use dioxus::prelude::*;

/// Full-page loading spinner, shown while the session resolves
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center",
            div { class: "w-10 h-10 border-4 border-indigo-200 border-t-indigo-600 rounded-full animate-spin" }
            p { class: "mt-4 text-sm text-gray-500", "Loading..." }
        }
    }
}

/// Placeholder grid while a list of ads loads
#[component]
pub fn AdGridSkeleton(#[props(default = 6)] count: usize) -> Element {
    rsx! {
        div {
            class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6",
            for i in 0..count {
                div {
                    key: "{i}",
                    class: "rounded-xl border border-gray-200 bg-white p-4 animate-pulse",
                    div { class: "h-40 bg-gray-200 rounded-lg mb-4" }
                    div { class: "h-5 bg-gray-200 rounded w-3/4 mb-2" }
                    div { class: "h-4 bg-gray-200 rounded w-1/3" }
                }
            }
        }
    }
}
