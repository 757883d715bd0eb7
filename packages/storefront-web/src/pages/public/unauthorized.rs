//! Shown when a signed-in visitor opens a page their role cannot use

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

#[component]
pub fn Unauthorized() -> Element {
    let auth = use_auth();
    let role = auth.identity().map(|identity| identity.role.label());

    rsx! {
        div {
            class: "max-w-lg mx-auto px-6 py-24 text-center",
            div { class: "text-5xl mb-4", "\u{1F6AB}" }
            h1 { class: "text-2xl font-bold text-gray-900 mb-2", "You don't have access to that page" }
            if let Some(role) = role {
                p { class: "text-gray-600 mb-8", "Your account is signed in as {role}." }
            }
            Link {
                to: Route::DashboardHome {},
                class: "inline-block bg-indigo-600 text-white px-6 py-3 rounded-md hover:bg-indigo-700",
                "Back to dashboard"
            }
        }
    }
}
