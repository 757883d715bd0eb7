//! Landing page

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;
use crate::state::Category;

#[component]
pub fn Landing() -> Element {
    let auth = use_auth();
    let signed_in = auth.session.read().is_authenticated();

    rsx! {
        section {
            class: "max-w-5xl mx-auto px-6 py-16 text-center",
            h1 {
                class: "text-4xl font-bold text-gray-900 mb-4",
                "Buy and sell what you no longer need"
            }
            p {
                class: "text-lg text-gray-600 mb-8",
                "Browse listings from sellers near you, or post your own ad in minutes."
            }
            if signed_in {
                Link {
                    to: Route::DashboardHome {},
                    class: "inline-block bg-indigo-600 text-white px-6 py-3 rounded-md hover:bg-indigo-700",
                    "Go to your dashboard"
                }
            } else {
                div {
                    class: "flex justify-center gap-4",
                    Link {
                        to: Route::SignUp {},
                        class: "bg-indigo-600 text-white px-6 py-3 rounded-md hover:bg-indigo-700",
                        "Create an account"
                    }
                    Link {
                        to: Route::SignIn { return_to: String::new() },
                        class: "border border-indigo-600 text-indigo-700 px-6 py-3 rounded-md hover:bg-indigo-50",
                        "Sign in"
                    }
                }
            }
        }

        section {
            class: "max-w-5xl mx-auto px-6 pb-16 grid grid-cols-1 md:grid-cols-3 gap-6",
            for category in Category::variants() {
                div {
                    key: "{category.id()}",
                    class: "bg-white rounded-xl border border-gray-200 p-6 text-center",
                    div { class: "text-4xl mb-2", "{category.icon()}" }
                    h3 { class: "font-semibold text-gray-900", "{category.label()}" }
                }
            }
        }
    }
}
