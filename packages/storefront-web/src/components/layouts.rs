//! Page shells

use dioxus::prelude::*;

use super::StoreNav;
use crate::routes::Route;

/// Shell for pages anyone can open
#[component]
pub fn PublicLayout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-50 flex flex-col",
            header {
                class: "bg-white border-b border-gray-200 px-6 py-4 flex items-center justify-between",
                Link { to: Route::Landing {}, class: "text-xl font-bold text-indigo-700", "Storefront" }
                div {
                    class: "flex items-center gap-3",
                    Link {
                        to: Route::SignIn { return_to: String::new() },
                        class: "text-sm text-gray-700 hover:text-gray-900",
                        "Sign in"
                    }
                    Link {
                        to: Route::SignUp {},
                        class: "text-sm bg-indigo-600 text-white px-4 py-2 rounded-md hover:bg-indigo-700",
                        "Sign up"
                    }
                }
            }
            main { class: "flex-1", Outlet::<Route> {} }
            footer {
                class: "py-6 text-center text-xs text-gray-400",
                "Buy and sell second-hand goods near you"
            }
        }
    }
}

/// Shell for signed-in pages
#[component]
pub fn DashboardLayout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-100",
            StoreNav {}
            main {
                class: "p-6 max-w-6xl mx-auto",
                Outlet::<Route> {}
            }
        }
    }
}
