//! Dashboard home

use dioxus::prelude::*;
use storefront_access::Role;

use crate::auth::use_auth;
use crate::routes::Route;
use crate::state::Category;

/// Dashboard landing page: category tiles for shoppers, seller shortcuts
/// for advertisers
#[component]
pub fn DashboardHome() -> Element {
    let auth = use_auth();
    let Some(identity) = auth.identity() else {
        return rsx! {};
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-1", "Welcome back, {identity.display_name()}" }
            p { class: "text-gray-600 mb-8", "Signed in as {identity.role.label()}" }

            match identity.role {
                Role::User => rsx! {
                    h2 { class: "text-lg font-semibold text-gray-800 mb-4", "Shop by category" }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                        for category in Category::variants() {
                            Link {
                                key: "{category.id()}",
                                to: Route::CategoryAds { id: category.id() },
                                class: "bg-white rounded-xl border border-gray-200 p-6 text-center hover:shadow-lg transition-all",
                                div { class: "text-4xl mb-2", "{category.icon()}" }
                                h3 { class: "font-semibold text-gray-900", "{category.label()}" }
                            }
                        }
                    }
                },
                Role::Advertiser => rsx! {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                        Shortcut { to: Route::UploadAd {}, title: "Post an ad", hint: "List something new for sale" }
                        Shortcut { to: Route::MyAds {}, title: "My ads", hint: "Edit or remove your listings" }
                    }
                },
                Role::Admin => rsx! {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                        Shortcut { to: Route::Account {}, title: "Account", hint: "Review your administrator profile" }
                    }
                },
            }
        }
    }
}

#[component]
fn Shortcut(to: Route, title: &'static str, hint: &'static str) -> Element {
    rsx! {
        Link {
            to: to,
            class: "bg-white rounded-xl border border-gray-200 p-6 hover:shadow-lg transition-all",
            h3 { class: "font-semibold text-gray-900 mb-1", "{title}" }
            p { class: "text-sm text-gray-500", "{hint}" }
        }
    }
}
