//! Account page

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

#[component]
pub fn Account() -> Element {
    let auth = use_auth();
    let Some(identity) = auth.identity() else {
        return rsx! {};
    };
    let email = identity.email.clone().unwrap_or_else(|| "-".to_string());

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 max-w-lg",
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Your account" }
            dl {
                class: "grid grid-cols-3 gap-y-3 text-sm",
                dt { class: "text-gray-500", "Name" }
                dd { class: "col-span-2 text-gray-900", "{identity.display_name()}" }
                dt { class: "text-gray-500", "Email" }
                dd { class: "col-span-2 text-gray-900", "{email}" }
                dt { class: "text-gray-500", "Role" }
                dd { class: "col-span-2 text-gray-900", "{identity.role.label()}" }
                dt { class: "text-gray-500", "Account id" }
                dd { class: "col-span-2 font-mono text-gray-600", "{identity.id}" }
            }
            if identity.role == storefront_access::Role::User {
                Link {
                    to: Route::Addresses {},
                    class: "inline-block mt-6 text-indigo-700 hover:underline text-sm",
                    "Manage addresses"
                }
            }
        }
    }
}
