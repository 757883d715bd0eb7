//! Storefront navigation bar

use dioxus::prelude::*;
use storefront_access::SessionState;

use crate::auth::{logout, use_auth};
use crate::config;
use crate::routes::Route;
use crate::state::Category;

/// Whether the gate would render `route` for this session. Links the
/// visitor cannot open are hidden rather than bounced.
fn can_visit(session: &SessionState, route: &Route) -> bool {
    let path = route.to_string();
    let policy = config::route_table().resolve(&path).policy;
    config::gate().evaluate(session, &policy, &path).is_render()
}

/// Navigation bar for signed-in pages
#[component]
pub fn StoreNav() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let mut keyword = use_signal(String::new);

    let session = auth.session.read().clone();
    let links: Vec<(Route, &'static str)> = Category::variants()
        .iter()
        .map(|category| (Route::CategoryAds { id: category.id() }, category.label()))
        .chain([
            (Route::Cart {}, "Cart"),
            (Route::Addresses {}, "Addresses"),
            (Route::UploadAd {}, "Post an ad"),
            (Route::MyAds {}, "My ads"),
        ])
        .filter(|(route, _)| can_visit(&session, route))
        .collect();

    let handle_logout = {
        let auth = auth.clone();
        move |_| {
            let auth = auth.clone();
            spawn(async move {
                if let Err(e) = logout().await {
                    tracing::warn!(error = %e, "Logout request failed, clearing session anyway");
                }
                navigator.push(Route::Landing {});
                auth.sign_out();
            });
        }
    };

    let handle_search = move |e: FormEvent| {
        e.prevent_default();
        let query = keyword().trim().to_string();
        if !query.is_empty() {
            navigator.push(Route::Search { keyword: query });
        }
    };

    rsx! {
        nav {
            class: "bg-white border-b border-gray-200 px-6 py-3",
            div {
                class: "flex items-center justify-between gap-6",

                div {
                    class: "flex items-center gap-6",
                    Link {
                        to: Route::DashboardHome {},
                        class: "text-xl font-bold text-indigo-700",
                        "Storefront"
                    }
                    div {
                        class: "hidden md:flex items-center gap-1",
                        for (route, label) in links {
                            NavLink { key: "{label}", to: route, label }
                        }
                    }
                }

                form {
                    class: "flex-1 max-w-sm",
                    onsubmit: handle_search,
                    input {
                        r#type: "search",
                        value: "{keyword}",
                        oninput: move |e| keyword.set(e.value()),
                        placeholder: "Search products",
                        class: "w-full px-3 py-1.5 border border-gray-300 rounded-md text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                    }
                }

                div {
                    class: "flex items-center gap-4",
                    if let Some(identity) = session.identity() {
                        Link {
                            to: Route::Account {},
                            class: "text-sm text-gray-600 hover:text-gray-900",
                            "{identity.display_name()} ({identity.role.label()})"
                        }
                    }
                    button {
                        class: "text-sm text-gray-600 hover:text-gray-900 px-3 py-1.5 rounded hover:bg-gray-100",
                        onclick: handle_logout,
                        "Logout"
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    let route = use_route::<Route>();
    let is_active = route == to;

    rsx! {
        Link {
            to: to.clone(),
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-indigo-100 text-indigo-800"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            "{label}"
        }
    }
}
