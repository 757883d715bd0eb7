//! Layout that runs the access gate for every navigation

use dioxus::prelude::*;
use storefront_access::{Navigation, NavigationState};

use super::{LoadingSpinner, Redirect};
use crate::auth::use_auth;
use crate::config;
use crate::routes::Route;

/// Outermost layout: resolves the current path against the route table,
/// evaluates its policy against the session and renders the page, the
/// loading state or a redirect.
#[component]
pub fn AccessGuard() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let path = route.to_string();

    let resolution = config::route_table().resolve(&path);
    let decision = config::gate().evaluate(&auth.session.read(), &resolution.policy, &path);

    let mut navigation = Navigation::new(path, resolution);
    navigation.apply(decision);

    match navigation.state() {
        NavigationState::Resolving => rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-gray-100",
                LoadingSpinner {}
            }
        },
        NavigationState::Redirecting(target) => {
            let href = target.href();
            tracing::info!(from = %navigation.path, to = %href, reason = ?target.reason, "Access gate redirect");
            rsx! {
                Redirect { to: Route::from_href(&href) }
            }
        }
        NavigationState::Authorized { .. } => rsx! {
            Outlet::<Route> {}
        },
    }
}
