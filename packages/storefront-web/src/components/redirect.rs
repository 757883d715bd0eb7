//! Client-side redirect

use dioxus::prelude::*;

use crate::routes::Route;

/// Replace the current history entry with `to` once mounted
#[component]
pub fn Redirect(to: Route) -> Element {
    let navigator = use_navigator();

    use_effect(use_reactive!(|(to,)| {
        navigator.replace(to);
    }));

    rsx! {}
}
