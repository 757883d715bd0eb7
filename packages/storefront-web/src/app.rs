//! Root application component

use dioxus::prelude::*;

use crate::auth::AuthProvider;
use crate::routes::Route;
use crate::state::CheckoutState;

/// Root application component
#[component]
pub fn App() -> Element {
    // Items handed from ad details / cart to checkout
    use_context_provider(CheckoutState::new);

    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        // Session state wraps the entire app
        AuthProvider {
            Router::<Route> {}
        }
    }
}
