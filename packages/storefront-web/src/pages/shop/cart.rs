//! Cart page

use dioxus::prelude::*;

use crate::api::{fetch_cart, remove_from_cart};
use crate::components::{EmptyState, ErrorNotice, LoadingSpinner};
use crate::routes::Route;
use crate::state::use_checkout;
use crate::types::{cart_total, format_price, CartItem, CheckoutItem};

#[component]
pub fn Cart() -> Element {
    let mut cart = use_resource(fetch_cart);
    let mut error = use_signal(|| None::<String>);
    let navigator = use_navigator();
    let mut checkout = use_checkout();

    let items: Vec<CartItem> = match &*cart.read() {
        None => {
            return rsx! {
                div { class: "py-24 flex justify-center", LoadingSpinner {} }
            }
        }
        Some(Err(e)) => return rsx! { ErrorNotice { message: e.to_string() } },
        Some(Ok(items)) => items.clone(),
    };

    if items.is_empty() {
        return rsx! {
            EmptyState { title: "Your cart is empty \u{1F6D2}".to_string() }
        };
    }

    let total = cart_total(&items);

    let handle_remove = move |ad_id: String| {
        spawn(async move {
            match remove_from_cart(&ad_id).await {
                Ok(()) => cart.restart(),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let handle_checkout = {
        let lines: Vec<CheckoutItem> = items.iter().filter_map(CheckoutItem::from_cart).collect();
        move |_| {
            checkout.start(lines.clone());
            navigator.push(Route::Checkout {});
        }
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Your cart" }

            if let Some(err) = error() {
                ErrorNotice { message: err }
            }

            div {
                class: "bg-white rounded-lg border border-gray-200 divide-y",
                for item in items.into_iter() {
                    CartRow { key: "{item.id}", item: item, on_remove: handle_remove }
                }
            }

            div {
                class: "mt-6 flex items-center justify-between",
                p { class: "text-lg font-semibold text-gray-900", "Total: {format_price(total)}" }
                button {
                    class: "bg-indigo-600 text-white px-6 py-2 rounded-md hover:bg-indigo-700",
                    onclick: handle_checkout,
                    "Proceed to checkout"
                }
            }
        }
    }
}

#[component]
fn CartRow(item: CartItem, on_remove: EventHandler<String>) -> Element {
    let Some(ad) = item.ad.clone() else {
        return rsx! {
            div { class: "p-4 text-sm text-gray-400", "This ad is no longer available" }
        };
    };

    rsx! {
        div {
            class: "flex items-center justify-between p-4",
            div {
                Link {
                    to: Route::AdDetails { id: ad.id.clone() },
                    class: "font-medium text-gray-900 hover:underline",
                    "{ad.title()}"
                }
                p {
                    class: "text-sm text-gray-500",
                    "{format_price(item.unit_price())} \u{00D7} {item.quantity()} = {format_price(item.line_total())}"
                }
            }
            button {
                class: "text-sm text-red-700 hover:underline",
                onclick: move |_| on_remove.call(ad.id.clone()),
                "Remove"
            }
        }
    }
}
