//! Checkout: pick a delivery address and place the order

use dioxus::prelude::*;

use crate::api::{fetch_addresses, place_order};
use crate::components::{EmptyState, ErrorNotice, LoadingSpinner};
use crate::routes::Route;
use crate::state::use_checkout;
use crate::types::{format_price, split_placed, Address};

#[component]
pub fn Checkout() -> Element {
    let mut checkout = use_checkout();
    let addresses = use_resource(fetch_addresses);
    let mut selected = use_signal(|| None::<Address>);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);
    let mut order_numbers = use_signal(|| None::<Vec<String>>);
    // Orders already placed by an attempt that failed part way
    let mut placed_so_far = use_signal(Vec::<String>::new);

    if let Some(numbers) = order_numbers() {
        return rsx! {
            div {
                class: "bg-white rounded-lg border border-gray-200 p-8 max-w-md mx-auto text-center",
                div { class: "text-5xl mb-4", "\u{2705}" }
                h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Order placed" }
                for number in numbers {
                    p { key: "{number}", class: "text-gray-700", span { class: "font-semibold", "Order No: " } "{number}" }
                }
                Link {
                    to: Route::DashboardHome {},
                    class: "inline-block mt-6 bg-indigo-600 text-white px-6 py-2 rounded-md hover:bg-indigo-700",
                    "Continue shopping"
                }
            }
        };
    }

    let items = checkout.items.read().clone();
    if items.is_empty() {
        return rsx! {
            EmptyState {
                title: "No items to purchase".to_string(),
                hint: "Pick an ad and choose \u{201C}Buy now\u{201D}, or check out from your cart".to_string()
            }
        };
    }
    let total = checkout.total();

    let handle_place_order = move |_| {
        let Some(address) = selected() else {
            error.set(Some("Please select a delivery address before placing your order.".to_string()));
            return;
        };
        let items = checkout.items.read().clone();

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            let outcome = place_order(&items, &address).await;
            let (numbers, remaining) = split_placed(&items, outcome.confirmations);
            placed_so_far.write().extend(numbers);

            match outcome.failure {
                None => {
                    checkout.clear();
                    order_numbers.set(Some(placed_so_far.take()));
                }
                Some(e) => {
                    tracing::warn!(error = %e, remaining = remaining.len(), "Order placement failed");
                    // Placed lines leave checkout so a retry cannot order them twice
                    checkout.start(remaining);
                    error.set(Some(e.to_string()));
                }
            }

            is_pending.set(false);
        });
    };

    let address_picker = match &*addresses.read() {
        None => rsx! { LoadingSpinner {} },
        Some(Err(e)) => rsx! { ErrorNotice { message: e.to_string() } },
        Some(Ok(list)) if list.is_empty() => rsx! {
            p {
                class: "text-sm text-gray-600",
                "You have no saved addresses. "
                Link { to: Route::Addresses {}, class: "text-indigo-700 hover:underline", "Add one" }
            }
        },
        Some(Ok(list)) => rsx! {
            div {
                class: "space-y-2",
                for address in list.iter().cloned() {
                    label {
                        key: "{address.id}",
                        class: "flex items-start gap-3 p-3 border border-gray-200 rounded-md cursor-pointer",
                        input {
                            r#type: "radio",
                            name: "address",
                            checked: selected.read().as_ref().is_some_and(|current| current.id == address.id),
                            onchange: {
                                let address = address.clone();
                                move |_| selected.set(Some(address.clone()))
                            },
                        }
                        div {
                            p { class: "font-medium text-gray-900", "{address.label}" }
                            p { class: "text-sm text-gray-600", "{address.summary()}" }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-2 gap-8",

            section {
                class: "bg-white rounded-lg border border-gray-200 p-6",
                h2 { class: "text-lg font-semibold text-gray-800 mb-4", "Delivery address" }
                {address_picker}
            }

            section {
                class: "bg-white rounded-lg border border-gray-200 p-6",
                h2 { class: "text-lg font-semibold text-gray-800 mb-4", "Order summary" }
                for item in items.iter() {
                    div {
                        key: "{item.ad_id}",
                        class: "flex justify-between py-2 border-b border-gray-100",
                        div {
                            p { class: "text-gray-900", "{item.product_name}" }
                            p { class: "text-gray-500 text-sm", "Qty: {item.quantity}" }
                        }
                        p { class: "text-gray-900", "{format_price(item.total())}" }
                    }
                }
                p { class: "mt-4 text-lg font-semibold text-gray-900", "Total: {format_price(total)}" }

                if !placed_so_far.read().is_empty() {
                    div {
                        class: "mt-4 p-3 bg-green-50 border border-green-200 rounded-md text-sm text-green-800",
                        p { class: "font-semibold", "Already placed" }
                        for number in placed_so_far.read().iter() {
                            p { key: "{number}", "Order No: {number}" }
                        }
                    }
                }

                if let Some(err) = error() {
                    div { class: "mt-4", ErrorNotice { message: err } }
                }

                button {
                    class: "mt-4 w-full bg-indigo-600 text-white py-2 rounded-md hover:bg-indigo-700 disabled:opacity-50",
                    disabled: is_pending(),
                    onclick: handle_place_order,
                    if is_pending() { "Placing order..." } else { "Place order" }
                }
            }
        }
    }
}
