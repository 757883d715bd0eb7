//! Ad detail page

use dioxus::prelude::*;

use crate::api::{add_to_cart, fetch_ad, fetch_cart, fetch_related_ads, remove_from_cart, submit_feedback};
use crate::components::{AdCard, ErrorNotice, LoadingSpinner};
use crate::routes::Route;
use crate::state::use_checkout;
use crate::types::{format_price, Ad, CheckoutItem, FeedbackRequest};

#[component]
pub fn AdDetails(id: String) -> Element {
    let mut ad_resource = use_resource(use_reactive!(|id| async move { fetch_ad(&id).await }));
    let mut cart = use_resource(fetch_cart);

    let related = use_resource(move || {
        let current = ad_resource
            .read()
            .as_ref()
            .and_then(|result| result.as_ref().ok())
            .cloned();
        async move {
            let Some(ad) = current else {
                return Vec::new();
            };
            match fetch_related_ads(&ad.tags, &ad.ad_type).await {
                Ok(list) => list.into_iter().filter(|other| other.id != ad.id).collect(),
                Err(e) => {
                    tracing::warn!(error = %e, ad_id = %ad.id, "Failed to load related ads");
                    Vec::new()
                }
            }
        }
    });

    // Related ads link back into this page, so start each ad at the top
    use_effect(use_reactive!(|id| {
        tracing::debug!(ad_id = %id, "Showing ad");
        scroll_to_top();
    }));

    let mut quantity = use_signal(|| 1u32);
    let mut cart_pending = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let navigator = use_navigator();
    let mut checkout = use_checkout();

    let ad = match &*ad_resource.read() {
        None => {
            return rsx! {
                div { class: "py-24 flex justify-center", LoadingSpinner {} }
            }
        }
        Some(Err(e)) => return rsx! { ErrorNotice { message: e.to_string() } },
        Some(Ok(ad)) => ad.clone(),
    };

    let in_cart = match &*cart.read() {
        Some(Ok(items)) => items
            .iter()
            .any(|item| item.ad.as_ref().is_some_and(|cart_ad| cart_ad.id == ad.id)),
        _ => false,
    };

    let handle_cart = {
        let ad_id = ad.id.clone();
        move |_| {
            let ad_id = ad_id.clone();
            spawn(async move {
                cart_pending.set(true);
                let result = if in_cart {
                    remove_from_cart(&ad_id).await
                } else {
                    add_to_cart(&ad_id, quantity()).await
                };
                match result {
                    Ok(()) => cart.restart(),
                    Err(e) => {
                        tracing::warn!(error = %e, ad_id = %ad_id, "Cart update failed");
                        error.set(Some(e.to_string()));
                    }
                }
                cart_pending.set(false);
            });
        }
    };

    let handle_buy_now = {
        let ad = ad.clone();
        move |_| {
            checkout.start(vec![CheckoutItem::from_ad(&ad, quantity())]);
            navigator.push(Route::Checkout {});
        }
    };

    let related_ads = related.read().clone().unwrap_or_default();

    rsx! {
        div {
            if let Some(err) = error() {
                ErrorNotice { message: err }
            }

            div {
                class: "bg-white rounded-lg border border-gray-200 p-6 grid grid-cols-1 md:grid-cols-2 gap-8",
                if let Some(url) = ad.image_url.as_ref() {
                    img { src: "{url}", alt: "{ad.title()}", class: "w-full rounded-lg object-cover" }
                } else {
                    div { class: "h-64 rounded-lg bg-gray-100 flex items-center justify-center text-gray-400", "No image" }
                }

                div {
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "{ad.title()}" }
                    p { class: "text-2xl text-indigo-700 font-bold mb-4", "{format_price(ad.price)}" }
                    p { class: "text-gray-700 mb-4 whitespace-pre-line", "{ad.description}" }
                    if !ad.tags.is_empty() {
                        div {
                            class: "flex flex-wrap gap-2 mb-6",
                            for tag in ad.tags.iter() {
                                span { key: "{tag}", class: "px-2 py-0.5 rounded-full bg-gray-100 text-xs text-gray-600", "#{tag}" }
                            }
                        }
                    }

                    div {
                        class: "flex items-center gap-3 mb-4",
                        label { class: "text-sm text-gray-700", "Quantity" }
                        input {
                            r#type: "number",
                            min: "1",
                            value: "{quantity}",
                            class: "w-20 px-2 py-1 border border-gray-300 rounded-md",
                            oninput: move |e| {
                                if let Ok(value) = e.value().parse::<u32>() {
                                    quantity.set(value.max(1));
                                }
                            }
                        }
                    }

                    div {
                        class: "flex gap-3",
                        button {
                            class: "px-5 py-2 rounded-md border border-indigo-600 text-indigo-700 hover:bg-indigo-50 disabled:opacity-50",
                            disabled: cart_pending(),
                            onclick: handle_cart,
                            if in_cart { "Remove from cart" } else { "Add to cart" }
                        }
                        button {
                            class: "px-5 py-2 rounded-md bg-indigo-600 text-white hover:bg-indigo-700",
                            onclick: handle_buy_now,
                            "Buy now \u{00B7} {format_price(ad.price * f64::from(quantity()))}"
                        }
                    }
                }
            }

            Reviews { ad: ad.clone(), on_submitted: move |_| ad_resource.restart() }

            if !related_ads.is_empty() {
                h2 { class: "text-lg font-semibold text-gray-800 mt-10 mb-4", "Related ads" }
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6",
                    for other in related_ads {
                        AdCard { key: "{other.id}", ad: other }
                    }
                }
            }
        }
    }
}

/// Existing feedback plus the form to leave a rating
#[component]
fn Reviews(ad: Ad, on_submitted: EventHandler<()>) -> Element {
    let mut rating = use_signal(|| 0u8);
    let mut comment = use_signal(String::new);
    let mut message = use_signal(|| None::<Result<String, String>>);
    let mut is_pending = use_signal(|| false);

    let handle_submit = {
        let ad_id = ad.id.clone();
        move |e: FormEvent| {
            e.prevent_default();
            let request = match FeedbackRequest::new(&comment(), rating()) {
                Ok(request) => request,
                Err(reason) => {
                    message.set(Some(Err(reason.to_string())));
                    return;
                }
            };
            let ad_id = ad_id.clone();
            spawn(async move {
                is_pending.set(true);
                match submit_feedback(&ad_id, &request).await {
                    Ok(()) => {
                        rating.set(0);
                        comment.set(String::new());
                        message.set(Some(Ok("Feedback submitted successfully!".to_string())));
                        on_submitted.call(());
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, ad_id = %ad_id, "Feedback submission failed");
                        message.set(Some(Err("Failed to submit feedback.".to_string())));
                    }
                }
                is_pending.set(false);
            });
        }
    };

    rsx! {
        section {
            class: "bg-white rounded-lg border border-gray-200 p-6 mt-8",
            h2 { class: "text-lg font-semibold text-gray-800 mb-4", "Reviews" }

            if ad.feedbacks.is_empty() {
                p { class: "text-sm text-gray-500 mb-6", "No reviews yet." }
            }
            for (index, feedback) in ad.feedbacks.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "border-b border-gray-100 pb-3 mb-3",
                    p { class: "text-amber-500 text-sm", "{stars(feedback.rating)}" }
                    p { class: "text-gray-700 text-sm", "{feedback.comment}" }
                    if let Some(name) = feedback.user_name.as_ref() {
                        p { class: "text-xs text-gray-400", "{name}" }
                    }
                }
            }

            match message() {
                Some(Ok(text)) => rsx! { p { class: "mb-3 text-sm text-green-700", "{text}" } },
                Some(Err(text)) => rsx! { ErrorNotice { message: text } },
                None => rsx! {},
            }

            form {
                onsubmit: handle_submit,
                div {
                    class: "flex gap-1 mb-3",
                    for value in 1..=5u8 {
                        button {
                            key: "{value}",
                            r#type: "button",
                            class: if value <= rating() { "text-2xl text-amber-500" } else { "text-2xl text-gray-300" },
                            onclick: move |_| rating.set(value),
                            "\u{2605}"
                        }
                    }
                }
                textarea {
                    rows: "3",
                    value: "{comment}",
                    placeholder: "Share your experience",
                    oninput: move |e| comment.set(e.value()),
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md mb-3",
                }
                button {
                    r#type: "submit",
                    class: "px-4 py-2 rounded-md bg-indigo-600 text-white text-sm disabled:opacity-50",
                    disabled: is_pending(),
                    "Submit review"
                }
            }
        }
    }
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "\u{2605}".repeat(filled), "\u{2606}".repeat(5 - filled))
}

#[cfg(feature = "web")]
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(not(feature = "web"))]
fn scroll_to_top() {}
