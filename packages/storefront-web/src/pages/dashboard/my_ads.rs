//! Seller's own ads

use dioxus::prelude::*;

use crate::api::{delete_ad, fetch_my_ads, update_ad};
use crate::components::{AdGridSkeleton, ConfirmDialog, EmptyState, ErrorNotice};
use crate::routes::Route;
use crate::state::PendingDelete;
use crate::types::{format_price, Ad, AdUpdate};

#[component]
pub fn MyAds() -> Element {
    let mut ads = use_resource(fetch_my_ads);
    let mut editing = use_signal(|| None::<Ad>);
    let mut error = use_signal(|| None::<String>);
    let mut pending_delete = use_signal(PendingDelete::default);

    let handle_delete = move |id: String| {
        spawn(async move {
            match delete_ad(&id).await {
                Ok(()) => {
                    tracing::info!(ad_id = %id, "Ad deleted");
                    ads.restart();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let listing = match &*ads.read() {
        None => rsx! { AdGridSkeleton { count: 3 } },
        Some(Err(e)) => rsx! { ErrorNotice { message: e.to_string() } },
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState {
                title: "You have not posted any ads yet".to_string(),
            }
        },
        Some(Ok(list)) => rsx! {
            div {
                class: "bg-white rounded-lg border border-gray-200 divide-y",
                for ad in list.iter().cloned() {
                    div {
                        key: "{ad.id}",
                        class: "flex items-center justify-between p-4",
                        div {
                            p { class: "font-medium text-gray-900", "{ad.title()}" }
                            p { class: "text-sm text-gray-500", "{format_price(ad.price)} \u{00B7} {ad.tag_list()}" }
                        }
                        div {
                            class: "flex gap-2",
                            button {
                                class: "text-sm px-3 py-1.5 rounded border border-gray-300 hover:bg-gray-50",
                                onclick: {
                                    let ad = ad.clone();
                                    move |_| editing.set(Some(ad.clone()))
                                },
                                "Edit"
                            }
                            button {
                                class: "text-sm px-3 py-1.5 rounded border border-red-300 text-red-700 hover:bg-red-50",
                                onclick: {
                                    let id = ad.id.clone();
                                    move |_| pending_delete.write().ask(id.clone())
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "My ads" }
                Link {
                    to: Route::UploadAd {},
                    class: "bg-indigo-600 text-white px-4 py-2 rounded-md hover:bg-indigo-700 text-sm",
                    "Post an ad"
                }
            }

            if let Some(err) = error() {
                ErrorNotice { message: err }
            }

            {listing}

            if pending_delete.read().is_open() {
                ConfirmDialog {
                    message: "Are you sure you want to delete this ad?".to_string(),
                    on_confirm: move |_| {
                        let id = pending_delete.write().confirm();
                        if let Some(id) = id {
                            handle_delete(id);
                        }
                    },
                    on_cancel: move |_| pending_delete.write().cancel()
                }
            }

            if let Some(ad) = editing() {
                EditAdModal {
                    ad: ad,
                    on_close: move |_| editing.set(None),
                    on_saved: move |_| {
                        editing.set(None);
                        ads.restart();
                    }
                }
            }
        }
    }
}

#[component]
fn EditAdModal(ad: Ad, on_close: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let mut product_name = use_signal(|| ad.product_name.clone());
    let mut description = use_signal(|| ad.description.clone());
    let mut tags = use_signal(|| ad.tag_list());
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let handle_save = move |e: FormEvent| {
        e.prevent_default();
        let update = AdUpdate::from_form(&product_name(), &description(), &tags());
        if update.product_name.is_empty() {
            error.set(Some("Product name cannot be empty".to_string()));
            return;
        }
        let id = ad.id.clone();
        spawn(async move {
            is_pending.set(true);
            match update_ad(&id, &update).await {
                Ok(()) => on_saved.call(()),
                Err(e) => error.set(Some(e.to_string())),
            }
            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black/40 flex items-center justify-center z-50",
            form {
                class: "bg-white rounded-lg shadow-xl p-6 w-full max-w-md space-y-4",
                onsubmit: handle_save,
                h2 { class: "text-lg font-semibold text-gray-900", "Edit ad" }
                if let Some(err) = error() {
                    ErrorNotice { message: err }
                }
                input {
                    r#type: "text",
                    value: "{product_name}",
                    oninput: move |e| product_name.set(e.value()),
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                }
                textarea {
                    rows: "3",
                    value: "{description}",
                    oninput: move |e| description.set(e.value()),
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                }
                input {
                    r#type: "text",
                    value: "{tags}",
                    oninput: move |e| tags.set(e.value()),
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                }
                div {
                    class: "flex justify-end gap-2",
                    button {
                        r#type: "button",
                        class: "px-4 py-2 text-sm rounded border border-gray-300",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "px-4 py-2 text-sm rounded bg-indigo-600 text-white disabled:opacity-50",
                        disabled: is_pending(),
                        "Save"
                    }
                }
            }
        }
    }
}
