//! Post a new ad

use dioxus::prelude::*;

use crate::api::{upload_ad, AdImage};
use crate::components::ErrorNotice;
use crate::routes::Route;
use crate::state::Category;
use crate::types::{parse_tags, NewAd};

const INPUT_CLASS: &str =
    "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500";

#[component]
pub fn UploadAd() -> Element {
    let navigator = use_navigator();

    let mut product_name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut category = use_signal(|| Category::HomeKitchen);
    let mut price = use_signal(String::new);
    let mut tags = use_signal(String::new);
    let mut image = use_signal(|| None::<AdImage>);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let handle_file = move |e: FormEvent| async move {
        let Some(files) = e.files() else {
            return;
        };
        let Some(name) = files.files().into_iter().next() else {
            image.set(None);
            return;
        };
        match files.read_file(&name).await {
            Some(bytes) => image.set(Some(AdImage { file_name: name, bytes })),
            None => error.set(Some(format!("Could not read {name}"))),
        }
    };

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();

        let ad = NewAd {
            product_name: product_name().trim().to_string(),
            description: description().trim().to_string(),
            ad_type: category().ad_type().to_string(),
            price: price().trim().parse().unwrap_or(0.0),
            tags: parse_tags(&tags()),
        };
        if let Err(message) = ad.validate() {
            error.set(Some(message.to_string()));
            return;
        }

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match upload_ad(&ad, image()).await {
                Ok(()) => {
                    navigator.push(Route::MyAds {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Ad upload failed");
                    error.set(Some(e.to_string()));
                }
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 max-w-2xl",
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Post an ad" }

            if let Some(err) = error() {
                ErrorNotice { message: err }
            }

            form {
                onsubmit: handle_submit,
                class: "space-y-4",

                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Product name" }
                    input {
                        r#type: "text",
                        value: "{product_name}",
                        oninput: move |e| product_name.set(e.value()),
                        class: INPUT_CLASS,
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Description" }
                    textarea {
                        rows: "4",
                        value: "{description}",
                        oninput: move |e| description.set(e.value()),
                        class: INPUT_CLASS,
                    }
                }
                div {
                    class: "grid grid-cols-2 gap-4",
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Category" }
                        select {
                            class: INPUT_CLASS,
                            onchange: move |e| {
                                if let Some(selected) = e.value().parse().ok().and_then(Category::from_id) {
                                    category.set(selected);
                                }
                            },
                            for choice in Category::variants() {
                                option {
                                    key: "{choice.id()}",
                                    value: "{choice.id()}",
                                    selected: category() == *choice,
                                    "{choice.label()}"
                                }
                            }
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Price" }
                        input {
                            r#type: "number",
                            min: "0",
                            step: "any",
                            value: "{price}",
                            oninput: move |e| price.set(e.value()),
                            class: INPUT_CLASS,
                        }
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Tags" }
                    input {
                        r#type: "text",
                        value: "{tags}",
                        placeholder: "steel, kettle, kitchen",
                        oninput: move |e| tags.set(e.value()),
                        class: INPUT_CLASS,
                    }
                    p { class: "mt-1 text-xs text-gray-500", "Separate tags with commas" }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Photo" }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        onchange: handle_file,
                    }
                }

                button {
                    r#type: "submit",
                    class: "bg-indigo-600 text-white px-6 py-2 rounded-md hover:bg-indigo-700 disabled:opacity-50",
                    disabled: is_pending(),
                    if is_pending() { "Posting..." } else { "Post ad" }
                }
            }
        }
    }
}
