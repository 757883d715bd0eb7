//! Ad card component

use dioxus::prelude::*;

use crate::routes::Route;
use crate::types::{format_price, Ad};

/// Card linking to an ad's detail page
#[component]
pub fn AdCard(ad: Ad) -> Element {
    let rating = ad.average_rating();

    rsx! {
        Link {
            to: Route::AdDetails { id: ad.id.clone() },
            class: "rounded-xl border border-gray-200 bg-white p-4 hover:shadow-lg transition-all duration-200 flex flex-col h-full",

            if let Some(url) = ad.image_url.as_ref() {
                img {
                    src: "{url}",
                    alt: "{ad.title()}",
                    class: "h-40 w-full object-cover rounded-lg mb-4"
                }
            } else {
                div {
                    class: "h-40 w-full rounded-lg mb-4 bg-gray-100 flex items-center justify-center text-gray-400 text-sm",
                    "No image"
                }
            }

            h3 {
                class: "text-lg font-semibold text-gray-900 mb-1 line-clamp-2",
                "{ad.title()}"
            }
            if !ad.ad_type.is_empty() {
                p { class: "text-xs text-gray-500 mb-2", "{ad.ad_type}" }
            }

            div {
                class: "mt-auto flex items-center justify-between",
                span { class: "text-indigo-700 font-bold", "{format_price(ad.price)}" }
                if let Some(rating) = rating {
                    span { class: "text-xs text-amber-600", "\u{2605} {rating:.1}" }
                }
            }
        }
    }
}
