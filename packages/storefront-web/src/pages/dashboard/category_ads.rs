//! Ads of one category with a max price filter

use dioxus::prelude::*;

use crate::api::fetch_ads_by_category;
use crate::components::{AdCard, AdGridSkeleton, EmptyState, ErrorNotice, PriceBar};
use crate::state::{Category, DEFAULT_MAX_PRICE};

#[component]
pub fn CategoryAds(id: u32) -> Element {
    let mut max_price = use_signal(|| DEFAULT_MAX_PRICE);
    let category = Category::from_id(id);

    let ads = use_resource(use_reactive!(|(id,)| {
        let max = max_price();
        async move {
            let Some(category) = Category::from_id(id) else {
                return Ok(Vec::new());
            };
            fetch_ads_by_category(category.ad_type(), Some(max)).await
        }
    }));

    let Some(category) = category else {
        return rsx! {
            EmptyState { title: "Unknown category".to_string() }
        };
    };

    let listing = match &*ads.read() {
        None => rsx! { AdGridSkeleton {} },
        Some(Err(e)) => {
            tracing::warn!(error = %e, category = category.ad_type(), "Failed to load category ads");
            rsx! { ErrorNotice { message: e.to_string() } }
        }
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState {
                title: "No ads at this price".to_string(),
                hint: "Try raising the max price".to_string()
            }
        },
        Some(Ok(list)) => rsx! {
            div {
                class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6",
                for ad in list.iter() {
                    AdCard { key: "{ad.id}", ad: ad.clone() }
                }
            }
        },
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "{category.icon()} {category.label()}" }

            PriceBar {
                max_price: max_price(),
                on_change: move |value| max_price.set(value)
            }

            {listing}
        }
    }
}
