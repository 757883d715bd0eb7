//! Keyword search results

use dioxus::prelude::*;

use crate::api::search_ads;
use crate::components::{AdCard, AdGridSkeleton, EmptyState, ErrorNotice};

#[component]
pub fn Search(keyword: String) -> Element {
    let results = use_resource(use_reactive!(|keyword| async move {
        if keyword.trim().is_empty() {
            return Ok(Vec::new());
        }
        search_ads(keyword.trim()).await
    }));

    let body = match &*results.read() {
        None => rsx! { AdGridSkeleton {} },
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Search failed");
            rsx! { ErrorNotice { message: e.to_string() } }
        }
        Some(Ok(ads)) if ads.is_empty() => rsx! {
            EmptyState {
                title: "No products found".to_string(),
                hint: "Try a different keyword".to_string()
            }
        },
        Some(Ok(ads)) => rsx! {
            div {
                class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6",
                for ad in ads.iter() {
                    AdCard { key: "{ad.id}", ad: ad.clone() }
                }
            }
        },
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Results for \u{201C}{keyword}\u{201D}" }
            {body}
        }
    }
}
