//! Max price slider

use dioxus::prelude::*;

use crate::state::PRICE_SLIDER_MAX;
use crate::types::format_price;

#[component]
pub fn PriceBar(max_price: u32, on_change: EventHandler<u32>) -> Element {
    rsx! {
        div {
            class: "mb-4",
            label {
                class: "block mb-2 font-semibold",
                "Max Price: {format_price(f64::from(max_price))}"
            }
            input {
                r#type: "range",
                min: "0",
                max: "{PRICE_SLIDER_MAX}",
                value: "{max_price}",
                class: "w-full",
                oninput: move |e| {
                    if let Ok(value) = e.value().parse::<u32>() {
                        on_change.call(value);
                    }
                }
            }
        }
    }
}
