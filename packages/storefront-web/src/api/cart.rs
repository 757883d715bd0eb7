//! Cart endpoints

use super::client::{api_client, ApiError};
use crate::types::{AddToCartRequest, CartItem, RemoveFromCartRequest};

pub async fn fetch_cart() -> Result<Vec<CartItem>, ApiError> {
    api_client().get("cart").await
}

pub async fn add_to_cart(ad_id: &str, quantity: u32) -> Result<(), ApiError> {
    api_client()
        .post_unit(
            &format!("cart/{}", urlencoding::encode(ad_id)),
            &AddToCartRequest { quantity: quantity.max(1) },
        )
        .await
}

pub async fn remove_from_cart(ad_id: &str) -> Result<(), ApiError> {
    api_client()
        .post_unit("remove-from-cart", &RemoveFromCartRequest { ad_id })
        .await
}
