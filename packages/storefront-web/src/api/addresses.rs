//! Saved shipping addresses

use super::client::{api_client, ApiError};
use crate::types::{Address, AddressForm, AddressesResponse};

pub async fn fetch_addresses() -> Result<Vec<Address>, ApiError> {
    let response: AddressesResponse = api_client().get("GetAddress").await?;
    Ok(response.addresses)
}

pub async fn add_address(form: &AddressForm) -> Result<(), ApiError> {
    api_client().post_unit("Address", form).await
}

pub async fn update_address(id: &str, form: &AddressForm) -> Result<(), ApiError> {
    let _: serde_json::Value = api_client()
        .put(&format!("Address/{}", urlencoding::encode(id)), form)
        .await?;
    Ok(())
}

pub async fn delete_address(id: &str) -> Result<(), ApiError> {
    api_client()
        .delete(&format!("Address/{}", urlencoding::encode(id)))
        .await
}
