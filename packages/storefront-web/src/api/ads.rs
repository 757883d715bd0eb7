//! Ad listing, detail and seller endpoints

use reqwest::multipart::{Form, Part};

use super::client::{api_client, ApiError};
use crate::types::{
    Ad, AdResponse, AdUpdate, FeedbackRequest, MyAdsResponse, NewAd, RelatedAdsRequest,
    RelatedAdsResponse,
};

/// Ads of one category, optionally capped at `max_price`
pub async fn fetch_ads_by_category(ad_type: &str, max_price: Option<u32>) -> Result<Vec<Ad>, ApiError> {
    let path = format!("category/{}", urlencoding::encode(ad_type));
    match max_price {
        Some(max) => {
            api_client()
                .get_with_query(&path, &[("maxPrice", max)])
                .await
        }
        None => api_client().get(&path).await,
    }
}

pub async fn search_ads(keyword: &str) -> Result<Vec<Ad>, ApiError> {
    api_client()
        .get_with_query("products/search", &[("keyword", keyword)])
        .await
}

pub async fn fetch_ad(id: &str) -> Result<Ad, ApiError> {
    let response: AdResponse = api_client()
        .get(&format!("ad/{}", urlencoding::encode(id)))
        .await?;
    Ok(response.into())
}

/// Ads sharing a tag or the category of the given ad
pub async fn fetch_related_ads(tags: &[String], ad_type: &str) -> Result<Vec<Ad>, ApiError> {
    let response: RelatedAdsResponse = api_client()
        .post("related-ads", &RelatedAdsRequest { tags, ad_type })
        .await?;
    Ok(response.related_ads)
}

/// Ads posted by the signed-in seller
pub async fn fetch_my_ads() -> Result<Vec<Ad>, ApiError> {
    let response: MyAdsResponse = api_client().get("GetMyAds").await?;
    Ok(response.ads)
}

pub async fn update_ad(id: &str, update: &AdUpdate) -> Result<(), ApiError> {
    let _: serde_json::Value = api_client()
        .put(&format!("ads/{}", urlencoding::encode(id)), update)
        .await?;
    Ok(())
}

pub async fn delete_ad(id: &str) -> Result<(), ApiError> {
    api_client()
        .delete(&format!("ads/{}", urlencoding::encode(id)))
        .await
}

/// Image attached to a new ad
#[derive(Debug, Clone, PartialEq)]
pub struct AdImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub async fn upload_ad(ad: &NewAd, image: Option<AdImage>) -> Result<(), ApiError> {
    let mut form = Form::new()
        .text("productName", ad.product_name.clone())
        .text("description", ad.description.clone())
        .text("adType", ad.ad_type.clone())
        .text("price", ad.price.to_string())
        .text("tags", ad.tags.join(","));

    if let Some(image) = image {
        form = form.part("file", Part::bytes(image.bytes).file_name(image.file_name));
    }

    let _: serde_json::Value = api_client().post_multipart("upload-ad", form).await?;
    tracing::info!(product = %ad.product_name, ad_type = %ad.ad_type, "Ad uploaded");
    Ok(())
}

pub async fn submit_feedback(ad_id: &str, feedback: &FeedbackRequest) -> Result<(), ApiError> {
    api_client()
        .post_unit(&format!("feedback/{}", urlencoding::encode(ad_id)), feedback)
        .await
}
