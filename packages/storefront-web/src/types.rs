//! Type definitions for REST API payloads
//!
//! Ids come from the backend as `_id`; every id field accepts both spellings.

use serde::{Deserialize, Serialize};

// ============================================================================
// Ads
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ad_type: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub feedbacks: Vec<Feedback>,
}

impl Ad {
    /// Name to show on cards; some ads only carry a description
    pub fn title(&self) -> &str {
        if self.product_name.trim().is_empty() {
            &self.description
        } else {
            &self.product_name
        }
    }

    pub fn tag_list(&self) -> String {
        self.tags.join(", ")
    }

    pub fn average_rating(&self) -> Option<f64> {
        if self.feedbacks.is_empty() {
            return None;
        }
        let sum: u32 = self.feedbacks.iter().map(|f| u32::from(f.rating)).sum();
        Some(f64::from(sum) / self.feedbacks.len() as f64)
    }
}

/// `GET /ad/{id}` answers either with the ad or with `{ "ad": ... }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AdResponse {
    Wrapped { ad: Ad },
    Bare(Ad),
}

impl From<AdResponse> for Ad {
    fn from(response: AdResponse) -> Self {
        match response {
            AdResponse::Wrapped { ad } => ad,
            AdResponse::Bare(ad) => ad,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedAdsResponse {
    #[serde(default)]
    pub related_ads: Vec<Ad>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MyAdsResponse {
    #[serde(default)]
    pub ads: Vec<Ad>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedAdsRequest<'a> {
    pub tags: &'a [String],
    pub ad_type: &'a str,
}

/// Editable fields of an existing ad
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdUpdate {
    pub product_name: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl AdUpdate {
    pub fn from_form(product_name: &str, description: &str, tags: &str) -> Self {
        Self {
            product_name: product_name.trim().to_string(),
            description: description.trim().to_string(),
            tags: parse_tags(tags),
        }
    }
}

/// Fields of a new ad; the image travels as a separate multipart part
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewAd {
    pub product_name: String,
    pub description: String,
    pub ad_type: String,
    pub price: f64,
    pub tags: Vec<String>,
}

impl NewAd {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.product_name.trim().is_empty() {
            return Err("Please enter a product name");
        }
        if self.ad_type.trim().is_empty() {
            return Err("Please choose a category");
        }
        if !(self.price.is_finite() && self.price > 0.0) {
            return Err("Price must be greater than zero");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackRequest {
    pub comment: String,
    pub rating: u8,
}

impl FeedbackRequest {
    pub fn new(comment: &str, rating: u8) -> Result<Self, &'static str> {
        if !(1..=5).contains(&rating) {
            return Err("Please select a valid rating (1-5).");
        }
        if comment.trim().is_empty() {
            return Err("Please write a comment.");
        }
        Ok(Self {
            comment: comment.trim().to_string(),
            rating,
        })
    }
}

/// Split comma separated tags, trimming and dropping empties
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Cart
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(alias = "_id")]
    pub id: String,
    pub ad: Option<Ad>,
    pub price: Option<f64>,
    pub quantity: Option<u32>,
}

impl CartItem {
    /// Price captured on the cart line, falling back to the ad's price
    pub fn unit_price(&self) -> f64 {
        self.price
            .or_else(|| self.ad.as_ref().map(|ad| ad.price))
            .unwrap_or(0.0)
    }

    pub fn quantity(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity())
    }
}

pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

#[derive(Debug, Serialize)]
pub struct AddToCartRequest {
    pub quantity: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartRequest<'a> {
    pub ad_id: &'a str,
}

// ============================================================================
// Addresses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub mobile_no: String,
}

impl Address {
    pub fn summary(&self) -> String {
        format!("{}, {} - {}", self.city, self.state, self.postal_code)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AddressesResponse {
    #[serde(default)]
    pub addresses: Vec<Address>,
}

/// Address form contents; every field is required
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressForm {
    pub label: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub mobile_no: String,
}

impl AddressForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        let fields = [
            (&self.label, "Please enter a label"),
            (&self.city, "Please enter a city"),
            (&self.state, "Please enter a state"),
            (&self.postal_code, "Please enter a postal code"),
            (&self.mobile_no, "Please enter a mobile number"),
        ];
        for (value, message) in fields {
            if value.trim().is_empty() {
                return Err(message);
            }
        }
        Ok(())
    }
}

impl From<&Address> for AddressForm {
    fn from(address: &Address) -> Self {
        Self {
            label: address.label.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            postal_code: address.postal_code.clone(),
            mobile_no: address.mobile_no.clone(),
        }
    }
}

// ============================================================================
// Orders
// ============================================================================

/// One line handed to checkout
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutItem {
    pub ad_id: String,
    pub product_name: String,
    pub price: f64,
    pub quantity: u32,
    pub image_url: Option<String>,
}

impl CheckoutItem {
    pub fn from_ad(ad: &Ad, quantity: u32) -> Self {
        Self {
            ad_id: ad.id.clone(),
            product_name: ad.title().to_string(),
            price: ad.price,
            quantity: quantity.max(1),
            image_url: ad.image_url.clone(),
        }
    }

    pub fn from_cart(item: &CartItem) -> Option<Self> {
        let ad = item.ad.as_ref()?;
        Some(Self {
            price: item.unit_price(),
            ..Self::from_ad(ad, item.quantity())
        })
    }

    pub fn total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub ad_id: String,
    pub total: f64,
    pub quantity: u32,
    pub address: Address,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_no: Option<String>,
}

/// Pair confirmations with the leading checkout lines they were returned for
///
/// Returns the order numbers of the placed lines and the lines still to be
/// placed. A confirmation without a number is shown as `pending-<ad id>`.
pub fn split_placed(
    items: &[CheckoutItem],
    confirmations: Vec<OrderConfirmation>,
) -> (Vec<String>, Vec<CheckoutItem>) {
    let placed = confirmations.len().min(items.len());
    let numbers = confirmations
        .into_iter()
        .zip(items)
        .map(|(confirmation, item)| {
            confirmation
                .order_no
                .unwrap_or_else(|| format!("pending-{}", item.ad_id))
        })
        .collect();
    (numbers, items[placed..].to_vec())
}

// ============================================================================
// Auth
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: storefront_access::Role,
}

/// Format a price in rupees, dropping the fraction when it is zero
pub fn format_price(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("\u{20B9}{amount:.0}")
    } else {
        format!("\u{20B9}{amount:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ad(price: f64) -> Ad {
        serde_json::from_value(serde_json::json!({
            "_id": "a1",
            "productName": "Kettle",
            "adType": "Kitchen & Home Appliances",
            "price": price,
        }))
        .unwrap()
    }

    #[test]
    fn ad_accepts_mongo_ids_and_missing_fields() {
        let ad = ad(499.0);
        assert_eq!(ad.id, "a1");
        assert!(ad.tags.is_empty());
        assert_eq!(ad.average_rating(), None);
    }

    #[test]
    fn ad_response_unwraps_both_shapes() {
        let wrapped: AdResponse =
            serde_json::from_str(r#"{"ad":{"_id":"x","price":10}}"#).unwrap();
        let bare: AdResponse = serde_json::from_str(r#"{"_id":"y","price":10}"#).unwrap();
        assert_eq!(Ad::from(wrapped).id, "x");
        assert_eq!(Ad::from(bare).id, "y");
    }

    #[test]
    fn cart_total_uses_line_price_then_ad_price() {
        let items = vec![
            CartItem {
                id: "c1".into(),
                ad: Some(ad(100.0)),
                price: Some(80.0),
                quantity: Some(2),
            },
            CartItem {
                id: "c2".into(),
                ad: Some(ad(50.0)),
                price: None,
                quantity: None,
            },
            CartItem {
                id: "c3".into(),
                ad: None,
                price: None,
                quantity: Some(3),
            },
        ];
        assert_eq!(cart_total(&items), 210.0);
    }

    #[test]
    fn parses_comma_separated_tags() {
        assert_eq!(parse_tags(" steel, kettle ,, ,home"), vec!["steel", "kettle", "home"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn feedback_requires_rating_and_comment() {
        assert!(FeedbackRequest::new("Great", 0).is_err());
        assert!(FeedbackRequest::new("Great", 6).is_err());
        assert!(FeedbackRequest::new("   ", 4).is_err());
        assert_eq!(FeedbackRequest::new(" Great ", 5).unwrap().comment, "Great");
    }

    #[test]
    fn address_form_requires_every_field() {
        let mut form = AddressForm {
            label: "Home".into(),
            city: "Pune".into(),
            state: "MH".into(),
            postal_code: "411001".into(),
            mobile_no: String::new(),
        };
        assert_eq!(form.validate(), Err("Please enter a mobile number"));
        form.mobile_no = "9800000000".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn checkout_item_from_cart_keeps_line_price() {
        let item = CartItem {
            id: "c1".into(),
            ad: Some(ad(100.0)),
            price: Some(90.0),
            quantity: Some(2),
        };
        let line = CheckoutItem::from_cart(&item).unwrap();
        assert_eq!(line.price, 90.0);
        assert_eq!(line.total(), 180.0);
        assert_eq!(line.product_name, "Kettle");
    }

    fn line(ad_id: &str) -> CheckoutItem {
        CheckoutItem {
            ad_id: ad_id.into(),
            product_name: "Kettle".into(),
            price: 100.0,
            quantity: 1,
            image_url: None,
        }
    }

    fn confirmed(order_no: Option<&str>) -> OrderConfirmation {
        OrderConfirmation {
            order_no: order_no.map(str::to_string),
        }
    }

    #[test]
    fn split_placed_keeps_unplaced_lines() {
        let items = vec![line("a1"), line("a2"), line("a3")];

        let (numbers, remaining) = split_placed(&items, vec![confirmed(Some("ORD-1"))]);
        assert_eq!(numbers, vec!["ORD-1"]);
        assert_eq!(remaining, vec![line("a2"), line("a3")]);

        let (numbers, remaining) = split_placed(&items, Vec::new());
        assert!(numbers.is_empty());
        assert_eq!(remaining, items);
    }

    #[test]
    fn split_placed_with_every_line_confirmed() {
        let items = vec![line("a1"), line("a2")];
        let (numbers, remaining) =
            split_placed(&items, vec![confirmed(Some("ORD-1")), confirmed(None)]);
        assert_eq!(numbers, vec!["ORD-1", "pending-a2"]);
        assert!(remaining.is_empty());
    }

    #[test]
    fn new_ad_validation() {
        let mut new_ad = NewAd {
            product_name: "Lamp".into(),
            ad_type: "tech".into(),
            price: 0.0,
            ..Default::default()
        };
        assert_eq!(new_ad.validate(), Err("Price must be greater than zero"));
        new_ad.price = 250.0;
        assert!(new_ad.validate().is_ok());
    }

    #[test]
    fn formats_prices() {
        assert_eq!(format_price(2499.0), "\u{20B9}2499");
        assert_eq!(format_price(12.5), "\u{20B9}12.50");
    }
}
