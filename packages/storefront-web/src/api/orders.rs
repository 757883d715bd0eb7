//! Order placement

use super::client::{api_client, ApiError};
use crate::types::{Address, CheckoutItem, OrderConfirmation, OrderRequest};

/// Orders placed before the first failure, if any
///
/// `confirmations` line up with the leading checkout lines; lines after them
/// were not sent.
#[derive(Debug)]
pub struct OrderOutcome {
    pub confirmations: Vec<OrderConfirmation>,
    pub failure: Option<ApiError>,
}

/// Place one order per checkout line, stopping at the first failure
pub async fn place_order(items: &[CheckoutItem], address: &Address) -> OrderOutcome {
    let mut confirmations = Vec::with_capacity(items.len());
    for item in items {
        let request = OrderRequest {
            ad_id: item.ad_id.clone(),
            total: item.total(),
            quantity: item.quantity,
            address: address.clone(),
        };
        match api_client().post::<_, OrderConfirmation>("orders", &request).await {
            Ok(confirmation) => {
                tracing::info!(ad_id = %item.ad_id, order_no = ?confirmation.order_no, "Order placed");
                confirmations.push(confirmation);
            }
            Err(e) => {
                return OrderOutcome {
                    confirmations,
                    failure: Some(e),
                };
            }
        }
    }
    OrderOutcome {
        confirmations,
        failure: None,
    }
}
