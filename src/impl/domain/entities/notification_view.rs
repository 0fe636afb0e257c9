use chrono::{DateTime, Utc};
use iso_currency::Currency;

use super::{
    customer::{CustomerId, CustomerType, Representative},
    delivery_state::{DeliveryChannel, NormalizedStatus},
};

/// Display-ready projection of a delivery record.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationView {
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub customer_number: String,
    pub email: String,
    pub representative: Representative,
    pub customer_type: CustomerType,
    pub balance: f64,
    #[serde(skip)]
    pub currency: Currency,
    pub channel: DeliveryChannel,
    pub normalized_status: NormalizedStatus,
    pub display_label: &'static str,
    /// Most recent event: confirmation or failure supersede the send time.
    pub display_timestamp: Option<DateTime<Utc>>,
    /// Failure reason, only for failed deliveries.
    pub reason: Option<String>,
}
