// Presentation outputs.
// ---

/// One row of the notifications table, with every cell already formatted.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRow {
    pub customer_name: String,
    pub customer_number: String,
    pub email: String,
    pub representative: String,
    pub channel: String,
    pub status: String,
    pub timestamp: String,
    pub balance: String,
    pub reason: Option<String>,
}

/// The three overview cards. When a scope is active each value carries the
/// global count in parentheses, e.g. "3 (8)".
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub total: String,
    pub delivered_or_forwarded: String,
    pub bounced_or_incomplete: String,
}
