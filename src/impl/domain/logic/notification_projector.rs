use chrono::{DateTime, Utc};

use crate::entities::{
    DeliveryChannel, DeliveryOutcome, DeliveryRecord, NormalizedStatus, NotificationView,
};

impl NormalizedStatus {
    /// Label by channel and status: the same success renders as "Delivered"
    /// for email but "Forwarded" for mail.
    pub fn display_label(&self, channel: DeliveryChannel) -> &'static str {
        match (self, channel) {
            (NormalizedStatus::Delivered, DeliveryChannel::Email) => "Delivered",
            (NormalizedStatus::Delivered, DeliveryChannel::PhysicalMail) => "Forwarded",
            (NormalizedStatus::Failed, DeliveryChannel::Email) => "Bounced",
            (NormalizedStatus::Failed, DeliveryChannel::PhysicalMail) => "Incomplete",
            (NormalizedStatus::Pending, _) => "Processing",
            (NormalizedStatus::ManualMailingRequired, _) => "Manual Mailing Required",
        }
    }
}

impl DeliveryRecord {
    /// Confirmation or failure time if known, otherwise the send time.
    pub fn display_timestamp(&self) -> Option<DateTime<Utc>> {
        match &self.outcome {
            DeliveryOutcome::Confirmed { at } | DeliveryOutcome::Failed { at, .. } => Some(*at),
            DeliveryOutcome::Awaiting => self.sent_at,
        }
    }
}

pub(crate) struct NotificationProjector<'a> {
    records: &'a [DeliveryRecord],
}

impl<'a> NotificationProjector<'a> {
    pub(crate) fn new(records: &'a [DeliveryRecord]) -> Self {
        Self { records }
    }

    pub(crate) fn process(self) -> Vec<NotificationView> {
        self.records.iter().map(Self::project).collect()
    }

    pub(crate) fn project(record: &DeliveryRecord) -> NotificationView {
        let channel = record.channel();
        let normalized_status = record.classify();
        let reason = match normalized_status {
            NormalizedStatus::Failed => record.failure_reason().map(str::to_string),
            _ => None,
        };
        NotificationView {
            customer_id: record.customer.id.clone(),
            customer_name: record.customer.name.clone(),
            customer_number: record.customer.customer_number.clone(),
            email: record.customer.email.clone(),
            representative: record.customer.representative.clone(),
            customer_type: record.customer.customer_type,
            balance: record.customer.balance,
            currency: record.customer.currency,
            channel,
            normalized_status,
            display_label: normalized_status.display_label(channel),
            display_timestamp: record.display_timestamp(),
            reason,
        }
    }
}
