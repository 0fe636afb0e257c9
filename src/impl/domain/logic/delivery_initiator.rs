use chrono::{DateTime, Utc};

use crate::entities::{DeliveryRecord, FilterCriteria, SendMode};

use super::{
    notification_filter::NotificationFilter, notification_projector::NotificationProjector,
};

/// Starts a new delivery for every record that passes the filter and is
/// covered by the send mode, on the channel of the record's last attempt.
pub(crate) struct DeliveryInitiator<'a> {
    records: &'a [DeliveryRecord],
    criteria: &'a FilterCriteria,
    mode: &'a SendMode,
    sent_at: DateTime<Utc>,
}

impl<'a> DeliveryInitiator<'a> {
    pub(crate) fn new(
        records: &'a [DeliveryRecord],
        criteria: &'a FilterCriteria,
        mode: &'a SendMode,
        sent_at: DateTime<Utc>,
    ) -> Self {
        Self {
            records,
            criteria,
            mode,
            sent_at,
        }
    }

    /// New pending records, in input order. Selected ids outside the filter
    /// are not sent.
    pub(crate) fn process(self) -> Vec<DeliveryRecord> {
        let filter = NotificationFilter::new(self.criteria);
        self.records
            .iter()
            .filter(|record| match self.mode {
                SendMode::All => true,
                SendMode::Selected(ids) => ids.contains(record.customer_id()),
            })
            .filter(|record| filter.matches(&NotificationProjector::project(record)))
            .map(|record| {
                DeliveryRecord::initiate(record.customer.clone(), record.channel(), self.sent_at)
            })
            .collect()
    }
}
