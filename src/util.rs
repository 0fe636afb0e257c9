use chrono::{DateTime, Utc};
use fractic_server_error::ServerError;

use crate::{
    config::DisplayConfig,
    data::models::delivery_state_model::{DeliveryChannelModel, DeliveryStateModel},
    domain::{
        logic::{
            delivery_initiator::DeliveryInitiator, notification_filter::NotificationFilter,
            notification_projector::NotificationProjector,
            representative_index::RepresentativeIndex, status_aggregator::StatusAggregator,
        },
        usecases::load_records_usecase::{LoadRecordsUsecase as _, LoadRecordsUsecaseImpl},
    },
    entities::{
        DeliveryChannel, DeliveryRecord, DeliveryState, FilterCriteria, NormalizedStatus,
        NotificationRow, NotificationView, Representative, ScopedStatusCounts, SendMode,
        StatusCounts, StatusSummary,
    },
    presentation::dashboard_printer::DashboardPrinter,
};

/// Delivery status engine for AR statements sent by email or physical mail.
///
/// Engine operations are pure: they never mutate the records passed in and
/// keep no state between calls.
pub struct StatementDeliveryUtil {
    load_usecase: LoadRecordsUsecaseImpl,
    printer: DashboardPrinter,
}

impl StatementDeliveryUtil {
    pub fn new() -> Self {
        Self::with_config(DisplayConfig::default())
    }

    pub fn with_config(config: DisplayConfig) -> Self {
        Self {
            load_usecase: LoadRecordsUsecaseImpl::new(),
            printer: DashboardPrinter::new(config),
        }
    }

    // Loading.
    // ---

    pub async fn records_from_string(
        &self,
        deliveries_csv: &str,
    ) -> Result<Vec<DeliveryRecord>, ServerError> {
        self.load_usecase.from_string(deliveries_csv).await
    }

    pub async fn records_from_file<P>(
        &self,
        deliveries_csv: P,
    ) -> Result<Vec<DeliveryRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.load_usecase.from_file(deliveries_csv).await
    }

    // Engine.
    // ---

    pub fn classify(&self, record: &DeliveryRecord) -> NormalizedStatus {
        record.classify()
    }

    /// Classifies an unparsed `(channel, raw_status)` pair. Pairs outside the
    /// channel's enumeration are an error, never a default bucket.
    pub fn classify_raw(
        &self,
        channel: DeliveryChannel,
        raw_status: &str,
    ) -> Result<NormalizedStatus, ServerError> {
        let state: DeliveryState = DeliveryStateModel::parse(channel, raw_status)?.into();
        Ok(state.classify())
    }

    pub fn project_notification(&self, record: &DeliveryRecord) -> NotificationView {
        NotificationProjector::project(record)
    }

    /// Matching notifications, most recent first.
    pub fn filter_notifications(
        &self,
        records: &[DeliveryRecord],
        criteria: &FilterCriteria,
    ) -> Vec<NotificationView> {
        let views = NotificationProjector::new(records).process();
        NotificationFilter::new(criteria).process(&views)
    }

    /// Same as [`Self::filter_notifications`], over already projected views.
    pub fn refine_notifications(
        &self,
        views: &[NotificationView],
        criteria: &FilterCriteria,
    ) -> Vec<NotificationView> {
        NotificationFilter::new(criteria).process(views)
    }

    pub fn aggregate(
        &self,
        records: &[DeliveryRecord],
        scope: Option<&FilterCriteria>,
    ) -> StatusCounts {
        let views = NotificationProjector::new(records).process();
        StatusAggregator::new(&views).count(scope)
    }

    /// Scoped counts alongside the unscoped ones.
    pub fn aggregate_with_global(
        &self,
        records: &[DeliveryRecord],
        scope: &FilterCriteria,
    ) -> ScopedStatusCounts {
        let views = NotificationProjector::new(records).process();
        StatusAggregator::new(&views).count_with_global(scope)
    }

    /// Starts a new delivery for the records matching `criteria` that `mode`
    /// covers. The returned records replace the customers' previous ones.
    pub fn initiate_deliveries(
        &self,
        records: &[DeliveryRecord],
        criteria: &FilterCriteria,
        mode: &SendMode,
        sent_at: DateTime<Utc>,
    ) -> Vec<DeliveryRecord> {
        let initiated = DeliveryInitiator::new(records, criteria, mode, sent_at).process();
        log::debug!("Initiated {} statement delivery(ies).", initiated.len());
        initiated
    }

    pub fn representatives(&self, records: &[DeliveryRecord]) -> Vec<Representative> {
        RepresentativeIndex::new(records).process()
    }

    // Presentation.
    // ---

    /// Display label for unparsed input. Undefined pairs are logged and shown
    /// with the neutral unknown label instead of failing the whole view.
    pub fn label_for_raw(&self, channel: &str, raw_status: &str) -> String {
        let parsed = channel.parse::<DeliveryChannelModel>().and_then(|c| {
            let c: DeliveryChannel = c.into();
            self.classify_raw(c, raw_status).map(|status| (c, status))
        });
        match parsed {
            Ok((c, status)) => status.display_label(c).to_string(),
            Err(e) => {
                let unknown = &self.printer.config().unknown_label;
                log::warn!(
                    "Unclassifiable delivery status ('{}', '{}'), showing '{}': {:?}",
                    channel,
                    raw_status,
                    unknown,
                    e
                );
                unknown.clone()
            }
        }
    }

    pub fn notification_rows(&self, views: &[NotificationView]) -> Vec<NotificationRow> {
        views.iter().map(|v| self.printer.print_row(v)).collect()
    }

    pub fn status_tooltip(&self, record: &DeliveryRecord) -> String {
        self.printer.print_tooltip(record)
    }

    pub fn status_summary(&self, counts: &ScopedStatusCounts) -> StatusSummary {
        self.printer.print_summary(counts)
    }

    pub fn active_filters(
        &self,
        criteria: &FilterCriteria,
        representatives: &[Representative],
    ) -> String {
        self.printer.print_active_filters(criteria, representatives)
    }

    pub fn notifications_json(&self, views: &[NotificationView]) -> Result<String, ServerError> {
        self.printer.print_json(views)
    }
}

impl Default for StatementDeliveryUtil {
    fn default() -> Self {
        Self::new()
    }
}
