use fractic_server_error::ServerError;

use crate::{
    config::DisplayConfig,
    entities::{
        DeliveryOutcome, DeliveryRecord, FilterCriteria, NotificationRow, NotificationView,
        Representative, ScopedStatusCounts, StatusSummary,
    },
    errors::JsonExportFailed,
};

use super::utils::{format_amount, format_count, format_timestamp};

pub(crate) struct DashboardPrinter {
    config: DisplayConfig,
}

impl DashboardPrinter {
    pub(crate) fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    pub(crate) fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub(crate) fn print_row(&self, view: &NotificationView) -> NotificationRow {
        NotificationRow {
            customer_name: view.customer_name.clone(),
            customer_number: view.customer_number.clone(),
            email: view.email.clone(),
            representative: view.representative.name.clone(),
            channel: view.channel.display_name().to_string(),
            status: view.display_label.to_string(),
            timestamp: format_timestamp(view.display_timestamp, &self.config),
            balance: format_amount(view.balance, view.currency),
            reason: view.reason.clone(),
        }
    }

    /// Event history of a single record, one event per line, wrapped to the
    /// configured width.
    pub(crate) fn print_tooltip(&self, record: &DeliveryRecord) -> String {
        let channel = record.channel();
        let mut lines = Vec::new();
        if let Some(sent_at) = record.sent_at {
            lines.push(format!(
                "{}: {}",
                channel.sent_label(),
                format_timestamp(Some(sent_at), &self.config)
            ));
        }
        match &record.outcome {
            DeliveryOutcome::Confirmed { at } => lines.push(format!(
                "{}: {}",
                channel.confirmed_label(),
                format_timestamp(Some(*at), &self.config)
            )),
            DeliveryOutcome::Failed { at, reason } => {
                lines.push(format!(
                    "{}: {}",
                    record.state.failed_label(),
                    format_timestamp(Some(*at), &self.config)
                ));
                lines.push(format!("Reason: {}", reason));
            }
            DeliveryOutcome::Awaiting => {}
        }
        if lines.is_empty() {
            return self.config.empty_tooltip.clone();
        }
        lines
            .iter()
            .flat_map(|line| textwrap::wrap(line, self.config.tooltip_width.max(1)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn print_summary(&self, counts: &ScopedStatusCounts) -> StatusSummary {
        let cell = |scoped: usize, global: usize| {
            if counts.is_scoped {
                format!("{} ({})", format_count(scoped), format_count(global))
            } else {
                format_count(scoped)
            }
        };
        StatusSummary {
            total: cell(counts.scoped.total, counts.global.total),
            delivered_or_forwarded: cell(
                counts.scoped.delivered_or_forwarded,
                counts.global.delivered_or_forwarded,
            ),
            bounced_or_incomplete: cell(
                counts.scoped.bounced_or_incomplete,
                counts.global.bounced_or_incomplete,
            ),
        }
    }

    /// E.g. " • Filtered by Email, Rep: Mike Chen, Type: Bill-To", or empty
    /// when no channel, representative or customer type filter is active.
    pub(crate) fn print_active_filters(
        &self,
        criteria: &FilterCriteria,
        representatives: &[Representative],
    ) -> String {
        let mut filters = Vec::new();
        if let Some(channel) = criteria.channel {
            filters.push(channel.display_name().to_string());
        }
        if let Some(id) = &criteria.representative_id {
            let name = representatives
                .iter()
                .find(|rep| rep.id == *id)
                .map_or(id.as_str(), |rep| rep.name.as_str());
            filters.push(format!("Rep: {}", name));
        }
        if let Some(customer_type) = criteria.customer_type {
            filters.push(format!("Type: {}", customer_type.display_name()));
        }
        if filters.is_empty() {
            String::new()
        } else {
            format!(" • Filtered by {}", filters.join(", "))
        }
    }

    pub(crate) fn print_json(&self, views: &[NotificationView]) -> Result<String, ServerError> {
        serde_json::to_string_pretty(views)
            .map_err(|e| JsonExportFailed::with_debug("notification views", &e))
    }
}
