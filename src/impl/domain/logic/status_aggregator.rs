use crate::entities::{
    FilterCriteria, NormalizedStatus, NotificationView, ScopedStatusCounts, StatusCounts,
};

use super::notification_filter::NotificationFilter;

pub(crate) struct StatusAggregator<'a> {
    views: &'a [NotificationView],
}

impl<'a> StatusAggregator<'a> {
    pub(crate) fn new(views: &'a [NotificationView]) -> Self {
        Self { views }
    }

    /// Pending and manual-mailing records count towards the total only.
    pub(crate) fn count(&self, scope: Option<&FilterCriteria>) -> StatusCounts {
        let filter = scope.map(NotificationFilter::new);
        self.views
            .iter()
            .filter(|view| filter.as_ref().map_or(true, |f| f.matches(view)))
            .fold(StatusCounts::default(), |mut counts, view| {
                counts.total += 1;
                match view.normalized_status {
                    NormalizedStatus::Delivered => counts.delivered_or_forwarded += 1,
                    NormalizedStatus::Failed => counts.bounced_or_incomplete += 1,
                    NormalizedStatus::Pending | NormalizedStatus::ManualMailingRequired => {}
                }
                counts
            })
    }

    pub(crate) fn count_with_global(&self, scope: &FilterCriteria) -> ScopedStatusCounts {
        ScopedStatusCounts {
            scoped: self.count(Some(scope)),
            global: self.count(None),
            is_scoped: !scope.is_empty(),
        }
    }
}
