use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::entities::{FilterCriteria, NotificationView};

pub(crate) struct NotificationFilter<'a> {
    criteria: &'a FilterCriteria,
    needle: Option<String>,
}

impl<'a> NotificationFilter<'a> {
    pub(crate) fn new(criteria: &'a FilterCriteria) -> Self {
        Self {
            criteria,
            needle: criteria.search_text.as_ref().map(|s| s.to_lowercase()),
        }
    }

    /// Matching views, most recent first. Views without a timestamp go last;
    /// ties keep their input order.
    pub(crate) fn process(&self, views: &[NotificationView]) -> Vec<NotificationView> {
        let mut matching: Vec<NotificationView> = views
            .iter()
            .filter(|view| self.matches(view))
            .cloned()
            .collect();
        matching.sort_by(|a, b| most_recent_first(a.display_timestamp, b.display_timestamp));
        matching
    }

    pub(crate) fn matches(&self, view: &NotificationView) -> bool {
        self.matches_search(view)
            && self
                .criteria
                .status
                .map_or(true, |status| view.normalized_status == status)
            && self
                .criteria
                .representative_id
                .as_ref()
                .map_or(true, |id| view.representative.id == *id)
            && self
                .criteria
                .channel
                .map_or(true, |channel| view.channel == channel)
            && self
                .criteria
                .customer_type
                .map_or(true, |customer_type| view.customer_type == customer_type)
    }

    fn matches_search(&self, view: &NotificationView) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        [
            &view.customer_name,
            &view.customer_number,
            &view.email,
            &view.representative.name,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle.as_str()))
    }
}

fn most_recent_first(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
