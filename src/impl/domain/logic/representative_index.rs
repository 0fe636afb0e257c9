use std::collections::HashSet;

use crate::entities::{DeliveryRecord, Representative};

pub(crate) struct RepresentativeIndex<'a> {
    records: &'a [DeliveryRecord],
}

impl<'a> RepresentativeIndex<'a> {
    pub(crate) fn new(records: &'a [DeliveryRecord]) -> Self {
        Self { records }
    }

    /// Unique representatives, sorted by name.
    pub(crate) fn process(self) -> Vec<Representative> {
        let mut seen = HashSet::new();
        let mut representatives: Vec<Representative> = self
            .records
            .iter()
            .map(|r| &r.customer.representative)
            .filter(|rep| seen.insert(rep.id.clone()))
            .cloned()
            .collect();
        representatives.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        representatives
    }
}
