use std::collections::HashSet;

use fractic_server_error::ServerError;

use crate::{
    entities::{DeliveryOutcome, DeliveryRecord, DeliveryRecordSpec, NormalizedStatus},
    errors::{
        ConflictingDeliveryOutcome, DuplicateCustomerRecord, InconsistentDeliveryStatus,
        MissingFailureReason, UnexpectedFailureReason,
    },
};

impl DeliveryRecord {
    /// Checks the timestamp invariants of a raw record: a delivery is
    /// pending, confirmed or failed, never both, and a failure reason exists
    /// exactly when a failure was recorded. The outcome must also agree with
    /// the raw status: only Sent/Forwarded can be confirmed and only
    /// Bounced/Incomplete can fail.
    pub fn from_spec(spec: DeliveryRecordSpec) -> Result<Self, ServerError> {
        let DeliveryRecordSpec {
            customer,
            state,
            sent_at,
            confirmed_at,
            failed_at,
            failure_reason,
        } = spec;
        let outcome = match (confirmed_at, failed_at, failure_reason) {
            (Some(_), Some(_), _) => {
                return Err(ConflictingDeliveryOutcome::new(customer.id.as_str()))
            }
            (Some(at), None, None) => DeliveryOutcome::Confirmed { at },
            (None, Some(at), Some(reason)) => DeliveryOutcome::Failed { at, reason },
            (None, Some(_), None) => return Err(MissingFailureReason::new(customer.id.as_str())),
            (_, None, Some(_)) => return Err(UnexpectedFailureReason::new(customer.id.as_str())),
            (None, None, None) => DeliveryOutcome::Awaiting,
        };
        let consistent = match (&outcome, state.classify()) {
            (DeliveryOutcome::Confirmed { .. }, status) => status == NormalizedStatus::Delivered,
            (DeliveryOutcome::Failed { .. }, status) => status == NormalizedStatus::Failed,
            // Terminal statuses may arrive before their event time is known.
            (DeliveryOutcome::Awaiting, _) => true,
        };
        if !consistent {
            return Err(InconsistentDeliveryStatus::new(
                customer.id.as_str(),
                state.raw_name(),
                outcome.name(),
            ));
        }
        Ok(DeliveryRecord {
            customer,
            state,
            sent_at,
            outcome,
        })
    }
}

pub(crate) struct IntegrityProcessor {
    specs: Vec<DeliveryRecordSpec>,
}

impl IntegrityProcessor {
    pub(crate) fn new(specs: Vec<DeliveryRecordSpec>) -> Self {
        Self { specs }
    }

    pub(crate) fn process(self) -> Result<Vec<DeliveryRecord>, ServerError> {
        let mut seen = HashSet::new();
        self.specs
            .into_iter()
            .map(|spec| {
                if !seen.insert(spec.customer.id.clone()) {
                    return Err(DuplicateCustomerRecord::new(spec.customer.id.as_str()));
                }
                DeliveryRecord::from_spec(spec)
            })
            .collect()
    }
}
