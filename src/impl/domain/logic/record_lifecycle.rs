use chrono::{DateTime, Utc};
use fractic_server_error::ServerError;

use crate::{
    entities::{
        Customer, DeliveryChannel, DeliveryOutcome, DeliveryRecord, DeliveryState, EmailStatus,
        MailStatus, TerminalEvent,
    },
    errors::InvalidDeliveryTransition,
};

impl DeliveryRecord {
    /// A new delivery attempt, sent or printed at `sent_at` and pending until
    /// its terminal event.
    pub fn initiate(
        customer: Customer,
        channel: DeliveryChannel,
        sent_at: DateTime<Utc>,
    ) -> DeliveryRecord {
        DeliveryRecord {
            customer,
            state: DeliveryState::processing(channel),
            sent_at: Some(sent_at),
            outcome: DeliveryOutcome::Awaiting,
        }
    }

    /// Returns the record after its terminal event. Only a pending record
    /// can move, and only once; the receiver is left untouched.
    pub fn apply(&self, event: TerminalEvent) -> Result<DeliveryRecord, ServerError> {
        let event_name = event.name();
        let invalid = || {
            InvalidDeliveryTransition::new(
                event_name,
                self.customer.id.as_str(),
                self.state.raw_name(),
            )
        };
        if !self.state.is_pending() || self.outcome != DeliveryOutcome::Awaiting {
            return Err(invalid());
        }
        let (state, outcome) = match (self.state, event) {
            (DeliveryState::Email(_), TerminalEvent::Sent { at }) => (
                DeliveryState::Email(EmailStatus::Sent),
                DeliveryOutcome::Confirmed { at },
            ),
            (DeliveryState::Email(_), TerminalEvent::Bounced { at, reason }) => (
                DeliveryState::Email(EmailStatus::Bounced),
                DeliveryOutcome::Failed { at, reason },
            ),
            (DeliveryState::Email(_), TerminalEvent::Incomplete { at, reason }) => (
                DeliveryState::Email(EmailStatus::Incomplete),
                DeliveryOutcome::Failed { at, reason },
            ),
            (DeliveryState::Mail(_), TerminalEvent::Forwarded { at }) => (
                DeliveryState::Mail(MailStatus::Forwarded),
                DeliveryOutcome::Confirmed { at },
            ),
            (DeliveryState::Mail(_), TerminalEvent::ManualMailingRequired) => (
                DeliveryState::Mail(MailStatus::ManualMailingRequired),
                DeliveryOutcome::Awaiting,
            ),
            _ => return Err(invalid()),
        };
        Ok(DeliveryRecord {
            customer: self.customer.clone(),
            state,
            sent_at: self.sent_at,
            outcome,
        })
    }
}
