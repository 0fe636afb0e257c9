use chrono::{DateTime, Utc};

use super::{
    customer::{Customer, CustomerId},
    delivery_state::{DeliveryChannel, DeliveryState},
};

// Before integrity checks.
// ---

/// A delivery record as supplied by the customer-data collaborator, with its
/// event timestamps still unchecked.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRecordSpec {
    pub customer: Customer,
    pub state: DeliveryState,
    pub sent_at: Option<DateTime<Utc>>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub failed_at: Option<DateTime<Utc>>,
    pub failure_reason: Option<String>,
}

// After integrity checks.
// ---

#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    Awaiting,
    Confirmed { at: DateTime<Utc> },
    Failed { at: DateTime<Utc>, reason: String },
}

/// One customer's most recent statement delivery attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRecord {
    pub customer: Customer,
    pub state: DeliveryState,
    pub sent_at: Option<DateTime<Utc>>,
    pub outcome: DeliveryOutcome,
}

/// Terminal event moving a pending record to its final state.
#[derive(Debug, Clone, PartialEq)]
pub enum TerminalEvent {
    // Email.
    Sent { at: DateTime<Utc> },
    Bounced { at: DateTime<Utc>, reason: String },
    Incomplete { at: DateTime<Utc>, reason: String },

    // Physical mail.
    Forwarded { at: DateTime<Utc> },
    ManualMailingRequired,
}

/// Which of the currently filtered customers a send covers.
#[derive(Debug, Clone, PartialEq)]
pub enum SendMode {
    All,
    Selected(Vec<CustomerId>),
}

// --

impl DeliveryRecord {
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer.id
    }

    pub fn channel(&self) -> DeliveryChannel {
        self.state.channel()
    }

    pub fn confirmed_at(&self) -> Option<DateTime<Utc>> {
        match &self.outcome {
            DeliveryOutcome::Confirmed { at } => Some(*at),
            _ => None,
        }
    }

    pub fn failed_at(&self) -> Option<DateTime<Utc>> {
        match &self.outcome {
            DeliveryOutcome::Failed { at, .. } => Some(*at),
            _ => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match &self.outcome {
            DeliveryOutcome::Failed { reason, .. } => Some(reason.as_str()),
            _ => None,
        }
    }
}

impl DeliveryOutcome {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            DeliveryOutcome::Awaiting => "awaiting",
            DeliveryOutcome::Confirmed { .. } => "confirmed",
            DeliveryOutcome::Failed { .. } => "failed",
        }
    }
}

impl TerminalEvent {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            TerminalEvent::Sent { .. } => "sent",
            TerminalEvent::Bounced { .. } => "bounced",
            TerminalEvent::Incomplete { .. } => "incomplete",
            TerminalEvent::Forwarded { .. } => "forwarded",
            TerminalEvent::ManualMailingRequired => "manual mailing required",
        }
    }
}
