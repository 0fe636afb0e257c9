use chrono::{DateTime, Utc};
use iso_currency::Currency;

use crate::entities::{
    customer_id, representative, Customer, CustomerType, DeliveryOutcome, DeliveryRecord,
    DeliveryState, EmailStatus, MailStatus,
};

pub(crate) fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("fixture timestamp should be valid")
        .with_timezone(&Utc)
}

pub(crate) fn customer(id: &str, name: &str, rep: (&str, &str)) -> Customer {
    Customer {
        id: customer_id(id),
        name: name.to_string(),
        customer_number: format!("09010080{:0>2}", id),
        email: format!("ap{}@example.com", id),
        representative: representative(rep.0, rep.1),
        customer_type: CustomerType::Independent,
        balance: 100.0,
        currency: Currency::USD,
    }
}

pub(crate) fn record(
    id: &str,
    state: DeliveryState,
    sent_at: Option<&str>,
    outcome: DeliveryOutcome,
) -> DeliveryRecord {
    DeliveryRecord {
        customer: customer(id, &format!("CUSTOMER {}", id), ("rep1", "Sarah Johnson")),
        state,
        sent_at: sent_at.map(ts),
        outcome,
    }
}

pub(crate) fn confirmed(at: &str) -> DeliveryOutcome {
    DeliveryOutcome::Confirmed { at: ts(at) }
}

pub(crate) fn failed(at: &str, reason: &str) -> DeliveryOutcome {
    DeliveryOutcome::Failed {
        at: ts(at),
        reason: reason.to_string(),
    }
}

/// A small dashboard: three representatives, both channels, every status.
pub(crate) fn dashboard_records() -> Vec<DeliveryRecord> {
    let sarah = ("rep1", "Sarah Johnson");
    let mike = ("rep2", "Mike Chen");
    let lisa = ("rep3", "Lisa Rodriguez");
    let entry = |id: &str,
                 name: &str,
                 rep: (&str, &str),
                 state: DeliveryState,
                 sent_at: Option<&str>,
                 outcome: DeliveryOutcome| DeliveryRecord {
        customer: customer(id, name, rep),
        state,
        sent_at: sent_at.map(ts),
        outcome,
    };
    vec![
        entry(
            "1",
            "ROUTE 2 MINI MART - GUYANDOTTE",
            sarah,
            DeliveryState::Email(EmailStatus::Sent),
            Some("2024-01-15T10:30:00Z"),
            confirmed("2024-01-15T10:32:15Z"),
        ),
        entry(
            "2",
            "BLISSFIELD PARTY MART",
            mike,
            DeliveryState::Mail(MailStatus::ManualMailingRequired),
            Some("2024-01-15T10:30:00Z"),
            DeliveryOutcome::Awaiting,
        ),
        entry(
            "3",
            "ERIE FOODS",
            sarah,
            DeliveryState::Email(EmailStatus::Processing),
            Some("2024-01-15T10:30:00Z"),
            DeliveryOutcome::Awaiting,
        ),
        entry(
            "4",
            "SAUTTER'S FOODS - WATERVILLE",
            lisa,
            DeliveryState::Mail(MailStatus::Forwarded),
            Some("2024-01-15T10:30:00Z"),
            confirmed("2024-01-16T08:00:00Z"),
        ),
        entry(
            "5",
            "IN & OUT #54 BERDAN",
            mike,
            DeliveryState::Email(EmailStatus::Bounced),
            Some("2024-01-14T09:15:00Z"),
            failed("2024-01-14T09:17:22Z", "Mailbox full"),
        ),
        entry(
            "6",
            "WARRIOR SOCCER CLUB",
            mike,
            DeliveryState::Email(EmailStatus::Incomplete),
            None,
            failed("2024-01-13T12:00:00Z", "Invalid address"),
        ),
        entry(
            "7",
            "RIVERSIDE CARRY OUT",
            lisa,
            DeliveryState::Mail(MailStatus::Processing),
            None,
            DeliveryOutcome::Awaiting,
        ),
    ]
}
