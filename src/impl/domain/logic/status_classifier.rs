use crate::entities::{
    DeliveryRecord, DeliveryState, EmailStatus, MailStatus, NormalizedStatus,
};

impl DeliveryState {
    /// Total over every representable state, so there is no fallback bucket.
    pub fn classify(&self) -> NormalizedStatus {
        match self {
            DeliveryState::Email(EmailStatus::Processing)
            | DeliveryState::Mail(MailStatus::Processing) => NormalizedStatus::Pending,
            DeliveryState::Email(EmailStatus::Sent)
            | DeliveryState::Mail(MailStatus::Forwarded) => NormalizedStatus::Delivered,
            DeliveryState::Email(EmailStatus::Bounced)
            | DeliveryState::Email(EmailStatus::Incomplete) => NormalizedStatus::Failed,
            // Outstanding manual action, not a success.
            DeliveryState::Mail(MailStatus::ManualMailingRequired) => {
                NormalizedStatus::ManualMailingRequired
            }
        }
    }
}

impl DeliveryRecord {
    pub fn classify(&self) -> NormalizedStatus {
        self.state.classify()
    }
}
