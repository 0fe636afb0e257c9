use crate::entities::{CustomerType, DeliveryChannel, DeliveryState, EmailStatus};

impl DeliveryChannel {
    pub(crate) fn display_name(&self) -> &'static str {
        match self {
            DeliveryChannel::Email => "Email",
            DeliveryChannel::PhysicalMail => "Physical Mail",
        }
    }

    /// Verb for the send event in status tooltips.
    pub(crate) fn sent_label(&self) -> &'static str {
        match self {
            DeliveryChannel::Email => "Sent",
            DeliveryChannel::PhysicalMail => "Mailed",
        }
    }

    pub(crate) fn confirmed_label(&self) -> &'static str {
        match self {
            DeliveryChannel::Email => "Delivered",
            DeliveryChannel::PhysicalMail => "Forwarded",
        }
    }
}

impl DeliveryState {
    pub(crate) fn failed_label(&self) -> &'static str {
        match self {
            DeliveryState::Email(EmailStatus::Incomplete) | DeliveryState::Mail(_) => "Incomplete",
            DeliveryState::Email(_) => "Bounced",
        }
    }
}

impl CustomerType {
    pub(crate) fn display_name(&self) -> &'static str {
        match self {
            CustomerType::Independent => "Independent",
            CustomerType::BillTo => "Bill-To",
            CustomerType::Chain => "Chain",
        }
    }
}
