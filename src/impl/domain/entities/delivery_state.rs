#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize)]
pub enum DeliveryChannel {
    Email,
    PhysicalMail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailStatus {
    Processing,
    Sent,
    Bounced,
    Incomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MailStatus {
    Processing,
    Forwarded,
    ManualMailingRequired,
}

/// Raw delivery status, tagged by the channel it belongs to. Only the
/// combinations that exist are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryState {
    Email(EmailStatus),
    Mail(MailStatus),
}

/// Channel-independent projection of a [`DeliveryState`], used for display
/// buckets and aggregate counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize)]
pub enum NormalizedStatus {
    Delivered,
    Failed,
    Pending,
    ManualMailingRequired,
}

// --

impl DeliveryChannel {
    /// Name used in input files and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            DeliveryChannel::Email => "email",
            DeliveryChannel::PhysicalMail => "mail",
        }
    }
}

impl DeliveryState {
    /// Initial state of a freshly initiated send or print.
    pub fn processing(channel: DeliveryChannel) -> Self {
        match channel {
            DeliveryChannel::Email => DeliveryState::Email(EmailStatus::Processing),
            DeliveryChannel::PhysicalMail => DeliveryState::Mail(MailStatus::Processing),
        }
    }

    pub fn channel(&self) -> DeliveryChannel {
        match self {
            DeliveryState::Email(_) => DeliveryChannel::Email,
            DeliveryState::Mail(_) => DeliveryChannel::PhysicalMail,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            DeliveryState::Email(EmailStatus::Processing)
                | DeliveryState::Mail(MailStatus::Processing)
        )
    }

    /// Raw status name, as it appears in input files.
    pub fn raw_name(&self) -> &'static str {
        match self {
            DeliveryState::Email(EmailStatus::Processing)
            | DeliveryState::Mail(MailStatus::Processing) => "processing",
            DeliveryState::Email(EmailStatus::Sent) => "sent",
            DeliveryState::Email(EmailStatus::Bounced) => "bounced",
            DeliveryState::Email(EmailStatus::Incomplete) => "incomplete",
            DeliveryState::Mail(MailStatus::Forwarded) => "forwarded",
            DeliveryState::Mail(MailStatus::ManualMailingRequired) => "manual mailing required",
        }
    }
}
