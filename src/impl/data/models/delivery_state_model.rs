use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{
    entities::{DeliveryChannel, DeliveryState, EmailStatus, MailStatus},
    errors::{UndefinedDeliveryStatus, UnknownDeliveryChannel},
};

/// Lowercase, with '_' and '-' read as spaces and runs of spaces collapsed.
fn normalize(s: &str) -> String {
    s.to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug)]
pub(crate) struct DeliveryChannelModel(DeliveryChannel);
impl FromStr for DeliveryChannelModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "email" => Ok(DeliveryChannelModel(DeliveryChannel::Email)),
            "mail" | "physical mail" => Ok(DeliveryChannelModel(DeliveryChannel::PhysicalMail)),
            _ => Err(UnknownDeliveryChannel::new(s)),
        }
    }
}

impl Into<DeliveryChannel> for DeliveryChannelModel {
    fn into(self) -> DeliveryChannel {
        self.0
    }
}

/// A raw status is only meaningful together with its channel; pairs outside
/// the channel's enumeration are rejected rather than defaulted.
#[derive(Debug)]
pub(crate) struct DeliveryStateModel(DeliveryState);
impl DeliveryStateModel {
    pub(crate) fn parse(channel: DeliveryChannel, raw_status: &str) -> Result<Self, ServerError> {
        let state = match (channel, normalize(raw_status).as_str()) {
            (DeliveryChannel::Email, "processing") => DeliveryState::Email(EmailStatus::Processing),
            (DeliveryChannel::Email, "sent") => DeliveryState::Email(EmailStatus::Sent),
            (DeliveryChannel::Email, "bounced") => DeliveryState::Email(EmailStatus::Bounced),
            (DeliveryChannel::Email, "incomplete") => DeliveryState::Email(EmailStatus::Incomplete),
            (DeliveryChannel::PhysicalMail, "processing") => {
                DeliveryState::Mail(MailStatus::Processing)
            }
            (DeliveryChannel::PhysicalMail, "forwarded") => DeliveryState::Mail(MailStatus::Forwarded),
            (DeliveryChannel::PhysicalMail, "manual mailing required") => {
                DeliveryState::Mail(MailStatus::ManualMailingRequired)
            }
            _ => return Err(UndefinedDeliveryStatus::new(raw_status, channel.name())),
        };
        Ok(DeliveryStateModel(state))
    }
}

impl Into<DeliveryState> for DeliveryStateModel {
    fn into(self) -> DeliveryState {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(channel: DeliveryChannel, raw: &str) -> Result<DeliveryState, ServerError> {
        DeliveryStateModel::parse(channel, raw).map(Into::into)
    }

    #[test]
    fn channel_names() {
        let c: DeliveryChannel = DeliveryChannelModel::from_str("Email").unwrap().into();
        assert_eq!(c, DeliveryChannel::Email);
        let c: DeliveryChannel = DeliveryChannelModel::from_str("mail").unwrap().into();
        assert_eq!(c, DeliveryChannel::PhysicalMail);
        assert!(DeliveryChannelModel::from_str("fax").is_err());
    }

    #[test]
    fn statuses_are_parsed_per_channel() {
        assert_eq!(
            parse(DeliveryChannel::Email, "Sent").unwrap(),
            DeliveryState::Email(EmailStatus::Sent)
        );
        assert_eq!(
            parse(DeliveryChannel::PhysicalMail, "manual_mailing_required").unwrap(),
            DeliveryState::Mail(MailStatus::ManualMailingRequired)
        );
        assert_eq!(
            parse(DeliveryChannel::PhysicalMail, "Manual Mailing Required").unwrap(),
            DeliveryState::Mail(MailStatus::ManualMailingRequired)
        );
    }

    #[test]
    fn undefined_pairs_are_rejected() {
        assert!(parse(DeliveryChannel::Email, "forwarded").is_err());
        assert!(parse(DeliveryChannel::Email, "manual mailing required").is_err());
        assert!(parse(DeliveryChannel::PhysicalMail, "sent").is_err());
        assert!(parse(DeliveryChannel::PhysicalMail, "bounced").is_err());
        assert!(parse(DeliveryChannel::Email, "").is_err());
    }
}
