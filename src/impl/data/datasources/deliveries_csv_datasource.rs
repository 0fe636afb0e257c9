use std::str::FromStr as _;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::models::{
        balance_model::BalanceModel,
        currency_model::CurrencyModel,
        customer_type_model::CustomerTypeModel,
        delivery_state_model::{DeliveryChannelModel, DeliveryStateModel},
        timestamp_model::TimestampModel,
    },
    entities::{customer_id, representative, Customer, DeliveryChannel, DeliveryRecordSpec},
    errors::{InvalidCsv, ReadError},
};

#[async_trait]
pub(crate) trait DeliveriesCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<DeliveryRecordSpec>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<DeliveryRecordSpec>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct DeliveriesCsvDatasourceImpl;

impl DeliveriesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

/// Empty cells are absent values.
fn optional(r: &csv::StringRecord, i: usize) -> Option<&str> {
    match r.get(i).map(str::trim) {
        Some(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

#[async_trait]
impl DeliveriesCsvDatasource for DeliveriesCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<DeliveryRecordSpec>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_customer_id = r.get(0).unwrap_or("").trim();
                    let raw_name = r.get(1).unwrap_or("").trim();
                    let raw_customer_number = r.get(2).unwrap_or("").trim();
                    let raw_email = r.get(3).unwrap_or("").trim();
                    let raw_rep_id = r.get(4).unwrap_or("").trim();
                    let raw_rep_name = r.get(5).unwrap_or("").trim();
                    let raw_customer_type = r.get(6).unwrap_or("");
                    let raw_balance = optional(&r, 7).unwrap_or("0");
                    let raw_currency = optional(&r, 8).unwrap_or("USD");
                    let raw_channel = r.get(9).unwrap_or("");
                    let raw_status = r.get(10).unwrap_or("");
                    let raw_sent_at = optional(&r, 11);
                    let raw_confirmed_at = optional(&r, 12);
                    let raw_failed_at = optional(&r, 13);
                    let raw_failure_reason = optional(&r, 14);

                    // Parse.
                    let customer_type = CustomerTypeModel::from_str(raw_customer_type)?;
                    let balance = BalanceModel::from_str(raw_balance)?;
                    let currency = CurrencyModel::from_str(raw_currency)?;
                    let channel: DeliveryChannel =
                        DeliveryChannelModel::from_str(raw_channel)?.into();
                    let state = DeliveryStateModel::parse(channel, raw_status)?;
                    let sent_at: Option<TimestampModel> =
                        raw_sent_at.map(TimestampModel::from_str).transpose()?;
                    let confirmed_at: Option<TimestampModel> =
                        raw_confirmed_at.map(TimestampModel::from_str).transpose()?;
                    let failed_at: Option<TimestampModel> =
                        raw_failed_at.map(TimestampModel::from_str).transpose()?;

                    // Build.
                    Ok(DeliveryRecordSpec {
                        customer: Customer {
                            id: customer_id(raw_customer_id),
                            name: raw_name.into(),
                            customer_number: raw_customer_number.into(),
                            email: raw_email.into(),
                            representative: representative(raw_rep_id, raw_rep_name),
                            customer_type: customer_type.into(),
                            balance: balance.into(),
                            currency: currency.into(),
                        },
                        state: state.into(),
                        sent_at: sent_at.map(Into::into),
                        confirmed_at: confirmed_at.map(Into::into),
                        failed_at: failed_at.map(Into::into),
                        failure_reason: raw_failure_reason.map(Into::into),
                    })
                })
            })
            .collect()
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<DeliveryRecordSpec>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CustomerType, DeliveryState, EmailStatus, MailStatus};

    const HEADER: &str = "customer_id,name,customer_number,email,rep_id,representative,customer_type,balance,currency,channel,status,sent_at,confirmed_at,failed_at,failure_reason\n";

    #[test]
    fn reads_every_column() {
        let csv = format!(
            "{}{}{}",
            HEADER,
            "1,ROUTE 2 MINI MART,0901008013,manager@route2mini.com,rep1,Sarah Johnson,Independent,525.42,USD,email,sent,2024-01-15T10:30:00Z,2024-01-15T10:32:15Z,,\n",
            "2,BLISSFIELD PARTY MART,0901000074,orders@blissfieldparty.com,rep2,Mike Chen,Bill-To,\"1,159.00\",,mail,manual mailing required,2024-01-15T10:30:00Z,,,\n",
        );
        let specs = DeliveriesCsvDatasourceImpl::new().from_string(&csv).unwrap();
        assert_eq!(specs.len(), 2);

        let first = &specs[0];
        assert_eq!(first.customer.id.as_str(), "1");
        assert_eq!(first.customer.representative.name, "Sarah Johnson");
        assert_eq!(first.state, DeliveryState::Email(EmailStatus::Sent));
        assert!(first.confirmed_at.is_some());
        assert!(first.failed_at.is_none());
        assert!(first.failure_reason.is_none());

        let second = &specs[1];
        assert_eq!(second.customer.customer_type, CustomerType::BillTo);
        assert_eq!(second.customer.balance, 1159.0);
        assert_eq!(second.customer.currency, iso_currency::Currency::USD);
        assert_eq!(
            second.state,
            DeliveryState::Mail(MailStatus::ManualMailingRequired)
        );
        assert!(second.confirmed_at.is_none());
    }

    #[test]
    fn undefined_status_for_channel_fails_the_load() {
        let csv = format!(
            "{}{}",
            HEADER,
            "1,ERIE FOODS,0902000013,accounting@eriefoods.com,rep1,Sarah Johnson,Bill-To,248.35,USD,email,forwarded,2024-01-15T10:30:00Z,,,\n",
        );
        assert!(DeliveriesCsvDatasourceImpl::new().from_string(&csv).is_err());
    }

    #[test]
    fn malformed_timestamp_fails_the_load() {
        let csv = format!(
            "{}{}",
            HEADER,
            "1,ERIE FOODS,0902000013,accounting@eriefoods.com,rep1,Sarah Johnson,Bill-To,248.35,USD,email,processing,last tuesday,,,\n",
        );
        assert!(DeliveriesCsvDatasourceImpl::new().from_string(&csv).is_err());
    }
}
