use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::DeliveryRecordSpec;

#[async_trait]
pub trait DeliveryRecordsRepository: Send + Sync {
    fn from_string(&self, deliveries_csv: &str) -> Result<Vec<DeliveryRecordSpec>, ServerError>;

    async fn from_file<P>(&self, deliveries_csv: P) -> Result<Vec<DeliveryRecordSpec>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
