use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::deliveries_csv_datasource::{
        DeliveriesCsvDatasource, DeliveriesCsvDatasourceImpl,
    },
    domain::repositories::delivery_records_repository::DeliveryRecordsRepository,
    entities::DeliveryRecordSpec,
};

pub(crate) struct DeliveryRecordsRepositoryImpl<DS = DeliveriesCsvDatasourceImpl>
where
    DS: DeliveriesCsvDatasource,
{
    deliveries_datasource: DS,
}

#[async_trait]
impl<DS> DeliveryRecordsRepository for DeliveryRecordsRepositoryImpl<DS>
where
    DS: DeliveriesCsvDatasource,
{
    fn from_string(&self, deliveries_csv: &str) -> Result<Vec<DeliveryRecordSpec>, ServerError> {
        self.deliveries_datasource.from_string(deliveries_csv)
    }

    async fn from_file<P>(&self, deliveries_csv: P) -> Result<Vec<DeliveryRecordSpec>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.deliveries_datasource.from_file(deliveries_csv).await
    }
}

impl DeliveryRecordsRepositoryImpl<DeliveriesCsvDatasourceImpl> {
    pub(crate) fn new() -> Self {
        DeliveryRecordsRepositoryImpl {
            deliveries_datasource: DeliveriesCsvDatasourceImpl::new(),
        }
    }
}
