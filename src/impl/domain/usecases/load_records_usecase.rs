use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::delivery_records_repository_impl::DeliveryRecordsRepositoryImpl,
    domain::{
        logic::record_integrity::IntegrityProcessor,
        repositories::delivery_records_repository::DeliveryRecordsRepository,
    },
    entities::DeliveryRecord,
};

#[async_trait]
pub trait LoadRecordsUsecase: Send + Sync {
    async fn from_string(&self, deliveries_csv: &str) -> Result<Vec<DeliveryRecord>, ServerError>;

    async fn from_file<P>(&self, deliveries_csv: P) -> Result<Vec<DeliveryRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct LoadRecordsUsecaseImpl<
    R1 = DeliveryRecordsRepositoryImpl, // Default.
> where
    R1: DeliveryRecordsRepository,
{
    records_repository: R1,
}

#[async_trait]
impl<R1> LoadRecordsUsecase for LoadRecordsUsecaseImpl<R1>
where
    R1: DeliveryRecordsRepository,
{
    async fn from_string(&self, deliveries_csv: &str) -> Result<Vec<DeliveryRecord>, ServerError> {
        let specs = self.records_repository.from_string(deliveries_csv)?;
        log::debug!("Parsed {} delivery record(s) from string.", specs.len());
        IntegrityProcessor::new(specs).process()
    }

    async fn from_file<P>(&self, deliveries_csv: P) -> Result<Vec<DeliveryRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let path = deliveries_csv.as_ref().display().to_string();
        let specs = self.records_repository.from_file(deliveries_csv).await?;
        log::debug!("Parsed {} delivery record(s) from '{}'.", specs.len(), path);
        IntegrityProcessor::new(specs).process()
    }
}

impl LoadRecordsUsecaseImpl {
    pub(crate) fn new() -> Self {
        LoadRecordsUsecaseImpl {
            records_repository: DeliveryRecordsRepositoryImpl::new(),
        }
    }
}
