use crate::domain::model::{DaySlot, FetchBatch, RawResponse, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Human-readable location of `path`, used in logs and the run report.
    fn location(&self, path: &str) -> String;
}

/// Source of one day of raw observations.
#[async_trait]
pub trait DayFetcher: Send + Sync {
    async fn fetch_day(&self, station: &str, slot: &DaySlot) -> Result<RawResponse>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<FetchBatch>;
    async fn transform(&self, batch: FetchBatch) -> Result<TransformResult>;
    async fn load(&self, result: &TransformResult) -> Result<String>;
}
