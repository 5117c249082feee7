use crate::domain::model::{RawApiResult, SearchOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote decision-maker search. One call, one attempt, no retries; every
/// failure mode comes back as a `RawApiResult` variant rather than an error.
#[async_trait]
pub trait DecisionMakerApi: Send + Sync {
    async fn lookup(&self, domain: &str) -> RawApiResult;
}

/// Row-by-row destination for outcomes. Rows land in call order.
pub trait OutcomeSink: Send {
    fn write(&mut self, outcome: &SearchOutcome) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn category(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}
