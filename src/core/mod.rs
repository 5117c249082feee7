pub mod classify;
pub mod normalize;
pub mod runner;

pub use crate::domain::model::{RawApiResult, RunSummary, SearchOutcome};
pub use crate::domain::ports::{ConfigProvider, DecisionMakerApi, OutcomeSink};
pub use crate::utils::error::Result;
