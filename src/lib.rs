pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::anymailfinder::AnymailfinderClient;
pub use adapters::csv_sink::CsvSink;
pub use adapters::input::read_domain_lines;
pub use config::CliConfig;
pub use core::runner::BatchRunner;
pub use domain::model::{RawApiResult, RunSummary, SearchOutcome};
pub use utils::error::{LookupError, Result};
