use crate::domain::model::SearchOutcome;
use crate::domain::ports::OutcomeSink;
use crate::utils::error::Result;
use std::fs::File;
use std::path::Path;

pub const CSV_HEADER: [&str; 10] = [
    "Domain Searched",
    "Category Searched",
    "Found Name",
    "Found Email",
    "Email Verified",
    "Job Title",
    "LinkedIn URL",
    "Search Success",
    "API Error Type",
    "API Error Explanation",
];

/// CSV destination for outcome rows. The header goes out at creation so the
/// file is well-formed even for an empty batch; each row is flushed as it is
/// written, so a killed run keeps everything processed so far.
pub struct CsvSink {
    writer: csv::Writer<File>,
}

impl CsvSink {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path)?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(CSV_HEADER)?;
        writer.flush()?;
        Ok(Self { writer })
    }
}

impl OutcomeSink for CsvSink {
    fn write(&mut self, outcome: &SearchOutcome) -> Result<()> {
        let verified = outcome.email_verified.map(|v| v.to_string());
        self.writer.write_record([
            outcome.domain.as_str(),
            outcome.category.as_str(),
            outcome.found_name.as_deref().unwrap_or(""),
            outcome.found_email.as_deref().unwrap_or(""),
            verified.as_deref().unwrap_or(""),
            outcome.job_title.as_deref().unwrap_or(""),
            outcome.linkedin_url.as_deref().unwrap_or(""),
            if outcome.success { "true" } else { "false" },
            outcome.error_type.as_deref().unwrap_or(""),
            outcome.error_explanation.as_deref().unwrap_or(""),
        ])?;
        self.writer.flush()?;
        Ok(())
    }
}
