use serde::Serialize;

/// Per-domain result record, written as one CSV row.
///
/// Exactly one of two shapes holds: a success (possibly with every `found_*`
/// field empty, when the API answered but matched nobody) or a failure with a
/// non-empty `error_type`. Never both.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub domain: String,
    pub category: String,
    pub found_name: Option<String>,
    pub found_email: Option<String>,
    pub email_verified: Option<bool>,
    pub job_title: Option<String>,
    pub linkedin_url: Option<String>,
    pub success: bool,
    pub error_type: Option<String>,
    pub error_explanation: Option<String>,
}

impl SearchOutcome {
    pub fn failure(
        domain: impl Into<String>,
        category: impl Into<String>,
        error_type: impl Into<String>,
        error_explanation: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            category: category.into(),
            found_name: None,
            found_email: None,
            email_verified: None,
            job_title: None,
            linkedin_url: None,
            success: false,
            error_type: Some(error_type.into()),
            error_explanation: Some(error_explanation.into()),
        }
    }

    pub fn invalid_input(raw_line: &str, category: impl Into<String>) -> Self {
        Self::failure(
            raw_line.trim(),
            category,
            "invalid_input",
            "Line is empty or cleans up to an empty domain",
        )
    }
}

/// Transport-level result of one API call attempt, before classification.
///
/// The client never returns a Rust-level error: every way a single attempt
/// can end is a variant here, so classification stays exhaustive by `match`.
#[derive(Debug, Clone)]
pub enum RawApiResult {
    Success { body: serde_json::Value },
    HttpError { status: u16, body: String },
    Timeout,
    ConnectionError { detail: String },
    MalformedResponse { raw: String },
    UnknownTransportError { detail: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub successes: usize,
    pub failures: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &SearchOutcome) {
        self.total += 1;
        if outcome.success {
            self.successes += 1;
        } else {
            self.failures += 1;
        }
    }
}
