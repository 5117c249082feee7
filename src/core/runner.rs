use crate::core::classify::classify;
use crate::core::normalize::normalize;
use crate::domain::model::{RunSummary, SearchOutcome};
use crate::domain::ports::{DecisionMakerApi, OutcomeSink};
use crate::utils::error::{LookupError, Result};
use std::time::Duration;

/// Drives the whole batch: normalize, look up, classify, write, next line.
/// One domain is processed to completion (network call included) before the
/// next begins. A per-domain failure becomes a row and the batch moves on;
/// only a sink write failure aborts the run.
pub struct BatchRunner<A: DecisionMakerApi, W: OutcomeSink> {
    api: A,
    sink: W,
    category: String,
    timeout: Duration,
}

impl<A: DecisionMakerApi, W: OutcomeSink> BatchRunner<A, W> {
    pub fn new(api: A, sink: W, category: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api,
            sink,
            category: category.into(),
            timeout,
        }
    }

    pub async fn run(&mut self, lines: impl IntoIterator<Item = String>) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for line in lines {
            let outcome = match normalize(&line) {
                Ok(domain) => {
                    tracing::info!("Searching for {} contact at {}", self.category, domain);
                    let raw = self.api.lookup(&domain).await;
                    classify(&domain, &self.category, raw, self.timeout)
                }
                Err(LookupError::EmptyDomain) => {
                    tracing::warn!("Skipping API call for unusable input line {:?}", line);
                    SearchOutcome::invalid_input(&line, &self.category)
                }
                Err(e) => return Err(e),
            };

            if outcome.success {
                tracing::info!(
                    "  {}: found {} ({})",
                    outcome.domain,
                    outcome.found_name.as_deref().unwrap_or("no match"),
                    outcome.found_email.as_deref().unwrap_or("no email")
                );
            } else {
                tracing::warn!(
                    "  {}: {} - {}",
                    outcome.domain,
                    outcome.error_type.as_deref().unwrap_or("unknown"),
                    outcome.error_explanation.as_deref().unwrap_or("")
                );
            }

            self.sink.write(&outcome)?;
            summary.record(&outcome);
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RawApiResult;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    struct ScriptedApi {
        responses: HashMap<String, RawApiResult>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedApi {
        fn new(responses: Vec<(&str, RawApiResult)>) -> Self {
            Self {
                responses: responses
                    .into_iter()
                    .map(|(d, r)| (d.to_string(), r))
                    .collect(),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl DecisionMakerApi for ScriptedApi {
        async fn lookup(&self, domain: &str) -> RawApiResult {
            self.calls.lock().unwrap().push(domain.to_string());
            self.responses
                .get(domain)
                .cloned()
                .unwrap_or(RawApiResult::Timeout)
        }
    }

    #[derive(Clone, Default)]
    struct VecSink {
        rows: Arc<Mutex<Vec<SearchOutcome>>>,
    }

    impl OutcomeSink for VecSink {
        fn write(&mut self, outcome: &SearchOutcome) -> Result<()> {
            self.rows.lock().unwrap().push(outcome.clone());
            Ok(())
        }
    }

    fn match_body(email: &str) -> RawApiResult {
        RawApiResult::Success {
            body: serde_json::json!({
                "success": true,
                "result": { "email": email, "emailVerified": true }
            }),
        }
    }

    fn no_match_body() -> RawApiResult {
        RawApiResult::Success {
            body: serde_json::json!({ "success": true, "result": null }),
        }
    }

    #[tokio::test]
    async fn test_one_row_per_line_in_input_order() {
        let api = ScriptedApi::new(vec![
            ("a.com", match_body("hr@a.com")),
            ("b.org", no_match_body()),
        ]);
        let calls = api.calls.clone();
        let sink = VecSink::default();
        let rows = sink.rows.clone();

        let mut runner = BatchRunner::new(api, sink, "hr", Duration::from_secs(15));
        let lines = vec!["https://www.a.com/".to_string(), "b.org".to_string()];
        let summary = runner.run(lines).await.unwrap();

        assert_eq!(summary.total, 2);
        let rows = rows.lock().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].domain, "a.com");
        assert_eq!(rows[1].domain, "b.org");
        assert_eq!(*calls.lock().unwrap(), vec!["a.com", "b.org"]);
    }

    #[tokio::test]
    async fn test_blank_line_becomes_invalid_input_row_without_api_call() {
        let api = ScriptedApi::new(vec![("a.com", match_body("hr@a.com"))]);
        let calls = api.calls.clone();
        let sink = VecSink::default();
        let rows = sink.rows.clone();

        let mut runner = BatchRunner::new(api, sink, "hr", Duration::from_secs(15));
        let lines = vec!["a.com".to_string(), "   ".to_string()];
        let summary = runner.run(lines).await.unwrap();

        assert_eq!(summary.total, 2);
        assert_eq!(summary.successes, 1);
        assert_eq!(summary.failures, 1);

        let rows = rows.lock().unwrap();
        assert_eq!(rows[1].error_type.as_deref(), Some("invalid_input"));
        assert!(!rows[1].success);
        // Only the real domain reached the API.
        assert_eq!(*calls.lock().unwrap(), vec!["a.com"]);
    }

    #[tokio::test]
    async fn test_one_timeout_does_not_abort_the_batch() {
        let api = ScriptedApi::new(vec![
            ("a.com", RawApiResult::Timeout),
            ("b.com", match_body("hr@b.com")),
            ("c.com", no_match_body()),
        ]);
        let sink = VecSink::default();
        let rows = sink.rows.clone();

        let mut runner = BatchRunner::new(api, sink, "hr", Duration::from_secs(15));
        let lines = vec!["a.com", "b.com", "c.com"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        let summary = runner.run(lines).await.unwrap();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.successes, 2);
        assert_eq!(summary.failures, 1);

        let rows = rows.lock().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].error_type.as_deref(), Some("timeout"));
        assert_eq!(rows[1].found_email.as_deref(), Some("hr@b.com"));
        assert!(rows[2].success);
    }

    #[tokio::test]
    async fn test_summary_counters_add_up() {
        let api = ScriptedApi::new(vec![
            ("ok.com", match_body("hr@ok.com")),
            ("down.com", RawApiResult::ConnectionError {
                detail: "connection refused".to_string(),
            }),
        ]);
        let sink = VecSink::default();

        let mut runner = BatchRunner::new(api, sink, "hr", Duration::from_secs(15));
        let lines = vec!["ok.com", "down.com", ""]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        let summary = runner.run(lines).await.unwrap();

        assert_eq!(summary.successes + summary.failures, summary.total);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.successes, 1);
        assert_eq!(summary.failures, 2);
    }

    #[tokio::test]
    async fn test_empty_batch_yields_empty_summary() {
        let api = ScriptedApi::new(vec![]);
        let sink = VecSink::default();

        let mut runner = BatchRunner::new(api, sink, "hr", Duration::from_secs(15));
        let summary = runner.run(Vec::<String>::new()).await.unwrap();

        assert_eq!(summary, RunSummary::default());
    }
}
