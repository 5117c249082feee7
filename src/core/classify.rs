use crate::domain::model::{RawApiResult, SearchOutcome};
use std::time::Duration;

/// Longest error text carried into a CSV cell before truncation kicks in.
const MAX_ERROR_TEXT_LEN: usize = 500;
const TRUNCATION_MARKER: &str = "... [truncated]";

/// Maps one transport-level result to the outcome row for `domain`. Pure:
/// the only inputs are the arguments, the only output is the record.
pub fn classify(
    domain: &str,
    category: &str,
    raw: RawApiResult,
    timeout: Duration,
) -> SearchOutcome {
    match raw {
        RawApiResult::Success { body } => classify_success(domain, category, body),

        RawApiResult::HttpError { status, body } => SearchOutcome::failure(
            domain,
            category,
            format!("http_{}", status),
            http_error_explanation(&body),
        ),

        RawApiResult::Timeout => SearchOutcome::failure(
            domain,
            category,
            "timeout",
            format!("Request timed out after {} seconds", timeout.as_secs()),
        ),

        RawApiResult::ConnectionError { detail } => {
            SearchOutcome::failure(domain, category, "connection_error", detail)
        }

        RawApiResult::MalformedResponse { raw } => SearchOutcome::failure(
            domain,
            category,
            "invalid_json_response",
            truncate_for_cell(&raw),
        ),

        RawApiResult::UnknownTransportError { detail } => {
            SearchOutcome::failure(domain, category, "unknown_error", detail)
        }
    }
}

fn classify_success(domain: &str, category: &str, body: serde_json::Value) -> SearchOutcome {
    // The provider reports its own failures inside 200 responses, either with
    // success=false or an explicit error field. Those are failures for us too.
    let provider_failed = body.get("success").and_then(|v| v.as_bool()) == Some(false)
        || body.get("error").is_some();

    if provider_failed {
        let error_type = body
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap_or("provider_error");
        let explanation = body
            .get("error_explained")
            .and_then(|v| v.as_str())
            .unwrap_or("No explanation provided");
        return SearchOutcome::failure(domain, category, error_type, explanation);
    }

    // An empty result object is still a success: the API answered, it just
    // found nobody for this domain.
    let person = body.get("result");
    let field = |key: &str| {
        person
            .and_then(|p| p.get(key))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    };

    SearchOutcome {
        domain: domain.to_string(),
        category: category.to_string(),
        found_name: field("personFullName"),
        found_email: field("email"),
        email_verified: person.and_then(|p| p.get("emailVerified")).and_then(|v| v.as_bool()),
        job_title: field("personJobTitle"),
        linkedin_url: field("personLinkedinUrl"),
        success: true,
        error_type: None,
        error_explanation: None,
    }
}

fn http_error_explanation(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = json
            .get("error_explained")
            .or_else(|| json.get("error"))
            .and_then(|v| v.as_str())
        {
            return msg.to_string();
        }
    }

    if body.trim().is_empty() {
        "HTTP error".to_string()
    } else {
        truncate_for_cell(body)
    }
}

fn truncate_for_cell(text: &str) -> String {
    if text.chars().count() <= MAX_ERROR_TEXT_LEN {
        text.to_string()
    } else {
        let head: String = text.chars().take(MAX_ERROR_TEXT_LEN).collect();
        format!("{}{}", head, TRUNCATION_MARKER)
    }
}
