use crate::utils::error::{LookupError, Result};
use std::io::{BufRead, Write};

pub const API_KEY_ENV_VAR: &str = "ANYMAILFINDER_API_KEY";

/// Resolves the API key once at startup: environment variable first, then an
/// interactive prompt. The rest of the program only ever sees the resolved
/// string. A missing or empty key is a fatal startup error.
pub fn resolve_api_key() -> Result<String> {
    if let Ok(key) = std::env::var(API_KEY_ENV_VAR) {
        if !key.trim().is_empty() {
            tracing::info!("Using API key from environment variable {}", API_KEY_ENV_VAR);
            return Ok(key.trim().to_string());
        }
    }

    let stdin = std::io::stdin();
    prompt_for_key(&mut stdin.lock(), &mut std::io::stderr())
}

fn prompt_for_key(input: &mut impl BufRead, prompt_out: &mut impl Write) -> Result<String> {
    write!(prompt_out, "Please enter your Anymailfinder API key: ")?;
    prompt_out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let key = line.trim();
    if key.is_empty() {
        return Err(LookupError::MissingCredential);
    }
    Ok(key.to_string())
}
