use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::TimeWindow;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Parses a time window name from the command line. Accepts the short form
/// (`short`) and the raw API value (`short_term`), case-insensitively.
pub fn parse_time_window(value: &str) -> Result<TimeWindow, String> {
    match value.trim().to_lowercase().as_str() {
        "short" | "short_term" => Ok(TimeWindow::Short),
        "medium" | "medium_term" => Ok(TimeWindow::Medium),
        "long" | "long_term" => Ok(TimeWindow::Long),
        other => Err(format!(
            "invalid time window '{}', expected one of: short, medium, long",
            other
        )),
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
