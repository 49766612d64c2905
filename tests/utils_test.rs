use tastecli::types::TimeWindow;
use tastecli::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_parse_time_window_short_forms() {
    assert_eq!(parse_time_window("short").unwrap(), TimeWindow::Short);
    assert_eq!(parse_time_window("medium").unwrap(), TimeWindow::Medium);
    assert_eq!(parse_time_window("long").unwrap(), TimeWindow::Long);
}

#[test]
fn test_parse_time_window_api_values() {
    assert_eq!(parse_time_window("short_term").unwrap(), TimeWindow::Short);
    assert_eq!(
        parse_time_window("medium_term").unwrap(),
        TimeWindow::Medium
    );
    assert_eq!(parse_time_window("long_term").unwrap(), TimeWindow::Long);
}

#[test]
fn test_parse_time_window_case_and_whitespace() {
    assert_eq!(parse_time_window("SHORT").unwrap(), TimeWindow::Short);
    assert_eq!(parse_time_window("  Medium ").unwrap(), TimeWindow::Medium);
}

#[test]
fn test_parse_time_window_invalid() {
    let result = parse_time_window("fortnight");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid time window"));
}

#[test]
fn test_time_window_api_values_are_fixed() {
    assert_eq!(TimeWindow::Short.api_value(), "short_term");
    assert_eq!(TimeWindow::Medium.api_value(), "medium_term");
    assert_eq!(TimeWindow::Long.api_value(), "long_term");
    assert_eq!(TimeWindow::ALL.len(), 3);
}

#[test]
fn test_round2() {
    assert_eq!(round2(3.5833333), 3.58);
    assert_eq!(round2(2.456), 2.46);
    assert_eq!(round2(2.0), 2.0);
}
