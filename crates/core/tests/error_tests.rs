// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError display messages
// ═══════════════════════════════════════════════════════════════════

use portfolio_tracker_core::errors::CoreError;

#[test]
fn validation_message_includes_detail() {
    let e = CoreError::Validation("Quantity must be a positive integer, got 0".into());
    assert_eq!(
        e.to_string(),
        "Invalid input: Quantity must be a positive integer, got 0"
    );
}

#[test]
fn empty_selection_is_informational() {
    assert_eq!(CoreError::EmptySelection.to_string(), "No holding selected");
}

#[test]
fn holding_not_found_names_the_selector() {
    let e = CoreError::HoldingNotFound("AAPL x10 @ 150.00".into());
    assert!(e.to_string().contains("AAPL x10"));
}

#[test]
fn api_error_names_the_provider() {
    let e = CoreError::Api {
        provider: "Yahoo Finance".into(),
        message: "rate limited".into(),
    };
    assert_eq!(e.to_string(), "API error (Yahoo Finance): rate limited");
}

#[test]
fn quote_not_available_names_the_symbol() {
    let e = CoreError::QuoteNotAvailable {
        symbol: "TSLA".into(),
    };
    assert!(e.to_string().contains("TSLA"));
}

#[test]
fn rate_not_available_names_both_currencies() {
    let e = CoreError::RateNotAvailable {
        base: "USD".into(),
        target: "INR".into(),
    };
    let msg = e.to_string();
    assert!(msg.contains("USD") && msg.contains("INR"));
}
