use thiserror::Error;

/// Unified error type for the entire portfolio-tracker-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── User Input ──────────────────────────────────────────────────
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Holding not found: {0}")]
    HoldingNotFound(String),

    #[error("No holding selected")]
    EmptySelection,

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("No quote available for {symbol}")]
    QuoteNotAvailable {
        symbol: String,
    },

    #[error("No exchange rate available for {base} to {target}")]
    RateNotAvailable {
        base: String,
        target: String,
    },
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs.
        // reqwest errors often contain full request URLs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
