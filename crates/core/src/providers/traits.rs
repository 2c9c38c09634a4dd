use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::quote::PricePoint;

/// Trait abstraction for market-data providers.
///
/// The application is purely a network client of these collaborators. If an
/// API stops working or changes, we replace only that one implementation —
/// the rest of the codebase is untouched.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Get the latest close price of a symbol, in USD.
    async fn latest_close(&self, symbol: &str) -> Result<f64, CoreError>;

    /// Get historical daily closes for a symbol over a date range,
    /// in USD, sorted by date.
    async fn daily_closes(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PricePoint>, CoreError>;
}

/// Trait abstraction for exchange-rate providers.
///
/// USD is the reference currency, so only USD→target rates are needed.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Get the current USD→`target` exchange rate.
    async fn usd_rate(&self, target: &str) -> Result<f64, CoreError>;
}
