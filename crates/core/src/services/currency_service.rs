use tracing::warn;

use crate::models::currency::DisplayCurrency;
use crate::providers::traits::RateProvider;

/// Rate used when the live USD→INR fetch fails.
pub const FALLBACK_USD_INR_RATE: f64 = 83.0;

/// Resolves the USD→display-currency exchange rate.
///
/// USD is the reference currency, so its rate is always 1 and costs no
/// network call. For INR the live rate is fetched; any failure (or a
/// nonsensical rate) degrades to [`FALLBACK_USD_INR_RATE`] — the failure is
/// never surfaced to the user, only logged.
pub struct CurrencyService;

impl CurrencyService {
    pub fn new() -> Self {
        Self
    }

    /// Get the rate multiplier for rendering USD amounts in `currency`.
    pub async fn resolve_rate(
        &self,
        provider: &dyn RateProvider,
        currency: DisplayCurrency,
    ) -> f64 {
        match currency {
            DisplayCurrency::Usd => 1.0,
            DisplayCurrency::Inr => match provider.usd_rate("INR").await {
                Ok(rate) if rate.is_finite() && rate > 0.0 => rate,
                Ok(rate) => {
                    warn!(
                        provider = provider.name(),
                        rate, "invalid USD to INR rate, using fallback"
                    );
                    FALLBACK_USD_INR_RATE
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "USD to INR rate fetch failed, using fallback"
                    );
                    FALLBACK_USD_INR_RATE
                }
            },
        }
    }
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self::new()
    }
}
