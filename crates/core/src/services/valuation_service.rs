use chrono::Utc;
use tracing::warn;

use crate::errors::CoreError;
use crate::models::currency::DisplayCurrency;
use crate::models::holding::Holding;
use crate::models::portfolio::Portfolio;
use crate::models::valuation::{TopMover, Trend, ValuationRow, ValuationSummary};
use crate::providers::traits::QuoteProvider;

/// Recomputes investment value, current value, and gain/loss for every
/// holding given fresh quotes and the active currency rate.
///
/// Failure policy: a holding whose quote fetch fails is dropped from the
/// rows and from every aggregate for this pass. The failure is logged but
/// not surfaced per-symbol — the summary always reflects the priceable
/// subset.
pub struct ValuationService;

impl ValuationService {
    pub fn new() -> Self {
        Self
    }

    /// Run one full revaluation pass over the portfolio.
    pub async fn revalue(
        &self,
        portfolio: &Portfolio,
        rate: f64,
        currency: DisplayCurrency,
        quotes: &dyn QuoteProvider,
    ) -> ValuationSummary {
        let mut rows: Vec<ValuationRow> = Vec::with_capacity(portfolio.holdings.len());
        let mut total_investment = 0.0;
        let mut total_value = 0.0;

        for holding in &portfolio.holdings {
            match self.price_holding(holding, rate, quotes).await {
                Ok(row) => {
                    total_investment += row.investment;
                    total_value += row.current_value;
                    rows.push(row);
                }
                Err(e) => {
                    warn!(
                        symbol = %holding.symbol,
                        error = %e,
                        "quote fetch failed, dropping holding from this pass"
                    );
                }
            }
        }

        let top_gainer = rows
            .iter()
            .max_by(|a, b| a.gain.partial_cmp(&b.gain).unwrap_or(std::cmp::Ordering::Equal))
            .map(|r| TopMover {
                symbol: r.symbol.clone(),
                gain: r.gain,
            });
        let top_loser = rows
            .iter()
            .min_by(|a, b| a.gain.partial_cmp(&b.gain).unwrap_or(std::cmp::Ordering::Equal))
            .map(|r| TopMover {
                symbol: r.symbol.clone(),
                gain: r.gain,
            });

        ValuationSummary {
            currency,
            net: total_value - total_investment,
            rows,
            total_investment,
            total_value,
            top_gainer,
            top_loser,
            as_of: Utc::now(),
        }
    }

    /// Price a single holding. Explicit per-holding result: the caller
    /// decides what to do with failures (the revaluation pass drops them).
    pub async fn price_holding(
        &self,
        holding: &Holding,
        rate: f64,
        quotes: &dyn QuoteProvider,
    ) -> Result<ValuationRow, CoreError> {
        let close = quotes.latest_close(&holding.symbol).await?;

        if !close.is_finite() || close < 0.0 {
            return Err(CoreError::Api {
                provider: quotes.name().to_string(),
                message: format!(
                    "Invalid price returned for {}: {close} (must be finite and non-negative)",
                    holding.symbol
                ),
            });
        }

        let quantity = f64::from(holding.quantity);
        let investment = quantity * holding.buy_price * rate;
        let current_value = quantity * close * rate;
        let gain = current_value - investment;

        Ok(ValuationRow {
            holding_id: holding.id,
            symbol: holding.symbol.clone(),
            quantity: holding.quantity,
            buy_price: holding.buy_price * rate,
            current_price: close * rate,
            investment,
            current_value,
            gain,
            trend: if gain > 0.0 { Trend::Gain } else { Trend::Loss },
        })
    }
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new()
    }
}
