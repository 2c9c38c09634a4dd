use chrono::NaiveDate;
use tracing::warn;

use crate::models::chart::{AllocationSlice, SymbolHistory};
use crate::models::portfolio::Portfolio;
use crate::models::quote::PricePoint;
use crate::providers::traits::QuoteProvider;

/// Generates chart-ready data sets from portfolio data.
///
/// The core computes all the numbers — the frontend only renders.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Allocation pie data: current market value per holding.
    ///
    /// A holding whose quote fetch fails contributes a zero-value slice,
    /// so every row stays visible in the chart. Percentages are relative
    /// to the total of all slices; all zero when the total is zero.
    pub async fn allocation(
        &self,
        portfolio: &Portfolio,
        rate: f64,
        quotes: &dyn QuoteProvider,
    ) -> Vec<AllocationSlice> {
        let mut slices: Vec<AllocationSlice> = Vec::with_capacity(portfolio.holdings.len());

        for holding in &portfolio.holdings {
            let value = match quotes.latest_close(&holding.symbol).await {
                Ok(close) if close.is_finite() && close >= 0.0 => {
                    f64::from(holding.quantity) * close * rate
                }
                Ok(close) => {
                    warn!(symbol = %holding.symbol, close, "invalid price, zero allocation slice");
                    0.0
                }
                Err(e) => {
                    warn!(
                        symbol = %holding.symbol,
                        error = %e,
                        "quote fetch failed, zero allocation slice"
                    );
                    0.0
                }
            };
            slices.push(AllocationSlice {
                holding_id: holding.id,
                symbol: holding.symbol.clone(),
                value,
                share_pct: 0.0, // filled below
            });
        }

        let total: f64 = slices.iter().map(|s| s.value).sum();
        if total > 0.0 {
            for slice in &mut slices {
                slice.share_pct = slice.value / total * 100.0;
            }
        }

        slices
    }

    /// Historical daily closes per symbol over a date range, scaled into
    /// the display currency.
    ///
    /// Duplicate holdings of the same symbol collapse into one series.
    /// Symbols whose history fetch fails are skipped.
    pub async fn history(
        &self,
        portfolio: &Portfolio,
        rate: f64,
        quotes: &dyn QuoteProvider,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Vec<SymbolHistory> {
        let mut seen = std::collections::HashSet::new();
        let symbols: Vec<&str> = portfolio
            .holdings
            .iter()
            .filter(|h| seen.insert(h.symbol.as_str()))
            .map(|h| h.symbol.as_str())
            .collect();

        let mut series = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            match quotes.daily_closes(symbol, from, to).await {
                Ok(points) => {
                    let points: Vec<PricePoint> = points
                        .into_iter()
                        .map(|p| PricePoint {
                            date: p.date,
                            price: p.price * rate,
                        })
                        .collect();
                    series.push(SymbolHistory {
                        symbol: symbol.to_string(),
                        points,
                    });
                }
                Err(e) => {
                    warn!(symbol, error = %e, "history fetch failed, skipping symbol");
                }
            }
        }

        series
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
