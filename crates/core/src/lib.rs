pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use errors::CoreError;
use models::{
    chart::{AllocationSlice, SymbolHistory},
    currency::DisplayCurrency,
    holding::Holding,
    portfolio::Portfolio,
    valuation::ValuationSummary,
};
use providers::{
    frankfurter::FrankfurterRateProvider,
    traits::{QuoteProvider, RateProvider},
    yahoo::YahooQuoteProvider,
};
use services::{
    chart_service::ChartService, currency_service::CurrencyService,
    portfolio_service::PortfolioService, valuation_service::ValuationService,
};

/// Window for the historical line chart, in days (one year back from today).
const HISTORY_WINDOW_DAYS: i64 = 365;

/// Main entry point for the portfolio tracker core library.
/// Holds the portfolio state and all services needed to operate on it.
///
/// The tracker starts with a rate of 1.0; call [`refresh_rate`](Self::refresh_rate)
/// once at startup so a non-USD display currency gets a live rate.
#[must_use]
pub struct PortfolioTracker {
    portfolio: Portfolio,
    portfolio_service: PortfolioService,
    currency_service: CurrencyService,
    valuation_service: ValuationService,
    chart_service: ChartService,
    quotes: Box<dyn QuoteProvider>,
    rates: Box<dyn RateProvider>,
    /// Active USD→display-currency multiplier (1.0 for USD display)
    rate: f64,
    /// When the last revaluation pass completed, if any
    last_updated: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for PortfolioTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioTracker")
            .field("holdings", &self.portfolio.holdings.len())
            .field("currency", &self.portfolio.settings.display_currency)
            .field("rate", &self.rate)
            .field("last_updated", &self.last_updated)
            .finish()
    }
}

impl PortfolioTracker {
    /// Create a tracker with explicit providers (mocks in tests, live
    /// providers in the app).
    pub fn new(quotes: Box<dyn QuoteProvider>, rates: Box<dyn RateProvider>) -> Self {
        Self {
            portfolio: Portfolio::default(),
            portfolio_service: PortfolioService::new(),
            currency_service: CurrencyService::new(),
            valuation_service: ValuationService::new(),
            chart_service: ChartService::new(),
            quotes,
            rates,
            rate: 1.0,
            last_updated: None,
        }
    }

    /// Create a tracker wired to the live providers
    /// (Yahoo Finance quotes, Frankfurter rates).
    pub fn with_default_providers() -> Result<Self, CoreError> {
        Ok(Self::new(
            Box::new(YahooQuoteProvider::new()?),
            Box::new(FrankfurterRateProvider::new()),
        ))
    }

    // ── Portfolio Mutation ──────────────────────────────────────────

    /// Add a holding (buy price in USD). Returns its id.
    pub fn add_holding(
        &mut self,
        symbol: &str,
        quantity: i64,
        buy_price_usd: f64,
    ) -> Result<Uuid, CoreError> {
        self.portfolio_service
            .add_holding(&mut self.portfolio, symbol, quantity, buy_price_usd)
    }

    /// Add a holding from raw form input, as typed by the user.
    pub fn add_holding_from_input(
        &mut self,
        symbol: &str,
        quantity: &str,
        buy_price_usd: &str,
    ) -> Result<Uuid, CoreError> {
        self.portfolio_service.add_holding_from_input(
            &mut self.portfolio,
            symbol,
            quantity,
            buy_price_usd,
        )
    }

    /// Remove a holding by its id.
    pub fn remove_holding(&mut self, id: Uuid) -> Result<Holding, CoreError> {
        self.portfolio_service.remove_holding(&mut self.portfolio, id)
    }

    /// Remove the holding behind the current UI selection.
    /// `None` means nothing is selected, which is surfaced as
    /// [`CoreError::EmptySelection`] and performs no mutation.
    pub fn remove_selected(&mut self, selected: Option<Uuid>) -> Result<Holding, CoreError> {
        let id = selected.ok_or(CoreError::EmptySelection)?;
        self.remove_holding(id)
    }

    /// Remove the first holding matching a displayed row (symbol, quantity,
    /// displayed buy price). Converts the displayed price back to USD with
    /// the active rate. Ambiguous for fully identical duplicates; prefer
    /// [`remove_holding`](Self::remove_holding).
    pub fn remove_matching(
        &mut self,
        symbol: &str,
        quantity: u32,
        displayed_buy_price: f64,
    ) -> Result<Holding, CoreError> {
        self.portfolio_service.remove_matching(
            &mut self.portfolio,
            symbol,
            quantity,
            displayed_buy_price,
            self.rate,
        )
    }

    // ── State Accessors ─────────────────────────────────────────────

    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.portfolio.holdings
    }

    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.portfolio.holdings.len()
    }

    #[must_use]
    pub fn display_currency(&self) -> DisplayCurrency {
        self.portfolio.settings.display_currency
    }

    /// The active USD→display-currency multiplier.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// When the last revaluation pass completed, if any.
    #[must_use]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    // ── Currency ────────────────────────────────────────────────────

    /// Re-resolve the exchange rate for the active display currency.
    /// Never fails: rate-fetch errors degrade to the fixed fallback.
    pub async fn refresh_rate(&mut self) -> f64 {
        self.rate = self
            .currency_service
            .resolve_rate(self.rates.as_ref(), self.display_currency())
            .await;
        self.rate
    }

    /// Flip the display currency and re-resolve the rate.
    /// Stored holdings stay USD-denominated; only rendering changes.
    pub async fn toggle_currency(&mut self) -> DisplayCurrency {
        self.portfolio.settings.display_currency = self.display_currency().toggled();
        self.refresh_rate().await;
        self.display_currency()
    }

    // ── Valuation ───────────────────────────────────────────────────

    /// Run a full revaluation pass: fetch a fresh quote per holding,
    /// compute values and gains in the display currency, and aggregate.
    /// Holdings that cannot be priced are dropped from this pass.
    pub async fn revalue(&mut self) -> ValuationSummary {
        let summary = self
            .valuation_service
            .revalue(
                &self.portfolio,
                self.rate,
                self.display_currency(),
                self.quotes.as_ref(),
            )
            .await;
        self.last_updated = Some(summary.as_of);
        summary
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Allocation pie data: current market value per holding.
    pub async fn allocation(&self) -> Vec<AllocationSlice> {
        self.chart_service
            .allocation(&self.portfolio, self.rate, self.quotes.as_ref())
            .await
    }

    /// Daily-close history per symbol over an explicit date range.
    pub async fn history(&self, from: NaiveDate, to: NaiveDate) -> Vec<SymbolHistory> {
        self.chart_service
            .history(&self.portfolio, self.rate, self.quotes.as_ref(), from, to)
            .await
    }

    /// Daily-close history per symbol over the last year.
    pub async fn history_last_year(&self) -> Vec<SymbolHistory> {
        let to = Utc::now().date_naive();
        let from = to - chrono::Duration::days(HISTORY_WINDOW_DAYS);
        self.history(from, to).await
    }
}
