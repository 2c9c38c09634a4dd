use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::holding::Holding;
use crate::models::portfolio::Portfolio;

/// Tolerance for matching a displayed, currency-converted buy price back to
/// the stored USD price (one US cent). Only used by the legacy
/// displayed-value selector; id-based removal needs no tolerance.
const DISPLAYED_PRICE_TOLERANCE_USD: f64 = 0.01;

/// Manages portfolio mutations: adding and removing holdings.
///
/// Pure business logic — no I/O, no API calls. Easy to test.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Add a new holding to the portfolio.
    ///
    /// Rules:
    /// - Symbol must be non-empty
    /// - Quantity must be a positive integer (and fit in `u32`)
    /// - Buy price must be a positive, finite USD amount
    ///
    /// On validation failure the portfolio is left unchanged.
    /// Returns the id of the new holding.
    pub fn add_holding(
        &self,
        portfolio: &mut Portfolio,
        symbol: &str,
        quantity: i64,
        buy_price_usd: f64,
    ) -> Result<Uuid, CoreError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(CoreError::Validation(
                "Stock symbol must not be empty".into(),
            ));
        }

        if quantity <= 0 {
            return Err(CoreError::Validation(format!(
                "Quantity must be a positive integer, got {quantity}"
            )));
        }
        let quantity = u32::try_from(quantity).map_err(|_| {
            CoreError::Validation(format!("Quantity {quantity} is too large"))
        })?;

        if !buy_price_usd.is_finite() || buy_price_usd <= 0.0 {
            return Err(CoreError::Validation(format!(
                "Buy price must be a positive amount, got {buy_price_usd}"
            )));
        }

        let holding = Holding::new(symbol, quantity, buy_price_usd);
        let id = holding.id;
        portfolio.holdings.push(holding);
        Ok(id)
    }

    /// Add a holding from raw form input, as typed by the user.
    /// Non-numeric quantity or price is a validation error, no mutation.
    pub fn add_holding_from_input(
        &self,
        portfolio: &mut Portfolio,
        symbol: &str,
        quantity: &str,
        buy_price_usd: &str,
    ) -> Result<Uuid, CoreError> {
        let quantity: i64 = quantity.trim().parse().map_err(|_| {
            CoreError::Validation(format!("'{quantity}' is not a valid quantity"))
        })?;
        let buy_price_usd: f64 = buy_price_usd.trim().parse().map_err(|_| {
            CoreError::Validation(format!("'{buy_price_usd}' is not a valid price"))
        })?;
        self.add_holding(portfolio, symbol, quantity, buy_price_usd)
    }

    /// Remove a holding by its id. This is the canonical removal path:
    /// exact, unambiguous, no tolerance matching.
    /// Returns the removed holding.
    pub fn remove_holding(
        &self,
        portfolio: &mut Portfolio,
        id: Uuid,
    ) -> Result<Holding, CoreError> {
        let idx = portfolio
            .holdings
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| CoreError::HoldingNotFound(id.to_string()))?;
        Ok(portfolio.holdings.remove(idx))
    }

    /// Remove the first holding matching a displayed row: symbol, quantity,
    /// and the displayed buy price converted back to USD with the given rate.
    ///
    /// Kept for selection-by-displayed-value frontends. When several
    /// holdings share symbol, quantity, and buy price, which one goes is
    /// ambiguous by construction — the first match wins. Prefer
    /// [`remove_holding`](Self::remove_holding).
    pub fn remove_matching(
        &self,
        portfolio: &mut Portfolio,
        symbol: &str,
        quantity: u32,
        displayed_buy_price: f64,
        rate: f64,
    ) -> Result<Holding, CoreError> {
        let symbol = symbol.trim().to_uppercase();
        let buy_price_usd = displayed_buy_price / rate;

        let idx = portfolio
            .holdings
            .iter()
            .position(|h| {
                h.symbol == symbol
                    && h.quantity == quantity
                    && (h.buy_price - buy_price_usd).abs() < DISPLAYED_PRICE_TOLERANCE_USD
            })
            .ok_or_else(|| {
                CoreError::HoldingNotFound(format!(
                    "{symbol} x{quantity} @ {displayed_buy_price:.2}"
                ))
            })?;
        Ok(portfolio.holdings.remove(idx))
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
