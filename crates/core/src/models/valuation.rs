use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::currency::DisplayCurrency;

/// Gain/loss classification for a valuation row. Purely a display tag:
/// a strictly positive gain counts as `Gain`, everything else as `Loss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Gain,
    Loss,
}

/// One successfully-priced holding in a revaluation pass.
///
/// All monetary fields are already converted to the display currency the
/// pass was run with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationRow {
    /// Id of the holding this row was computed from
    pub holding_id: Uuid,

    /// Ticker symbol
    pub symbol: String,

    /// Number of shares
    pub quantity: u32,

    /// Buy price per share, in the display currency
    pub buy_price: f64,

    /// Latest close per share, in the display currency
    pub current_price: f64,

    /// quantity × buy price
    pub investment: f64,

    /// quantity × latest close
    pub current_value: f64,

    /// current_value − investment
    pub gain: f64,

    /// Display styling tag
    pub trend: Trend,
}

/// The best or worst performing row of a revaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMover {
    pub symbol: String,
    pub gain: f64,
}

/// Result of one full revaluation pass over the portfolio.
///
/// Holdings whose quote fetch failed are absent from `rows` and excluded
/// from every aggregate — the summary always reflects only the subset of
/// holdings currently priceable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationSummary {
    /// Display currency all monetary values are expressed in
    pub currency: DisplayCurrency,

    /// Per-holding rows, in portfolio order
    pub rows: Vec<ValuationRow>,

    /// Σ investment over successful rows
    pub total_investment: f64,

    /// Σ current_value over successful rows
    pub total_value: f64,

    /// total_value − total_investment
    pub net: f64,

    /// Row with the largest gain, if any row succeeded
    pub top_gainer: Option<TopMover>,

    /// Row with the smallest gain, if any row succeeded
    pub top_loser: Option<TopMover>,

    /// When this pass was computed
    pub as_of: DateTime<Utc>,
}
