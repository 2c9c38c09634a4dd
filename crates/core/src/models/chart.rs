use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::quote::PricePoint;

/// One slice of the allocation pie: the current market value of a holding.
///
/// The core computes these — the frontend just renders. A holding whose
/// quote fetch failed still gets a slice, with `value` 0, so every row
/// stays visible in the chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationSlice {
    /// Id of the holding this slice belongs to
    pub holding_id: Uuid,

    /// Ticker symbol (slice label)
    pub symbol: String,

    /// quantity × latest close, in the display currency
    pub value: f64,

    /// This slice's share of the total portfolio value, 0–100.
    /// Zero when the total itself is zero.
    pub share_pct: f64,
}

/// Historical daily closes for one symbol, for the line chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolHistory {
    /// Ticker symbol (series label)
    pub symbol: String,

    /// Daily closes in the display currency, sorted by date
    pub points: Vec<PricePoint>,
}
