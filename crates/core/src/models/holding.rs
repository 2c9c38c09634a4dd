use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single portfolio entry: a quantity of shares bought at a price.
///
/// Buy prices are always stored in USD, the reference currency. Conversion
/// to the active display currency happens at valuation time only — a
/// currency toggle never rewrites stored holdings.
///
/// Holdings are never mutated in place. Each one carries a stable `id`
/// assigned at creation, and removal selects by that id rather than by
/// matching displayed values back to stored ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Unique identifier, assigned once at creation
    pub id: Uuid,

    /// Ticker symbol, uppercased (e.g., "AAPL")
    pub symbol: String,

    /// Number of shares (whole shares only, always positive)
    pub quantity: u32,

    /// Purchase price per share in USD
    pub buy_price: f64,
}

impl Holding {
    pub fn new(symbol: impl Into<String>, quantity: u32, buy_price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into().to_uppercase(),
            quantity,
            buy_price,
        }
    }
}
