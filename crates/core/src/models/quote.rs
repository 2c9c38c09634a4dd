use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily-close sample (date → price).
///
/// Quote data is ephemeral: it is fetched per valuation or chart pass and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}
