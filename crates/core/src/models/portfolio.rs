use serde::{Deserialize, Serialize};

use super::holding::Holding;
use super::settings::Settings;

/// The main data container: the ordered list of holdings plus user settings.
///
/// Holdings keep insertion order — that is also the display order. There is
/// no uniqueness constraint on symbol: buying the same stock twice produces
/// two separate rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    /// All holdings, in the order they were added
    pub holdings: Vec<Holding>,

    /// User settings (active display currency)
    pub settings: Settings,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            holdings: Vec::new(),
            settings: Settings::default(),
        }
    }
}

impl Portfolio {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }
}
