use serde::{Deserialize, Serialize};

use super::currency::DisplayCurrency;

/// User-configurable settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// The currency in which all monetary values are rendered.
    /// Stored buy prices stay in USD regardless of this setting.
    pub display_currency: DisplayCurrency,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_currency: DisplayCurrency::Inr,
        }
    }
}
