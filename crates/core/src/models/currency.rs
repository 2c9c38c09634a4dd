use serde::{Deserialize, Serialize};

/// The currency used for rendering monetary values.
///
/// USD is the reference currency: holdings are stored in it and the
/// USD rate is always 1. INR display applies the active USD→INR rate
/// at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayCurrency {
    Usd,
    Inr,
}

impl DisplayCurrency {
    /// The other currency — toggling twice returns to the original.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            DisplayCurrency::Usd => DisplayCurrency::Inr,
            DisplayCurrency::Inr => DisplayCurrency::Usd,
        }
    }

    /// ISO 4217 code (e.g., for rate lookups and display).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            DisplayCurrency::Usd => "USD",
            DisplayCurrency::Inr => "INR",
        }
    }
}

impl std::fmt::Display for DisplayCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
