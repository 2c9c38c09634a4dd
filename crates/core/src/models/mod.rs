pub mod chart;
pub mod currency;
pub mod holding;
pub mod portfolio;
pub mod quote;
pub mod settings;
pub mod valuation;
