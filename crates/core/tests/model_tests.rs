// ═══════════════════════════════════════════════════════════════════
// Model Tests — Holding, Portfolio, DisplayCurrency, Settings
// ═══════════════════════════════════════════════════════════════════

use portfolio_tracker_core::models::currency::DisplayCurrency;
use portfolio_tracker_core::models::holding::Holding;
use portfolio_tracker_core::models::portfolio::Portfolio;
use portfolio_tracker_core::models::settings::Settings;

mod holding {
    use super::*;

    #[test]
    fn new_uppercases_symbol() {
        let h = Holding::new("aapl", 10, 150.0);
        assert_eq!(h.symbol, "AAPL");
    }

    #[test]
    fn new_keeps_quantity_and_price() {
        let h = Holding::new("MSFT", 3, 412.5);
        assert_eq!(h.quantity, 3);
        assert_eq!(h.buy_price, 412.5);
    }

    #[test]
    fn identical_inputs_get_distinct_ids() {
        let a = Holding::new("AAPL", 10, 150.0);
        let b = Holding::new("AAPL", 10, 150.0);
        assert_ne!(a.id, b.id);
    }
}

mod currency {
    use super::*;

    #[test]
    fn toggle_flips_between_usd_and_inr() {
        assert_eq!(DisplayCurrency::Usd.toggled(), DisplayCurrency::Inr);
        assert_eq!(DisplayCurrency::Inr.toggled(), DisplayCurrency::Usd);
    }

    #[test]
    fn toggle_twice_is_identity() {
        for c in [DisplayCurrency::Usd, DisplayCurrency::Inr] {
            assert_eq!(c.toggled().toggled(), c);
        }
    }

    #[test]
    fn codes_are_iso_4217() {
        assert_eq!(DisplayCurrency::Usd.code(), "USD");
        assert_eq!(DisplayCurrency::Inr.code(), "INR");
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(DisplayCurrency::Inr.to_string(), "INR");
    }
}

mod portfolio {
    use super::*;

    #[test]
    fn default_is_empty() {
        let p = Portfolio::default();
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
    }

    #[test]
    fn default_display_currency_is_inr() {
        assert_eq!(Settings::default().display_currency, DisplayCurrency::Inr);
        assert_eq!(
            Portfolio::default().settings.display_currency,
            DisplayCurrency::Inr
        );
    }

    #[test]
    fn holdings_keep_insertion_order() {
        let mut p = Portfolio::default();
        p.holdings.push(Holding::new("AAPL", 1, 1.0));
        p.holdings.push(Holding::new("MSFT", 2, 2.0));
        p.holdings.push(Holding::new("AAPL", 3, 3.0));
        let symbols: Vec<&str> = p.holdings.iter().map(|h| h.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT", "AAPL"]);
    }
}
