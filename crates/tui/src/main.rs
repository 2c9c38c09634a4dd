use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use portfolio_tracker_core::PortfolioTracker;

mod app;

use app::App;

#[derive(Parser, Debug)]
#[command(about = "Track a personal stock portfolio from the terminal")]
struct Args {
    /// Display currency at startup: "inr" or "usd"
    #[arg(long, default_value = "inr")]
    currency: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!(
                "{}=info,portfolio_tracker_core=info",
                env!("CARGO_CRATE_NAME")
            )
            .into()
        }))
        .with(fmt::layer())
        .init();

    let mut tracker = PortfolioTracker::with_default_providers()?;
    if args.currency.eq_ignore_ascii_case("usd") {
        // The tracker starts in INR; toggling also resolves the rate
        tracker.toggle_currency().await;
    } else {
        tracker.refresh_rate().await;
    }

    info!(
        currency = %tracker.display_currency(),
        rate = tracker.rate(),
        "tracker ready"
    );

    let mut app = App::new(tracker);
    let result = app.run().await;

    ratatui::restore();
    result
}
