use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use super::traits::RateProvider;
use crate::errors::CoreError;

const BASE_URL: &str = "https://api.frankfurter.dev/v1";

/// Frankfurter API provider for fiat exchange rates.
///
/// - **Free**: No API key, no rate limits, open-source.
/// - **Source**: European Central Bank (ECB) data.
/// - **Coverage**: ~30+ currencies (USD, INR, EUR, GBP, JPY, etc.)
///
/// Only the `/latest` endpoint is needed here: the app converts USD-stored
/// holdings into the active display currency at render time.
pub struct FrankfurterRateProvider {
    client: Client,
}

impl FrankfurterRateProvider {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for FrankfurterRateProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── Frankfurter API response types ──────────────────────────────────

#[derive(Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

#[async_trait]
impl RateProvider for FrankfurterRateProvider {
    fn name(&self) -> &str {
        "Frankfurter"
    }

    async fn usd_rate(&self, target: &str) -> Result<f64, CoreError> {
        let target = target.to_uppercase();

        // Same currency → rate is 1.0
        if target == "USD" {
            return Ok(1.0);
        }

        let url = format!("{BASE_URL}/latest?base=USD&symbols={target}");

        let resp: RatesResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Frankfurter".into(),
                message: format!("Failed to parse response for USD/{target}: {e}"),
            })?;

        resp.rates
            .get(&target)
            .copied()
            .ok_or_else(|| CoreError::RateNotAvailable {
                base: "USD".into(),
                target,
            })
    }
}
