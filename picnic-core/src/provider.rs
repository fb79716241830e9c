use crate::{
    Config, Forecast, UnitGroup, error::Result, provider::visualcrossing::VisualCrossingProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod visualcrossing;

/// Source of multi-day forecasts.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_forecast(&self, city: &str, unit_group: UnitGroup) -> Result<Forecast>;
}

/// Construct the configured provider.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn ForecastProvider>> {
    let provider = VisualCrossingProvider::from_config(config)?;
    Ok(Box::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_default_config() {
        let cfg = Config::default();
        assert!(provider_from_config(&cfg).is_ok());
    }
}
