use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::{
    config::Config,
    error::{PicnicError, Result},
    model::{Forecast, UnitGroup},
};

use super::ForecastProvider;

/// Visual Crossing timeline API client.
#[derive(Debug, Clone)]
pub struct VisualCrossingProvider {
    base_url: String,
    weather_data_path: String,
    api_key: Option<String>,
    http: Client,
}

impl VisualCrossingProvider {
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.provider.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| {
            PicnicError::TransportFailure(format!("Failed to build HTTP client: {e}"))
        })?;

        if config.api_key.is_none() {
            warn!("no Visual Crossing API key set; the provider will reject the request");
        }

        Ok(Self {
            base_url: config.provider.base_url.trim_end_matches('/').to_string(),
            weather_data_path: config.provider.weather_data_path.clone(),
            api_key: config.api_key.clone(),
            http,
        })
    }

    /// Timeline URL for `city`, without the query string.
    pub fn timeline_url(&self, city: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            self.weather_data_path,
            urlencoding::encode(&city.to_lowercase())
        )
    }
}

#[async_trait]
impl ForecastProvider for VisualCrossingProvider {
    async fn fetch_forecast(&self, city: &str, unit_group: UnitGroup) -> Result<Forecast> {
        let url = self.timeline_url(city);
        debug!(%url, %unit_group, "requesting forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("unitGroup", unit_group.as_str()),
                ("key", self.api_key.as_deref().unwrap_or_default()),
                ("contentType", "json"),
            ])
            .send()
            .await
            .map_err(|e| PicnicError::TransportFailure(format!("Failed to send request: {e}")))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            PicnicError::TransportFailure(format!("Failed to read response body: {e}"))
        })?;

        let forecast = decode_forecast(status, &body)?;
        debug!(days = forecast.days.len(), address = ?forecast.resolved_address, "forecast received");
        Ok(forecast)
    }
}

/// Map a raw provider response onto a [`Forecast`].
///
/// The body has to be JSON before the status is looked at, so a rejected
/// request surfaces the provider's own error payload together with the status.
pub fn decode_forecast(status: StatusCode, body: &str) -> Result<Forecast> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        PicnicError::MalformedResponse(format!(
            "Failed to parse weather response as JSON ({e}): {}",
            truncate_body(body)
        ))
    })?;

    if !status.is_success() {
        let payload = serde_json::json!({
            "message": value,
            "statusCode": status.as_u16(),
        });
        return Err(PicnicError::TransportFailure(payload.to_string()));
    }

    let forecast: Forecast = serde_json::from_value(value).map_err(|e| {
        PicnicError::MalformedResponse(format!("Unexpected weather response shape: {e}"))
    })?;

    if let Some(date) = forecast.duplicate_date() {
        return Err(PicnicError::MalformedResponse(format!(
            "Weather response lists {date} more than once"
        )));
    }

    Ok(forecast)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
