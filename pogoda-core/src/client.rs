use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

use crate::error::FetchError;
use crate::model::WeatherQuery;

/// Production endpoint for current weather.
pub const OPENWEATHER_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Seam between the view-state session and the network. The session
/// only ever sees raw body text or a [`FetchError`]; decoding happens
/// in a separate step.
#[async_trait]
pub trait WeatherFetcher: Send + Sync + Debug {
    async fn fetch(&self, query: &WeatherQuery) -> Result<String, FetchError>;
}

/// OpenWeather current-weather client.
///
/// Holds one shared `reqwest::Client` for its whole lifetime so
/// repeated submissions reuse connections instead of building a fresh
/// transport per request.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    lang: String,
    endpoint: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String, lang: String) -> Self {
        Self::with_endpoint(api_key, lang, OPENWEATHER_ENDPOINT.to_string())
    }

    /// Same client against a caller-supplied endpoint; tests point this
    /// at a local stub server.
    pub fn with_endpoint(api_key: String, lang: String, endpoint: String) -> Self {
        Self {
            api_key,
            lang,
            endpoint,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherFetcher for OpenWeatherClient {
    async fn fetch(&self, query: &WeatherQuery) -> Result<String, FetchError> {
        log::debug!("requesting current weather for {:?}", query.city());

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", query.city()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", self.lang.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            // Uniform mapping: a 500 reads the same as a 404 to the user.
            log::debug!("upstream answered {status} for {:?}", query.city());
            return Err(FetchError::NotFound);
        }

        Ok(res.text().await?)
    }
}
