use serde::Deserialize;

use crate::error::DecodeError;
use crate::model::{Condition, WeatherRecord};

// Mirror structs for the upstream current-weather JSON. Unknown fields
// are ignored; missing or mistyped required fields fail the decode.

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

/// Parse a raw response body into a [`WeatherRecord`].
///
/// No unit conversion happens here; metric units are requested at fetch
/// time. A humidity outside 0..=100 is treated as a schema mismatch.
pub fn decode(raw_body: &str) -> Result<WeatherRecord, DecodeError> {
    let parsed: OwCurrentResponse = serde_json::from_str(raw_body)?;

    if parsed.main.humidity > 100 {
        return Err(DecodeError::SchemaMismatch(format!(
            "humidity {}% outside 0..=100",
            parsed.main.humidity
        )));
    }

    let conditions = parsed
        .weather
        .into_iter()
        .map(|w| Condition { description: w.description, icon_code: w.icon })
        .collect();

    Ok(WeatherRecord {
        location_name: parsed.name,
        temperature_c: parsed.main.temp,
        feels_like_c: parsed.main.feels_like,
        humidity_pct: parsed.main.humidity,
        conditions,
    })
}
