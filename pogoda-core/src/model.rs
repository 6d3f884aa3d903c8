use serde::{Deserialize, Serialize};

/// A validated city-name query. Blank input never becomes a query,
/// so the fetch path only ever sees non-empty city names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
}

impl WeatherQuery {
    /// Returns `None` for empty or whitespace-only input.
    pub fn new(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self { city: trimmed.to_string() })
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// One weather descriptor from the upstream response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon_code: String,
}

/// Decoded current-weather observation. Replaced wholesale by the
/// next successful fetch, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub location_name: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    /// Always within 0..=100; enforced by the decoder.
    pub humidity_pct: u8,
    /// May be empty; only the first entry is ever displayed.
    pub conditions: Vec<Condition>,
}

impl WeatherRecord {
    /// First-or-none display semantics for the conditions list.
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.conditions.first()
    }
}
