use thiserror::Error;

/// User-facing message for an unrecognized city.
pub const CITY_NOT_FOUND: &str = "Город не найден";

/// Prefix for every other failure message shown to the user.
pub const ERROR_PREFIX: &str = "Ошибка";

/// Failure of the outbound HTTP round trip.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Any non-success upstream status. The upstream reports unknown
    /// cities this way, and we deliberately do not distinguish a 404
    /// from a 500.
    #[error("{CITY_NOT_FOUND}")]
    NotFound,

    /// The request itself failed: DNS, timeout, connection reset,
    /// malformed URL.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Failure to turn a raw response body into a [`WeatherRecord`].
///
/// [`WeatherRecord`]: crate::model::WeatherRecord
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The JSON structure does not match the expected record shape,
    /// or a decoded value violates a record invariant.
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::SchemaMismatch(err.to_string())
    }
}

/// Either half of the fetch-then-decode pipeline.
///
/// Nothing here is fatal: every failure collapses into a display
/// string and the user recovers by resubmitting.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl WeatherError {
    /// The single message shown in the failure panel.
    pub fn user_message(&self) -> String {
        match self {
            WeatherError::Fetch(FetchError::NotFound) => CITY_NOT_FOUND.to_string(),
            WeatherError::Fetch(FetchError::Transport(err)) => format!("{ERROR_PREFIX}: {err}"),
            WeatherError::Decode(err) => format!("{ERROR_PREFIX}: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_exact_message() {
        let err = WeatherError::from(FetchError::NotFound);
        assert_eq!(err.user_message(), "Город не найден");
    }

    #[test]
    fn decode_failure_carries_details() {
        let err = WeatherError::from(DecodeError::SchemaMismatch("missing field `main`".into()));
        assert_eq!(err.user_message(), "Ошибка: schema mismatch: missing field `main`");
    }
}
