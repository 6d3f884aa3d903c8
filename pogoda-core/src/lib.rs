//! Core library for the `pogoda` weather viewer.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather fetch client and its trait seam
//! - Response decoding into the shared weather record
//! - The icon-code → emoji mapper
//! - The view-state session driving one weather screen
//!
//! It is used by `pogoda-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod icon;
pub mod model;
pub mod session;

pub use client::{OpenWeatherClient, WeatherFetcher};
pub use config::Config;
pub use error::{DecodeError, FetchError, WeatherError};
pub use model::{Condition, WeatherQuery, WeatherRecord};
pub use session::{Session, ViewState, fetch_record};
