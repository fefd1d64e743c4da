//! Core library for the `skycast` weather dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com client behind a provider trait
//! - The search-session state machine and shared domain model
//! - The background palette (condition/time-of-day color mapping)
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod model;
pub mod provider;
pub mod session;
pub mod theme;

pub use config::{API_KEY_ENV, Config};
pub use model::WeatherSnapshot;
pub use provider::{ProviderError, WeatherProvider, weatherapi::WeatherApiProvider};
pub use session::{CITY_NOT_FOUND, SearchState, Session};
pub use theme::{Background, Rgb};
