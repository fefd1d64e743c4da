use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// The complete result of one successful weather query, deserialized
/// verbatim from the WeatherAPI.com `current.json` response. Held in
/// memory until the next search replaces or clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: Current,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    /// API-reported local time for the queried location,
    /// e.g. "2024-05-06 9:02". Hours may be unpadded.
    pub localtime: String,
}

impl Location {
    /// Parse `localtime` into a naive timestamp, if well-formed.
    pub fn local_time(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.localtime, "%Y-%m-%d %H:%M").ok()
    }

    /// Local hour of day (0–23), if `localtime` is well-formed.
    pub fn local_hour(&self) -> Option<u32> {
        self.local_time().map(|t| t.hour())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
    pub humidity: u8,
    pub wind_kph: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Free-text label, e.g. "Sunny" or "Patchy rain".
    pub text: String,
    /// Protocol-relative icon path as returned by the API,
    /// e.g. "//cdn.weatherapi.com/weather/64x64/day/113.png".
    pub icon: String,
}

impl Condition {
    pub fn icon_url(&self) -> String {
        format!("https:{}", self.icon)
    }
}
