//! Background palette: maps weather conditions and local time of day to
//! the colors behind the rendered dashboard.

use std::fmt;

use crate::model::WeatherSnapshot;

/// 24-bit color, displayed as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend toward `other`; `t` is clamped to [0, 1].
    pub fn blend(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
        Rgb::new(lerp(self.r, other.r), lerp(self.g, other.g), lerp(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// Weather colors.
pub const GOLD: Rgb = Rgb::new(0xFF, 0xD7, 0x00);
pub const LIGHT_GRAY: Rgb = Rgb::new(0xD3, 0xD3, 0xD3);
pub const STEEL_BLUE: Rgb = Rgb::new(0x46, 0x82, 0xB4);
pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
pub const SLATE_GRAY: Rgb = Rgb::new(0x77, 0x88, 0x99);
pub const LIGHT_STEEL_BLUE: Rgb = Rgb::new(0xB0, 0xC4, 0xDE);
pub const SKY_BLUE: Rgb = Rgb::new(0x87, 0xCE, 0xEB);

/// Shown before the first successful search.
pub const LIGHT_SKY_BLUE: Rgb = Rgb::new(0x87, 0xCE, 0xFA);

// Time-of-day colors.
pub const NIGHT: Rgb = Rgb::new(0x2C, 0x3E, 0x50);
pub const DAWN: Rgb = Rgb::new(0xF3, 0x9C, 0x12);
pub const MORNING: Rgb = Rgb::new(0xF1, 0xC4, 0x0F);
pub const NOON: Rgb = Rgb::new(0x34, 0x98, 0xDB);
pub const AFTERNOON: Rgb = Rgb::new(0xE6, 0x7E, 0x22);
pub const EVENING: Rgb = Rgb::new(0x8E, 0x44, 0xAD);

/// Background behind the dashboard: flat before the first result, a
/// diagonal two-stop gradient (time color, then weather color) once a
/// snapshot is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Flat(Rgb),
    Gradient(Rgb, Rgb),
}

impl Background {
    /// Gradient stops; a flat background repeats its single color.
    pub fn stops(&self) -> (Rgb, Rgb) {
        match *self {
            Background::Flat(color) => (color, color),
            Background::Gradient(from, to) => (from, to),
        }
    }
}

/// Map a free-text condition label to its color. Matching is
/// case-insensitive on the trimmed label; unknown labels get sky blue.
pub fn weather_color(label: &str) -> Rgb {
    match label.trim().to_lowercase().as_str() {
        "sunny" | "clear" => GOLD,
        "partly cloudy" | "cloudy" => LIGHT_GRAY,
        "rain" | "light rain" | "moderate rain" => STEEL_BLUE,
        "snow" => WHITE,
        "thunderstorm" => SLATE_GRAY,
        "fog" | "mist" => LIGHT_STEEL_BLUE,
        _ => SKY_BLUE,
    }
}

/// Map an hour of day to its base color. Six three-hour bands cover
/// 06:00–21:00; everything else is night.
pub fn time_color(hour: u32) -> Rgb {
    match hour {
        0..=5 => NIGHT,
        6..=8 => DAWN,
        9..=11 => MORNING,
        12..=14 => NOON,
        15..=17 => AFTERNOON,
        18..=20 => EVENING,
        _ => NIGHT,
    }
}

/// Derive the background for the current view state. An unparseable
/// `localtime` gets the night color for its time stop.
pub fn background_for(snapshot: Option<&WeatherSnapshot>) -> Background {
    match snapshot {
        None => Background::Flat(LIGHT_SKY_BLUE),
        Some(snapshot) => {
            let time = snapshot.location.local_hour().map_or(NIGHT, time_color);
            let weather = weather_color(&snapshot.current.condition.text);
            Background::Gradient(time, weather)
        }
    }
}
