//! Human-friendly output: the colored background banner plus the result
//! card, mirroring the fields of the dashboard page.

use console::{colors_enabled, style};

use skycast_core::model::WeatherSnapshot;
use skycast_core::session::{SearchState, Session};
use skycast_core::theme::Background;

const BANNER_WIDTH: usize = 48;

pub fn render(session: &Session) {
    println!();
    println!("{}", banner(&session.background(), BANNER_WIDTH));

    match session.state() {
        SearchState::Idle => {
            println!("{}", style("Search for a city to see current conditions.").dim());
        }
        SearchState::Error(message) => {
            println!("{}", style(message).red());
        }
        SearchState::Success(snapshot) => print_card(snapshot),
    }
}

/// One banner row. With colors enabled this is a run of background-colored
/// cells blended column by column between the two gradient stops; without
/// colors it degrades to the hex stops themselves.
fn banner(background: &Background, width: usize) -> String {
    if !colors_enabled() {
        return describe(background);
    }

    let (from, to) = background.stops();
    let mut row = String::new();
    for col in 0..width {
        let t = if width > 1 { col as f32 / (width - 1) as f32 } else { 0.0 };
        let cell = from.blend(to, t);
        row.push_str(&format!("\x1b[48;2;{};{};{}m ", cell.r, cell.g, cell.b));
    }
    row.push_str("\x1b[0m");
    row
}

fn describe(background: &Background) -> String {
    match background {
        Background::Flat(color) => format!("background: {color}"),
        Background::Gradient(from, to) => format!("background: {from} -> {to}"),
    }
}

fn print_card(snapshot: &WeatherSnapshot) {
    let location = &snapshot.location;
    let current = &snapshot.current;

    println!(
        "{}",
        style(format!("{}, {}", location.name, location.country)).bold()
    );

    let local_time = location
        .local_time()
        .map_or_else(|| location.localtime.clone(), |t| t.format("%H:%M").to_string());
    println!("Local time: {local_time}");

    println!("Temperature: {:.1}°C / {:.1}°F", current.temp_c, current.temp_f);
    println!("Humidity: {}%", current.humidity);
    println!("Wind: {:.1} km/h", current.wind_kph);
    println!("{}", style(&current.condition.text).bold());
    println!("Icon: {}", current.condition.icon_url());
}

#[cfg(test)]
mod tests {
    use skycast_core::theme::{Background, NIGHT, STEEL_BLUE};

    use super::describe;

    #[test]
    fn plain_description_lists_hex_stops() {
        assert_eq!(
            describe(&Background::Flat(STEEL_BLUE)),
            "background: #4682B4"
        );
        assert_eq!(
            describe(&Background::Gradient(NIGHT, STEEL_BLUE)),
            "background: #2C3E50 -> #4682B4"
        );
    }
}
