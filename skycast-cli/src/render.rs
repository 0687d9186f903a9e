//! Text rendering for the three screens. Every fallback path prints a
//! usable empty state; nothing here returns an error.

use chrono::{DateTime, Local};
use skycast_core::{
    AssetKey, ForecastController, ScreenController, WeatherSnapshot,
    format::{format_local_time, kelvin_to_celsius},
    screen::nav,
};

/// Home screen: headline conditions plus the resolved background asset.
pub fn current_screen(controller: &ScreenController) {
    let Some(snapshot) = controller.snapshot() else {
        println!("No weather data available for \"{}\".", controller.query());
        println!("[background: {}]", controller.background());
        return;
    };

    println!("{}", snapshot.location_label());
    println!(
        "{}°C  {}",
        kelvin_to_celsius(snapshot.main.temp),
        snapshot.primary_condition()
    );
    println!("Humidity:   {}%", snapshot.main.humidity);
    println!("Wind speed: {} m/s", snapshot.wind.speed);
    println!(
        "Min / max:  {}°C / {}°C",
        kelvin_to_celsius(snapshot.main.temp_min),
        kelvin_to_celsius(snapshot.main.temp_max)
    );
    println!("[background: {}]", controller.background());
}

/// Details screen. Takes the raw navigation payload so that entering it
/// directly (no payload) renders the same "no data" state the app shows.
pub fn details_screen(payload: Option<&str>) {
    let snapshot = match nav::decode(payload) {
        Ok(snapshot) => snapshot,
        Err(_) => {
            println!("No weather data available.");
            return;
        }
    };

    print_details(&snapshot);
}

fn print_details(snapshot: &WeatherSnapshot) {
    let background = AssetKey::from_condition(snapshot.primary_condition());

    println!("{}", snapshot.location_label());
    println!("Observed at: {}", format_local_time(snapshot.dt));
    if let Some(descriptor) = snapshot.weather.first() {
        println!("Conditions:  {}", descriptor.description);
    }
    println!("Temperature: {}°C", kelvin_to_celsius(snapshot.main.temp));
    println!("Humidity:    {}%", snapshot.main.humidity);
    println!("Pressure:    {} hPa", snapshot.main.pressure);
    println!(
        "Wind:        {} m/s ({}°)",
        snapshot.wind.speed, snapshot.wind.deg
    );
    if let Some(sea_level) = snapshot.main.sea_level {
        println!("Sea level:   {sea_level} hPa");
    }
    println!("Sunrise:     {}", format_local_time(snapshot.sys.sunrise));
    println!("Sunset:      {}", format_local_time(snapshot.sys.sunset));
    println!(
        "Location:    {:.2}, {:.2}",
        snapshot.coord.lat, snapshot.coord.lon
    );
    println!("[background: {background}]");
}

/// Forecast screen: walks the carousel cursor across all entries, printing
/// each slot with the background it would show.
pub fn forecast_screen(controller: &mut ForecastController) {
    let Some(series) = controller.series() else {
        println!(
            "No forecast data available for \"{}\".",
            controller.query()
        );
        println!("[background: {}]", controller.background());
        return;
    };

    if series.country.is_empty() {
        println!("Forecast for {}", series.name);
    } else {
        println!("Forecast for {}, {}", series.name, series.country);
    }

    loop {
        if let Some(entry) = controller.current_entry() {
            println!(
                "  {}  {:>4}°C  {:<12} [background: {}]",
                slot_label(entry.dt),
                kelvin_to_celsius(entry.main.temp),
                entry.primary_condition(),
                controller.background()
            );
        }

        let before = controller.cursor();
        controller.swipe_next();
        if controller.cursor() == before {
            break;
        }
    }
}

fn slot_label(epoch_seconds: i64) -> String {
    match DateTime::from_timestamp(epoch_seconds, 0) {
        Some(utc) => utc.with_timezone(&Local).format("%a %H:%M").to_string(),
        None => "--".to_string(),
    }
}
