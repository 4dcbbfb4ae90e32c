//! Prints the forecast for a city.
//!
//! ```text
//! RUST_LOG=info cargo run --example forecast -- Paris arome-1h
//! cargo run --example forecast -- 75001 gfs --json
//! ```

use meteociel::{ForecastVariant, Meteociel, MeteocielError};
use std::env;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    let Some(city) = positional.first() else {
        eprintln!("usage: forecast <city or zip> [variant] [--json]");
        let names: Vec<_> = ForecastVariant::ALL.iter().map(|v| v.short_name()).collect();
        eprintln!("variants: {}", names.join(", "));
        return ExitCode::FAILURE;
    };
    let variant = match positional.get(1).map(|v| v.parse::<ForecastVariant>()) {
        None => ForecastVariant::Gfs,
        Some(Ok(variant)) => variant,
        Some(Err(e)) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(city, variant, json).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(city: &str, variant: ForecastVariant, json: bool) -> Result<(), MeteocielError> {
    let client = Meteociel::new()?;
    let station = client.station_for_city(city).await?;
    let report = client
        .forecast_report()
        .station(&station)
        .variant(variant)
        .call()
        .await?;

    if json {
        match serde_json::to_string_pretty(&report.records) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("could not serialize records: {e}"),
        }
        return Ok(());
    }

    println!("{variant} forecast for {station}");
    for r in &report.records {
        println!(
            "{}  {:>4} °C  {:>3}°  {:>3}/{:>3} km/h  {:>5.1} mm  {:>3} %  {:>4} hPa  {}",
            r.time.format("%a %d %H:%M"),
            r.temperature_c,
            r.wind_direction_deg,
            r.wind_speed,
            r.wind_gust,
            r.rainfall_mm,
            r.humidity_pct,
            r.pressure_hpa,
            r.weather.name()
        );
    }
    for issue in &report.issues {
        eprintln!("warning: {issue}");
    }
    Ok(())
}
