pub mod forecast_record;
pub mod forecast_variant;
pub mod station;
pub mod weather_category;
