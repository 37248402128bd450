//! OpenWeatherMap current-conditions lookup. Always queried in metric; unit
//! conversion happens in the weather command.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: MainBlock,
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub temp_celsius: f64,
    pub description: String,
}

/// Fetches the current weather at a coordinate. `None` means the API answered
/// but had nothing useful (unknown location, quota, …); hard transport errors
/// surface as `Err`.
pub async fn current_weather(
    client: &reqwest::Client,
    api_key: &str,
    lat: f64,
    lon: f64,
) -> Result<Option<CurrentWeather>, reqwest::Error> {
    let response = client
        .get("https://api.openweathermap.org/data/2.5/weather")
        .query(&[
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("appid", api_key.to_string()),
            ("units", "metric".to_string()),
        ])
        .send()
        .await?;
    if !response.status().is_success() {
        return Ok(None);
    }
    let body: WeatherResponse = response.json().await?;
    Ok(Some(CurrentWeather {
        temp_celsius: body.main.temp,
        description: body
            .weather
            .first()
            .map(|c| c.description.clone())
            .unwrap_or_default(),
    }))
}
