//! OpenCage forward geocoding, reduced to what the weather command needs:
//! settlement-level results with their administrative components and
//! coordinates.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    components: Components,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Components {
    #[serde(rename = "_category")]
    category: Option<String>,
    #[serde(rename = "_type")]
    kind: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state: Option<String>,
    state_code: Option<String>,
    state_district: Option<String>,
    country: Option<String>,
    country_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

/// A geocoded settlement.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub country: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

fn is_settlement(result: &GeocodeResult) -> bool {
    result.components.category.as_deref() == Some("place")
        && matches!(
            result.components.kind.as_deref(),
            Some("city") | Some("town") | Some("village")
        )
}

/// Resolves a free-form location query to a settlement, or `None` when the
/// geocoder has no settlement-level match.
pub async fn resolve_place(
    client: &reqwest::Client,
    api_key: &str,
    query: &str,
) -> Result<Option<ResolvedPlace>, reqwest::Error> {
    let response = client
        .get("https://api.opencagedata.com/geocode/v1/json")
        .query(&[("q", query), ("key", api_key), ("limit", "5")])
        .send()
        .await?
        .error_for_status()?;
    let body: GeocodeResponse = response.json().await?;

    Ok(body.results.into_iter().find(is_settlement).map(|result| {
        let c = result.components;
        ResolvedPlace {
            city: c.city.or(c.town).or(c.village),
            state_province: c.state.or(c.state_code).or(c.state_district),
            country: c.country.or(c.country_code),
            lat: result.geometry.lat,
            lon: result.geometry.lng,
        }
    }))
}
