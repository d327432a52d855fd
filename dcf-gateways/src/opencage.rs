use dcf_core::{
    entities::MapPoint,
    gateways::geocode::{Error, GeoCodingGateway, GeocodedAddress},
};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.opencagedata.com/geocode/v1/json";

/// Forward geocoding based on opencagedata.com.
#[derive(Debug, Clone)]
pub struct OpenCage {
    pub api_key: String,
    pub api_base_url: String,
    /// Restrict the results to a country (ISO 3166-1 alpha-2).
    pub country_code: Option<String>,
    /// Results close to this position are ranked higher.
    pub proximity: Option<MapPoint>,
    pub timeout: Option<Duration>,
    client: reqwest::Client,
}

impl OpenCage {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            country_code: None,
            proximity: None,
            timeout: None,
            client: reqwest::Client::new(),
        }
    }

    fn query_params(&self, address: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", address.to_owned()),
            ("key", self.api_key.clone()),
            ("limit", "1".to_owned()),
            ("no_annotations", "1".to_owned()),
        ];
        if let Some(country_code) = &self.country_code {
            params.push(("countrycode", country_code.clone()));
        }
        if let Some(pos) = self.proximity {
            params.push(("proximity", pos.to_string()));
        }
        params
    }

    async fn send(&self, address: &str) -> Result<Response, Error> {
        let mut request = self
            .client
            .get(&self.api_base_url)
            .query(&self.query_params(address));
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        let response = request
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            let reason = match response.json::<ErrorResponse>().await {
                Ok(ErrorResponse { status: reason }) => reason.to_string(),
                Err(_) => status.to_string(),
            };
            return Err(Error::Transport(reason));
        }
        response.json().await.map_err(transport_error)
    }
}

// The request URL contains the API key
fn transport_error(err: reqwest::Error) -> Error {
    Error::Transport(err.without_url().to_string())
}

#[derive(Debug, Deserialize)]
struct Response {
    #[serde(default)]
    results: Vec<ResponseResult>,
}

#[derive(Debug, Deserialize)]
struct ResponseResult {
    geometry: Geometry,
    formatted: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    status: ResponseStatus,
}

#[derive(Debug, Deserialize, thiserror::Error)]
#[error("{message} ({code})")]
struct ResponseStatus {
    code: u16,
    message: String,
}

fn first_result(address: &str, response: Response) -> Result<GeocodedAddress, Error> {
    let Some(ResponseResult {
        geometry: Geometry { lat, lng },
        formatted,
    }) = response.results.into_iter().next()
    else {
        return Err(Error::NoResults);
    };
    GeocodedAddress::try_new(address, lat, lng, formatted)
}

impl GeoCodingGateway for OpenCage {
    async fn resolve_address(&self, address: &str) -> Result<GeocodedAddress, Error> {
        let response = self.send(address).await?;
        log::debug!(
            "OpenCage returned {} result(s) for '{address}'",
            response.results.len()
        );
        first_result(address, response)
    }
}
