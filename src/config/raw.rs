use duration_str::deserialize_option_duration;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("dcfinder.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
    pub resolver: Option<Resolver>,
    pub data_centers: Option<Vec<DataCenter>>,
    pub presentation: Option<Presentation>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

impl Config {
    /// Enable the OpenCage gateway with the given API key.
    pub fn set_opencage_api_key(&mut self, api_key: String) {
        let geocoding = self.geocoding.get_or_insert_with(Geocoding::default);
        geocoding.gateway = Some(GeocodingGateway::Opencage);
        let gateway = self.gateway.get_or_insert_with(Gateway::default);
        let opencage = gateway.opencage.get_or_insert_with(OpenCage::default);
        opencage.api_key = Some(api_key);
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub request_timeout: Option<Duration>,
    pub proximity: Option<Position>,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default()
            .geocoding
            .expect("Geocoding configuration")
    }
}

impl Geocoding {
    /// Take unset fields from the default configuration.
    pub fn or_defaults(self) -> Self {
        let Self {
            gateway,
            request_timeout,
            proximity,
        } = self;
        let default = Self::default();
        Self {
            gateway: gateway.or(default.gateway),
            request_timeout: request_timeout.or(default.request_timeout),
            proximity: proximity.or(default.proximity),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Opencage,
}

#[derive(Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub opencage: Option<OpenCage>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OpenCage {
    pub api_key: Option<String>,
    pub api_base_url: Option<String>,
    pub country_code: Option<String>,
}

impl OpenCage {
    /// Take unset fields from the default configuration.
    pub fn or_defaults(self) -> Self {
        let Self {
            api_key,
            api_base_url,
            country_code,
        } = self;
        let default = Gateway::default().opencage.unwrap_or_default();
        Self {
            api_key: api_key.or(default.api_key),
            api_base_url: api_base_url.or(default.api_base_url),
            country_code: country_code.or(default.country_code),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Resolver {
    pub tie_break: TieBreak,
}

impl Default for Resolver {
    fn default() -> Self {
        Config::default().resolver.expect("Resolver configuration")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    SequenceOrder,
    Name,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DataCenter {
    pub name: String,
    pub operator: String,
    pub city: String,
    pub lat: f64,
    #[serde(alias = "lon")]
    pub lng: f64,
}

pub fn default_data_centers() -> Vec<DataCenter> {
    Config::default()
        .data_centers
        .expect("Data center configuration")
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Presentation {
    pub explanations: Vec<String>,
}

impl Default for Presentation {
    fn default() -> Self {
        Config::default()
            .presentation
            .expect("Presentation configuration")
    }
}
