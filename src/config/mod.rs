use anyhow::{anyhow, Result};
use dcf_core::{
    entities::{MapPoint, NamedLocation},
    usecases::TieBreak,
};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "dcfinder.toml";

pub const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";

pub struct Config {
    pub geocoding: Geocoding,
    pub resolver: Resolver,
    /// The data centers to compare with (in this order).
    pub dataset: Vec<NamedLocation>,
    pub presentation: Presentation,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        override_opencage_api_key(&mut raw_config, env::var(ENV_NAME_OPENCAGE_API_KEY).ok());
        Self::try_from(raw_config)
    }
}

fn override_opencage_api_key(raw_config: &mut raw::Config, api_key: Option<String>) {
    match api_key {
        Some(api_key) if !api_key.trim().is_empty() => {
            log::debug!("Use OpenCage API key from {ENV_NAME_OPENCAGE_API_KEY}");
            raw_config.set_opencage_api_key(api_key);
        }
        Some(_) => {
            log::warn!("Ignoring empty {ENV_NAME_OPENCAGE_API_KEY}");
        }
        None => {}
    }
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    /// Regional bias for ambiguous addresses.
    pub proximity: Option<MapPoint>,
    pub request_timeout: Option<Duration>,
}

pub enum GeocodingGateway {
    OpenCage {
        api_key: String,
        api_base_url: Option<String>,
        country_code: Option<String>,
    },
}

pub struct Resolver {
    pub tie_break: TieBreak,
}

pub struct Presentation {
    pub explanations: Vec<String>,
}

impl From<raw::TieBreak> for TieBreak {
    fn from(from: raw::TieBreak) -> Self {
        match from {
            raw::TieBreak::SequenceOrder => Self::SequenceOrder,
            raw::TieBreak::Name => Self::Name,
        }
    }
}

impl TryFrom<raw::DataCenter> for NamedLocation {
    type Error = anyhow::Error;
    fn try_from(from: raw::DataCenter) -> Result<Self> {
        let raw::DataCenter {
            name,
            operator,
            city,
            lat,
            lng,
        } = from;
        let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
            .ok_or_else(|| anyhow!("Invalid position of data center '{name}': {lat},{lng}"))?;
        Ok(Self {
            name,
            operator,
            city,
            pos,
        })
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            geocoding,
            gateway,
            resolver,
            data_centers,
            presentation,
        } = from;

        let raw::Geocoding {
            gateway: geo_gateway_name,
            request_timeout,
            proximity,
        } = geocoding
            .map(raw::Geocoding::or_defaults)
            .unwrap_or_default();

        let geo_gateway = match geo_gateway_name {
            Some(gw_name) => {
                let toml_name = toml::Value::try_from(&gw_name)?;
                let gateway = gateway.unwrap_or_default();
                let gw = match gw_name {
                    raw::GeocodingGateway::Opencage => {
                        let raw::OpenCage {
                            api_key,
                            api_base_url,
                            country_code,
                        } = gateway
                            .opencage
                            .map(raw::OpenCage::or_defaults)
                            .ok_or_else(|| anyhow!("Missing {toml_name} gateway configuration"))?;
                        let api_key = api_key.filter(|key| !key.trim().is_empty()).ok_or_else(
                            || {
                                anyhow!(
                                    "Missing {toml_name} API key (set {ENV_NAME_OPENCAGE_API_KEY})"
                                )
                            },
                        )?;
                        GeocodingGateway::OpenCage {
                            api_key,
                            api_base_url,
                            country_code,
                        }
                    }
                };
                Some(gw)
            }
            None => None,
        };

        let proximity = proximity
            .map(|raw::Position { lat, lng }| {
                MapPoint::try_from_lat_lng_deg(lat, lng)
                    .ok_or_else(|| anyhow!("Invalid geocoding proximity: {lat},{lng}"))
            })
            .transpose()?;
        if geo_gateway.is_some() && proximity.is_none() {
            log::warn!("No geocoding proximity configured: results are not biased to a region");
        }

        let geocoding = Geocoding {
            gateway: geo_gateway,
            proximity,
            request_timeout,
        };

        let raw::Resolver { tie_break } = resolver.unwrap_or_default();
        let resolver = Resolver {
            tie_break: tie_break.into(),
        };

        let dataset = data_centers
            .unwrap_or_else(raw::default_data_centers)
            .into_iter()
            .map(NamedLocation::try_from)
            .collect::<Result<Vec<_>>>()?;
        if dataset.is_empty() {
            log::warn!("No data centers configured");
        }

        let raw::Presentation { explanations } = presentation.unwrap_or_default();
        let presentation = Presentation { explanations };

        Ok(Self {
            geocoding,
            resolver,
            dataset,
            presentation,
        })
    }
}
