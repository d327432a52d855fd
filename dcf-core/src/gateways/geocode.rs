use crate::entities::MapPoint;
use std::future::Future;
use thiserror::Error;

/// The first-ranked result of a forward geocoding request.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedAddress {
    pub pos: MapPoint,
    /// Normalized form of the address as returned by the service.
    pub display_name: String,
}

impl GeocodedAddress {
    /// Validate the raw coordinates and fall back to the requested
    /// address if the service did not provide a normalized form.
    pub fn try_new(
        address: &str,
        lat: f64,
        lng: f64,
        display_name: Option<String>,
    ) -> Result<Self, Error> {
        let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;
        let display_name = display_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| address.to_owned());
        Ok(Self { pos, display_name })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The service was unreachable or did not answer successfully.
    #[error("The geocoding service is not available: {0}")]
    Transport(String),
    #[error("No results found for that address")]
    NoResults,
    #[error("The geocoding service returned an invalid position")]
    InvalidPosition,
}

pub trait GeoCodingGateway {
    fn resolve_address(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<GeocodedAddress, Error>> + Send;
}
