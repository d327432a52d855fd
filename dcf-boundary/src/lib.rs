use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NearestLocation {
    pub name           : String,
    pub operator       : String,
    pub city           : String,
    pub lat            : f64,
    pub lng            : f64,
    pub distance_km    : f64,
    pub distance_miles : f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Location {
    pub name: String,
    pub operator: String,
    pub city: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Lookup {
    /// The normalized address as reported by the geocoding service.
    pub interpreted_as: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest: Option<NearestLocation>,
}
