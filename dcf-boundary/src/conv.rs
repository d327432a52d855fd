use super::*;
use dcf_core::{entities as e, usecases::NearestLookup};

impl From<e::MatchResult> for NearestLocation {
    fn from(from: e::MatchResult) -> Self {
        let e::MatchResult {
            location,
            distance_km,
            distance_miles,
        } = from;
        let e::NamedLocation {
            name,
            operator,
            city,
            pos,
        } = location;
        let (lat, lng) = pos.to_lat_lng_deg();
        Self {
            name,
            operator,
            city,
            lat,
            lng,
            distance_km,
            distance_miles,
        }
    }
}

impl From<e::NamedLocation> for Location {
    fn from(from: e::NamedLocation) -> Self {
        let e::NamedLocation {
            name,
            operator,
            city,
            pos,
        } = from;
        let (lat, lng) = pos.to_lat_lng_deg();
        Self {
            name,
            operator,
            city,
            lat,
            lng,
        }
    }
}

impl From<NearestLookup> for Lookup {
    fn from(from: NearestLookup) -> Self {
        let NearestLookup { address, nearest } = from;
        let (lat, lng) = address.pos.to_lat_lng_deg();
        Self {
            interpreted_as: address.display_name,
            lat,
            lng,
            nearest: nearest.map(Into::into),
        }
    }
}
