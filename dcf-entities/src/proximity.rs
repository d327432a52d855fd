use crate::{geo::*, location::*};

/// A [`NamedLocation`] annotated with its distance to a query position.
///
/// Both distances are computed once on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub location: NamedLocation,
    pub distance_km: f64,
    pub distance_miles: f64,
}

impl MatchResult {
    pub fn new(location: NamedLocation, distance: Distance) -> Self {
        debug_assert!(distance.is_valid());
        Self {
            location,
            distance_km: distance.to_km(),
            distance_miles: distance.to_miles(),
        }
    }

    pub fn from_query(query: MapPoint, location: NamedLocation) -> Self {
        let distance = MapPoint::distance(query, location.pos);
        Self::new(location, distance)
    }

    pub const fn distance(&self) -> Distance {
        Distance::from_km(self.distance_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;

    #[test]
    fn annotate_location_with_distance() {
        let location = NamedLocation::build()
            .name("Equator")
            .pos(MapPoint::from_lat_lng_deg(0.0, 1.0))
            .finish();
        let res = MatchResult::from_query(MapPoint::from_lat_lng_deg(0.0, 0.0), location.clone());
        assert_eq!(location, res.location);
        assert!((res.distance_km - 111.195).abs() < 0.01);
        assert_eq!(res.distance_miles, res.distance_km * KILOMETERS_TO_MILES);
        assert_eq!(res.distance(), Distance::from_km(res.distance_km));
    }
}
