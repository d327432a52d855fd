use itertools::Itertools;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Latitude in degrees, always within [-90, 90].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        Self(deg)
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        // NaN fails both comparisons
        if deg >= Self::DEG_MIN && deg <= Self::DEG_MAX {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// Longitude in degrees, always within [-180, 180].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        Self(deg)
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if deg >= Self::DEG_MIN && deg <= Self::DEG_MAX {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographical position on the surface of the earth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }

    fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, ParseError> {
        let lat_deg = lat_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| ParseError::Latitude(lat_deg_str.to_owned()))?;
        let lng_deg = lng_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| ParseError::Longitude(lng_deg_str.to_owned()))?;
        let lat = LatCoord::try_from_deg(lat_deg).ok_or(ParseError::LatitudeRange(lat_deg))?;
        let lng = LngCoord::try_from_deg(lng_deg).ok_or(ParseError::LongitudeRange(lng_deg))?;
        Ok(MapPoint::new(lat, lng))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Expected '<lat>,<lng>' but got '{0}'")]
    Format(String),
    #[error("Invalid latitude '{0}'")]
    Latitude(String),
    #[error("Invalid longitude '{0}'")]
    Longitude(String),
    #[error("Latitude {0} is out of range [-90, 90]")]
    LatitudeRange(f64),
    #[error("Longitude {0} is out of range [-180, 180]")]
    LongitudeRange(f64),
}

impl FromStr for MapPoint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((lat_deg_str, lng_deg_str)) = s.split(',').collect_tuple() {
            MapPoint::parse_lat_lng_deg(lat_deg_str, lng_deg_str)
        } else {
            Err(ParseError::Format(s.to_owned()))
        }
    }
}

pub const KILOMETERS_TO_MILES: f64 = 0.621371;

pub fn kilometers_to_miles(km: f64) -> f64 {
    km * KILOMETERS_TO_MILES
}

/// A distance on the surface of the earth in kilometers.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_km(km: f64) -> Self {
        Self(km)
    }

    pub const fn to_km(self) -> f64 {
        self.0
    }

    pub fn to_miles(self) -> f64 {
        kilometers_to_miles(self.0)
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_km(6371.0);

impl MapPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth using the haversine formula.
    /// Reference: https://en.wikipedia.org/wiki/Haversine_formula
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat_sin = ((lat2_rad - lat1_rad) / 2.0).sin();
        let dlng_sin = ((lng2_rad - lng1_rad) / 2.0).sin();

        let a = dlat_sin * dlat_sin + lat1_rad.cos() * lat2_rad.cos() * dlng_sin * dlng_sin;
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_km(MEAN_EARTH_RADIUS.to_km() * c)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::Rng;

    #[test]
    fn latitude() {
        assert_eq!(Some(LatCoord::from_deg(-90)), LatCoord::try_from_deg(-90));
        assert_eq!(Some(LatCoord::from_deg(90)), LatCoord::try_from_deg(90));
        assert_eq!(None, LatCoord::try_from_deg(-90.000001));
        assert_eq!(None, LatCoord::try_from_deg(90.000001));
        assert_eq!(None, LatCoord::try_from_deg(f64::NAN));
    }

    #[test]
    fn longitude() {
        assert_eq!(Some(LngCoord::from_deg(-180)), LngCoord::try_from_deg(-180));
        assert_eq!(Some(LngCoord::from_deg(180)), LngCoord::try_from_deg(180));
        assert_eq!(None, LngCoord::try_from_deg(-180.000001));
        assert_eq!(None, LngCoord::try_from_deg(180.000001));
        assert_eq!(None, LngCoord::try_from_deg(f64::INFINITY));
    }

    #[test]
    fn parse_map_point() {
        let pos: MapPoint = "38.95,-77.45".parse().unwrap();
        assert_eq!(pos, MapPoint::from_lat_lng_deg(38.95, -77.45));
        let pos: MapPoint = " 38.95 , -77.45 ".parse().unwrap();
        assert_eq!((38.95, -77.45), pos.to_lat_lng_deg());
        assert_eq!("38.95,-77.45", pos.to_string());

        assert_eq!(
            Err(ParseError::Format("38.95".into())),
            "38.95".parse::<MapPoint>()
        );
        assert_eq!(
            Err(ParseError::Format("1,2,3".into())),
            "1,2,3".parse::<MapPoint>()
        );
        assert_eq!(
            Err(ParseError::Latitude("north".into())),
            "north,-77.45".parse::<MapPoint>()
        );
        assert_eq!(
            Err(ParseError::Longitude("x".into())),
            "38.95,x".parse::<MapPoint>()
        );
        assert_eq!(
            Err(ParseError::LatitudeRange(91.0)),
            "91,0".parse::<MapPoint>()
        );
        assert_eq!(
            Err(ParseError::LongitudeRange(-181.0)),
            "0,-181".parse::<MapPoint>()
        );
    }

    #[test]
    fn try_from_out_of_range() {
        assert!(MapPoint::try_from_lat_lng_deg(38.95, -77.45).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(90.5, 0.0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, 180.5).is_none());
    }

    #[test]
    fn no_distance() {
        let p1 = MapPoint::from_lat_lng_deg(0.0, 0.0);
        assert_eq!(MapPoint::distance(p1, p1).to_km(), 0.0);

        let p2 = MapPoint::from_lat_lng_deg(-25.0, 55.0);
        assert_eq!(MapPoint::distance(p2, p2).to_km(), 0.0);

        let p3 = MapPoint::from_lat_lng_deg(38.9, -77.4);
        assert_eq!(MapPoint::distance(p3, p3).to_km(), 0.0);

        let p1 = MapPoint::from_lat_lng_deg(-15.0, -180.0);
        let p2 = MapPoint::from_lat_lng_deg(-15.0, 180.0);
        assert!(MapPoint::distance(p1, p2).to_km() < 0.000001);
    }

    #[test]
    fn one_degree_along_the_equator() {
        // 6371 * PI / 180
        let expected_km = 111.194_926_6;
        let origin = MapPoint::from_lat_lng_deg(0.0, 0.0);
        let east = MapPoint::from_lat_lng_deg(0.0, 1.0);
        let north = MapPoint::from_lat_lng_deg(1.0, 0.0);
        assert!((MapPoint::distance(origin, east).to_km() - expected_km).abs() < 0.01);
        assert!((MapPoint::distance(origin, north).to_km() - expected_km).abs() < 0.01);
    }

    #[test]
    fn across_the_antimeridian() {
        let west = MapPoint::from_lat_lng_deg(0.0, 179.5);
        let east = MapPoint::from_lat_lng_deg(0.0, -179.5);
        let d = MapPoint::distance(west, east).to_km();
        assert!(d > 111.0);
        assert!(d < 111.4);
    }

    #[test]
    fn real_distance() {
        let stuttgart = MapPoint::from_lat_lng_deg(48.7755, 9.1827);
        let mannheim = MapPoint::from_lat_lng_deg(49.4836, 8.4630);
        assert!(MapPoint::distance(stuttgart, mannheim) > Distance::from_km(94.0));
        assert!(MapPoint::distance(stuttgart, mannheim) < Distance::from_km(95.0));

        let new_york = MapPoint::from_lat_lng_deg(40.714268, -74.005974);
        let sidney = MapPoint::from_lat_lng_deg(-33.867138, 151.207108);
        assert!(MapPoint::distance(new_york, sidney) > Distance::from_km(15_980.0));
        assert!(MapPoint::distance(new_york, sidney) < Distance::from_km(15_995.0));
    }

    #[test]
    fn symetric_distance() {
        let a = MapPoint::from_lat_lng_deg(80.0, 0.0);
        let b = MapPoint::from_lat_lng_deg(90.0, 20.0);
        assert_eq!(MapPoint::distance(a, b), MapPoint::distance(b, a));

        let mut rng = rand::thread_rng();
        for _ in 0..1_000 {
            let a = MapPoint::from_lat_lng_deg(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0));
            let b = MapPoint::from_lat_lng_deg(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0));
            let d = MapPoint::distance(a, b);
            assert!(d.is_valid());
            assert_eq!(d, MapPoint::distance(b, a));
            assert_eq!(0.0, MapPoint::distance(a, a).to_km());
        }
    }

    #[test]
    fn convert_kilometers_to_miles() {
        assert_eq!(0.0, kilometers_to_miles(0.0));
        assert!((kilometers_to_miles(1.0) - 0.621371).abs() < f64::EPSILON);
        assert!((kilometers_to_miles(100.0) - 62.1371).abs() < 1e-9);
        let mut prev = kilometers_to_miles(0.0);
        for km in [0.001, 0.5, 1.0, 10.0, 1_000.0, 20_000.0] {
            let miles = kilometers_to_miles(km);
            assert!(miles > prev);
            prev = miles;
        }
        assert_eq!(
            kilometers_to_miles(42.0),
            Distance::from_km(42.0).to_miles()
        );
    }
}
