pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::named_location_builder::*;

pub mod named_location_builder {

    use super::*;
    use crate::{geo::*, location::*};

    #[derive(Debug)]
    pub struct NamedLocationBuild {
        location: NamedLocation,
    }

    impl NamedLocationBuild {
        pub fn name(mut self, name: &str) -> Self {
            self.location.name = name.into();
            self
        }
        pub fn operator(mut self, operator: &str) -> Self {
            self.location.operator = operator.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.location.city = city.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.location.pos = pos;
            self
        }
        pub fn lat_lng_deg(self, lat: f64, lng: f64) -> Self {
            self.pos(MapPoint::from_lat_lng_deg(lat, lng))
        }
        pub fn finish(self) -> NamedLocation {
            self.location
        }
    }

    impl Builder for NamedLocation {
        type Build = NamedLocationBuild;
        fn build() -> NamedLocationBuild {
            NamedLocationBuild {
                location: NamedLocation {
                    name: "".into(),
                    operator: "".into(),
                    city: "".into(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                },
            }
        }
    }
}
