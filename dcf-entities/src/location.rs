use crate::geo::*;

/// A named place with a fixed position, e.g. a data center cluster.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct NamedLocation {
    pub name     : String,
    pub operator : String,
    pub city     : String,
    pub pos      : MapPoint,
}
