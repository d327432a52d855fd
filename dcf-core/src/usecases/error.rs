use crate::gateways::geocode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The address is empty")]
    EmptyAddress,
    #[error(transparent)]
    Geocoding(#[from] geocode::Error),
}
