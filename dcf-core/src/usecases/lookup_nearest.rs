use super::{prelude::*, TieBreak};

/// The outcome of a successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestLookup {
    pub address: GeocodedAddress,
    /// `None` if the dataset is empty.
    pub nearest: Option<MatchResult>,
}

/// Resolve `address` and find the closest location of the dataset.
///
/// Geocoding failures are passed through without retrying.
pub async fn lookup_nearest<G>(
    geo_gw: &G,
    address: &str,
    dataset: &[NamedLocation],
    tie_break: TieBreak,
) -> Result<NearestLookup>
where
    G: GeoCodingGateway,
{
    let address = address.trim();
    if address.is_empty() {
        return Err(Error::EmptyAddress);
    }
    log::debug!("Resolving address '{address}'");
    let geocoded = geo_gw.resolve_address(address).await.map_err(|err| {
        log::warn!("Failed to resolve address '{address}': {err}");
        err
    })?;
    log::debug!(
        "Resolved address '{address}' as '{}' at {}",
        geocoded.display_name,
        geocoded.pos
    );
    let nearest = super::find_nearest_with_tie_break(geocoded.pos, dataset, tie_break);
    if nearest.is_none() {
        log::info!("No locations available to compare with");
    }
    Ok(NearestLookup {
        address: geocoded,
        nearest,
    })
}
