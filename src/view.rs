use dcf_core::{
    entities::{MatchResult, NamedLocation},
    gateways::geocode,
    usecases::{self, NearestLookup},
};
use rand::Rng;

pub const NO_DATA_MESSAGE: &str = "No data centers found in the current dataset.";

pub const LOOKUP_STATUS_MESSAGE: &str = "Looking up your closest data center...";

/// Choose one of the explanations.
///
/// `pick_index` receives the number of explanations and
/// returns the index of the chosen one.
pub fn pick_explanation<F>(explanations: &[String], pick_index: F) -> Option<&str>
where
    F: FnOnce(usize) -> usize,
{
    if explanations.is_empty() {
        return None;
    }
    let index = pick_index(explanations.len());
    debug_assert!(index < explanations.len());
    explanations.get(index).map(String::as_str)
}

pub fn random_index(len: usize) -> usize {
    rand::thread_rng().gen_range(0..len)
}

pub fn nearest_message(
    display_name: &str,
    nearest: &MatchResult,
    explanation: Option<&str>,
) -> String {
    let MatchResult {
        location,
        distance_miles,
        ..
    } = nearest;
    let mut msg = format!(
        "We interpreted your location as: {display_name}.\n\
         Your closest major data center cluster is:\n\
         {} in {}, approximately {distance_miles:.1} miles away.",
        location.name, location.city,
    );
    if let Some(explanation) = explanation {
        msg.push_str("\n\n");
        msg.push_str(explanation);
    }
    msg
}

pub fn lookup_message(lookup: &NearestLookup, explanation: Option<&str>) -> String {
    match &lookup.nearest {
        Some(nearest) => nearest_message(&lookup.address.display_name, nearest, explanation),
        None => NO_DATA_MESSAGE.to_string(),
    }
}

pub fn failure_message(err: &usecases::Error) -> &'static str {
    match err {
        usecases::Error::EmptyAddress => "Please enter an address, city, or ZIP code.",
        usecases::Error::Geocoding(
            geocode::Error::NoResults
            | geocode::Error::Transport(_)
            | geocode::Error::InvalidPosition,
        ) => {
            "There was a problem looking up that address. Please check the spelling and try again."
        }
    }
}

pub fn dataset_listing(dataset: &[NamedLocation]) -> String {
    if dataset.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }
    dataset
        .iter()
        .enumerate()
        .map(|(i, location)| {
            let (lat, lng) = location.pos.to_lat_lng_deg();
            format!(
                "{}. {} ({}, {}) at {lat},{lng}\n",
                i + 1,
                location.name,
                location.city,
                location.operator
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcf_core::{entities::MapPoint, gateways::geocode::GeocodedAddress};

    fn explanations() -> Vec<String> {
        vec!["first".into(), "second".into(), "third".into()]
    }

    fn herndon() -> NamedLocation {
        NamedLocation {
            name: "Fairfax / Herndon Data Center Area".into(),
            operator: "Multiple operators".into(),
            city: "Herndon, VA".into(),
            pos: MapPoint::from_lat_lng_deg(38.964, -77.3861),
        }
    }

    #[test]
    fn pick_explanation_with_injected_strategy() {
        let explanations = explanations();
        assert_eq!(Some("first"), pick_explanation(&explanations, |_| 0));
        assert_eq!(Some("third"), pick_explanation(&explanations, |len| len - 1));
        assert_eq!(None, pick_explanation(&[], |_| 0));
    }

    #[test]
    fn pick_random_explanation() {
        let explanations = explanations();
        for _ in 0..100 {
            assert!(pick_explanation(&explanations, random_index).is_some());
        }
    }

    #[test]
    fn render_nearest_location() {
        let query = MapPoint::from_lat_lng_deg(38.95, -77.45);
        let lookup = NearestLookup {
            address: GeocodedAddress {
                pos: query,
                display_name: "Sterling, VA 20164, United States of America".into(),
            },
            nearest: Some(MatchResult::from_query(query, herndon())),
        };
        let msg = lookup_message(&lookup, Some("second"));
        assert_eq!(
            "We interpreted your location as: Sterling, VA 20164, United States of America.\n\
             Your closest major data center cluster is:\n\
             Fairfax / Herndon Data Center Area in Herndon, VA, approximately 3.6 miles away.\n\
             \n\
             second",
            msg
        );
        assert!(!lookup_message(&lookup, None).contains("second"));
    }

    #[test]
    fn render_empty_dataset() {
        let lookup = NearestLookup {
            address: GeocodedAddress {
                pos: MapPoint::from_lat_lng_deg(38.95, -77.45),
                display_name: "Sterling".into(),
            },
            nearest: None,
        };
        assert_eq!(NO_DATA_MESSAGE, lookup_message(&lookup, Some("first")));
        assert_eq!(NO_DATA_MESSAGE, dataset_listing(&[]));
    }

    #[test]
    fn failure_messages() {
        assert_eq!(
            "Please enter an address, city, or ZIP code.",
            failure_message(&usecases::Error::EmptyAddress)
        );
        let no_results = failure_message(&geocode::Error::NoResults.into());
        let transport = failure_message(&geocode::Error::Transport("timeout".into()).into());
        assert!(no_results.contains("check the spelling"));
        assert_eq!(no_results, transport);
        assert_ne!(NO_DATA_MESSAGE, no_results);
    }

    #[test]
    fn list_dataset() {
        let listing = dataset_listing(&[herndon()]);
        assert_eq!(
            "1. Fairfax / Herndon Data Center Area (Herndon, VA, Multiple operators) at 38.964,-77.3861\n",
            listing
        );
        let ashburn = NamedLocation {
            name: "Ashburn Data Center Cluster".into(),
            city: "Ashburn, VA".into(),
            pos: MapPoint::from_lat_lng_deg(39.0438, -77.4874),
            ..herndon()
        };
        let listing = dataset_listing(&[ashburn, herndon()]);
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(2, lines.len());
        assert_eq!(
            "1. Ashburn Data Center Cluster (Ashburn, VA, Multiple operators) at 39.0438,-77.4874",
            lines[0]
        );
        assert!(lines[1].starts_with("2. Fairfax / Herndon"));
    }
}
