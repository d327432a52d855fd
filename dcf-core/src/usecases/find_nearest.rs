use super::prelude::*;

/// How to decide between candidates at exactly the same distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// The candidate that comes first in the given order wins.
    #[default]
    SequenceOrder,
    /// The candidate with the lexicographically smallest name wins,
    /// independent of the order of the dataset.
    Name,
}

/// Find the candidate that is closest to `query`.
///
/// Returns `None` if there are no candidates.
pub fn find_nearest(query: MapPoint, candidates: &[NamedLocation]) -> Option<MatchResult> {
    find_nearest_with_tie_break(query, candidates, TieBreak::SequenceOrder)
}

pub fn find_nearest_with_tie_break(
    query: MapPoint,
    candidates: &[NamedLocation],
    tie_break: TieBreak,
) -> Option<MatchResult> {
    let mut best: Option<(&NamedLocation, Distance)> = None;
    for candidate in candidates {
        let distance = MapPoint::distance(query, candidate.pos);
        let replace = match best {
            None => true,
            Some((current, best_distance)) => {
                distance < best_distance
                    || (distance == best_distance
                        && tie_break == TieBreak::Name
                        && candidate.name < current.name)
            }
        };
        if replace {
            best = Some((candidate, distance));
        }
    }
    best.map(|(location, distance)| {
        log::debug!(
            "Nearest location to {query} is '{}' ({} km)",
            location.name,
            distance.to_km()
        );
        MatchResult::new(location.clone(), distance)
    })
}
