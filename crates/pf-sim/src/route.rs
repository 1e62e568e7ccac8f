//! Delivery-order planning: greedy nearest-neighbor with a deadline guard.
//!
//! The planner reorders a truck's load in place.  At each step it picks
//! the nearest remaining stop, except that a stop carrying a deadline is
//! never displaced by one without, and among deadline stops only an
//! earlier-or-equal deadline may displace.  Combined with the boarding
//! queue (deadline cargo first), deadline packages front-load the route
//! while the tail is plain nearest-neighbor.
//!
//! This is a heuristic, not an optimizer: it does not prove deadlines are
//! met, it only biases hard toward meeting them.

use pf_core::{Location, Minute, PackageId};
use pf_model::{EntityStore, Package};
use pf_spatial::DistanceMap;

use crate::error::SimResult;

/// Reorder `load` in place into delivery order, starting from `start`.
pub fn plan_delivery_order(
    load: &mut [PackageId],
    start: &Location,
    packages: &EntityStore<PackageId, Package>,
    distances: &DistanceMap,
) -> SimResult<()> {
    let mut current = start.clone();
    for i in 0..load.len() {
        let incumbent = packages.get(load[i])?;
        let mut best = i;
        let mut best_destination = incumbent.destination.clone();
        let mut best_deadline = incumbent.deadline;
        let mut best_dist = distances.distance(&current, &best_destination)?;

        for j in (i + 1)..load.len() {
            let candidate = packages.get(load[j])?;
            if !may_displace(candidate.deadline, best_deadline) {
                continue;
            }
            let dist = distances.distance(&current, &candidate.destination)?;
            if dist < best_dist {
                best = j;
                best_destination = candidate.destination.clone();
                best_deadline = candidate.deadline;
                best_dist = dist;
            }
        }

        load.swap(i, best);
        current = best_destination;
    }
    Ok(())
}

/// The deadline guard: may a candidate stop take the incumbent's slot
/// (distance permitting)?
///
/// | candidate | incumbent | displace?            |
/// |-----------|-----------|----------------------|
/// | none      | none      | yes                  |
/// | `c`       | `b`       | only if `c <= b`     |
/// | `c`       | none      | no                   |
/// | none      | `b`       | no                   |
#[inline]
fn may_displace(candidate: Option<Minute>, incumbent: Option<Minute>) -> bool {
    match (candidate, incumbent) {
        (None, None) => true,
        (Some(c), Some(b)) => c <= b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::may_displace;
    use pf_core::Minute;

    #[test]
    fn deadline_guard_truth_table() {
        let early = Some(Minute::hm(9, 0));
        let late = Some(Minute::hm(10, 30));
        assert!(may_displace(None, None));
        assert!(may_displace(early, late));
        assert!(may_displace(early, early));
        assert!(!may_displace(late, early));
        assert!(!may_displace(early, None));
        assert!(!may_displace(None, early));
    }
}
