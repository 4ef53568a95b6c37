//! Heuristic decay of nuclides with no table entry

use isotops_table::DecayMode;
use std::cmp::Ordering;

/// Decay products for a nuclide missing from the table
///
/// This is a heuristic stand-in, not a physical model. A single nucleon
/// ejection removes roughly half of the surplus of whichever species is in
/// excess, pulling the nucleus back toward the region covered by the table:
///
/// - `ceil((protons - neutrons) / 2)` protons if protons are in excess
/// - `ceil((neutrons - protons) / 2)` neutrons if neutrons are in excess
/// - one of each (towards zero) when the counts are balanced
///
/// An empty nucleus has nothing to eject and returns no modes. The result is
/// deterministic and needs no random draw.
///
/// ```rust
/// # use isotops_decay::unknown_decay;
/// # use isotops_table::DecayMode;
/// assert_eq!(unknown_decay(200, 100), vec![DecayMode::ejection(50, 0)]);
/// assert_eq!(unknown_decay(3, 10), vec![DecayMode::ejection(0, 4)]);
/// assert!(unknown_decay(0, 0).is_empty());
/// ```
pub fn unknown_decay(protons: i32, neutrons: i32) -> Vec<DecayMode> {
    if protons == 0 && neutrons == 0 {
        return Vec::new();
    }

    let surplus = protons as i64 - neutrons as i64;
    let mode = match surplus.cmp(&0) {
        Ordering::Greater => DecayMode::ejection(half_rounded_up(surplus), 0),
        Ordering::Less => DecayMode::ejection(0, half_rounded_up(-surplus)),
        Ordering::Equal => DecayMode::ejection(protons.signum(), neutrons.signum()),
    };

    vec![mode]
}

fn half_rounded_up(surplus: i64) -> i32 {
    i32::try_from((surplus + 1) / 2).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proton_surplus() {
        assert_eq!(unknown_decay(200, 100), vec![DecayMode::ejection(50, 0)]);
        assert_eq!(unknown_decay(11, 10), vec![DecayMode::ejection(1, 0)]);
        assert_eq!(unknown_decay(5, 0), vec![DecayMode::ejection(3, 0)]);
    }

    #[test]
    fn neutron_surplus() {
        assert_eq!(unknown_decay(0, 7), vec![DecayMode::ejection(0, 4)]);
        assert_eq!(unknown_decay(-1, 3), vec![DecayMode::ejection(0, 2)]);
    }

    #[test]
    fn balanced_counts() {
        assert_eq!(unknown_decay(150, 150), vec![DecayMode::ejection(1, 1)]);
        assert_eq!(unknown_decay(-2, -2), vec![DecayMode::ejection(-1, -1)]);
    }

    #[test]
    fn extreme_counts() {
        let modes = unknown_decay(i32::MAX, i32::MIN);
        assert_eq!(modes, vec![DecayMode::ejection(i32::MAX, 0)]);
    }
}
