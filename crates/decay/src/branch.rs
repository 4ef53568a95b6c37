//! Branch selection and decay mode emission

use isotops_table::{Branch, DecayMode, ModeSpec, PROBABILITY_TOLERANCE};
use log::error;

/// Branch chosen by a random draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Index of the branch in table order
    pub index: usize,
    /// Position of the draw within the branch interval, within [0, 1]
    pub fraction: f64,
}

/// Select a branch from a uniform draw in [0, 1)
///
/// Branches partition [0, 1) into contiguous intervals in table order, so the
/// first branch owns `[0, p0)`, the second `[p0, p0 + p1)`, and so on.
///
/// If rounding leaves the draw beyond the final interval the last branch is
/// taken with a clamped fraction. Returns `None` only for an empty slice.
///
/// ```rust
/// # use isotops_decay::select_branch;
/// # use isotops_table::{Branch, DecayMode};
/// let branches = vec![
///     Branch::new(0.7, vec![DecayMode::beta_minus().into()]),
///     Branch::new(0.3, vec![DecayMode::beta_plus().into()]),
/// ];
///
/// let selection = select_branch(&branches, 0.85).unwrap();
/// assert_eq!(selection.index, 1);
/// assert!((selection.fraction - 0.5).abs() < 1e-12);
/// ```
pub fn select_branch(branches: &[Branch], random: f64) -> Option<Selection> {
    let last = branches.len().checked_sub(1)?;
    let random = if random.is_nan() { 0.0 } else { random };

    let mut low = 0.0;
    for (index, branch) in branches.iter().enumerate() {
        let high = low + branch.probability;
        if random < high {
            return Some(Selection {
                index,
                fraction: ((random - low) / branch.probability).clamp(0.0, 1.0),
            });
        }
        low = high;
    }

    // only reachable for a draw at or above the summed probabilities
    if random < 1.0 {
        debug_assert!(
            (low - 1.0).abs() <= PROBABILITY_TOLERANCE,
            "branch probabilities sum to {low}"
        );
        error!("Branch probabilities sum to {low}, taking the last branch");
    }

    let probability = branches[last].probability;
    let floor = low - probability;
    Some(Selection {
        index: last,
        fraction: ((random - floor) / probability).clamp(0.0, 1.0),
    })
}

/// Materialise the decay modes of a branch
///
/// Deltas are subtracted from running totals seeded by the parent counts. A
/// fission split takes `floor(remaining * fraction)` of the protons and
/// neutrons still present when it is reached.
pub fn emit_modes(branch: &Branch, protons: i32, neutrons: i32, fraction: f64) -> Vec<DecayMode> {
    let mut modes = Vec::with_capacity(branch.modes.len());
    let (mut p, mut n) = (protons, neutrons);

    for spec in &branch.modes {
        let mode = match *spec {
            ModeSpec::Fixed(mode) => mode,
            ModeSpec::FissionSplit => fission_fragment(p, n, fraction),
        };
        p = p.saturating_sub(mode.protons);
        n = n.saturating_sub(mode.neutrons);
        modes.push(mode);
    }

    modes
}

/// Nucleon counts left after applying a list of decay modes
///
/// ```rust
/// # use isotops_decay::residual;
/// # use isotops_table::DecayMode;
/// // Lithium-8 beta decays to beryllium-8, which splits into two alphas
/// let modes = [DecayMode::beta_minus(), DecayMode::alpha()];
/// assert_eq!(residual(3, 5, &modes), (2, 2));
/// ```
pub fn residual(protons: i32, neutrons: i32, modes: &[DecayMode]) -> (i32, i32) {
    modes.iter().fold((protons, neutrons), |(p, n), mode| {
        (p.saturating_sub(mode.protons), n.saturating_sub(mode.neutrons))
    })
}

fn fission_fragment(protons: i32, neutrons: i32, fraction: f64) -> DecayMode {
    DecayMode::ejection(
        (protons as f64 * fraction).floor() as i32,
        (neutrons as f64 * fraction).floor() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use isotops_table::DecayKind;

    fn branches(probabilities: &[f64]) -> Vec<Branch> {
        probabilities
            .iter()
            .map(|p| Branch::new(*p, vec![DecayMode::beta_minus().into()]))
            .collect()
    }

    #[test]
    fn two_branches() {
        let branches = branches(&[0.7, 0.3]);

        let first = select_branch(&branches, 0.2).unwrap();
        assert_eq!(first.index, 0);
        assert!((first.fraction - 0.2 / 0.7).abs() < 1e-12);

        let second = select_branch(&branches, 0.85).unwrap();
        assert_eq!(second.index, 1);
        assert!((second.fraction - 0.5).abs() < 1e-12);
    }

    #[test]
    fn interval_boundaries() {
        let branches = branches(&[0.5, 0.25, 0.25]);
        assert_eq!(select_branch(&branches, 0.0).unwrap().index, 0);
        assert_eq!(select_branch(&branches, 0.5).unwrap().index, 1);
        assert_eq!(select_branch(&branches, 0.5).unwrap().fraction, 0.0);
        assert_eq!(select_branch(&branches, 0.75).unwrap().index, 2);
    }

    #[test]
    fn empty_branches() {
        assert!(select_branch(&[], 0.5).is_none());
    }

    #[test]
    fn short_probability_sum() {
        // falls just short of 1 but within tolerance
        let branches = branches(&[0.6, 0.4 - 1e-9]);
        let selection = select_branch(&branches, 1.0 - 1e-10).unwrap();
        assert_eq!(selection.index, 1);
        assert_eq!(selection.fraction, 1.0);
    }

    #[test]
    fn out_of_range_draws() {
        let branches = branches(&[0.7, 0.3]);
        assert_eq!(select_branch(&branches, -0.5).unwrap(), Selection { index: 0, fraction: 0.0 });
        assert_eq!(select_branch(&branches, 1.5).unwrap(), Selection { index: 1, fraction: 1.0 });
        assert_eq!(select_branch(&branches, f64::NAN).unwrap().index, 0);
    }

    #[test]
    fn fission_split_uses_remaining_nucleons() {
        let branch = Branch::new(
            1.0,
            vec![DecayMode::ejection(0, 4).into(), ModeSpec::FissionSplit],
        );
        let modes = emit_modes(&branch, 98, 154, 0.5);

        assert_eq!(modes.len(), 2);
        assert_eq!(modes[0], DecayMode::ejection(0, 4));
        assert_eq!(modes[1], DecayMode::ejection(49, 75));
        assert_eq!(modes[1].kind, DecayKind::NucleonEjection);
        assert_eq!(residual(98, 154, &modes), (49, 75));
    }

    #[test]
    fn fixed_modes_in_order() {
        let branch = Branch::new(
            1.0,
            vec![DecayMode::beta_minus().into(), DecayMode::alpha().into()],
        );
        let modes = emit_modes(&branch, 3, 5, 0.3);
        assert_eq!(modes, vec![DecayMode::beta_minus(), DecayMode::alpha()]);
    }
}
