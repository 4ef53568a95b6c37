//! Stateless decay queries over a nuclide table

// external crates
use log::{debug, error, warn};

// isotops crates
use isotops_table::{DecayMode, HalfLife, Isotope, Lookup, NuclideTable};

// internal modules
use crate::branch::{emit_modes, select_branch};
use crate::chain::Chain;
use crate::fallback::unknown_decay;
use crate::nucleon::Nucleon;

/// Reason the table could not supply decay branches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    /// Proton count outside of the table
    UnknownElement,
    /// Element is tabulated, but not this isotope
    UnknownIsotope,
    /// Isotope is unstable but lists no branches
    NoBranches,
}

/// Full result of a decay query
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A tabulated branch was sampled
    Branch {
        /// Index of the branch in table order
        index: usize,
        /// Position of the draw within the branch interval
        fraction: f64,
        /// Decay products in table order
        modes: Vec<DecayMode>,
    },
    /// No usable table data, products from [unknown_decay()](crate::unknown_decay)
    Fallback {
        /// What was missing
        miss: Miss,
        /// Heuristic decay products
        modes: Vec<DecayMode>,
    },
    /// Decay was requested for a stable isotope
    Stable,
}

impl Outcome {
    /// Decay products, empty for a stable isotope
    pub fn modes(&self) -> &[DecayMode] {
        match self {
            Outcome::Branch { modes, .. } | Outcome::Fallback { modes, .. } => modes,
            Outcome::Stable => &[],
        }
    }

    /// Take ownership of the decay products
    pub fn into_modes(self) -> Vec<DecayMode> {
        match self {
            Outcome::Branch { modes, .. } | Outcome::Fallback { modes, .. } => modes,
            Outcome::Stable => Vec::new(),
        }
    }
}

/// Probabilistic decay model over a borrowed [NuclideTable]
///
/// The model holds no state of its own and never generates randomness. Every
/// query takes a uniform random draw from the caller, so results are a pure
/// function of the inputs and the table.
///
/// ```rust
/// # use isotops_decay::NucleusModel;
/// # use isotops_table::{DecayMode, NuclideTable};
/// let table = NuclideTable::standard();
/// let model = NucleusModel::new(table);
///
/// // Tritium lives exactly one half-life at the midpoint draw
/// let tritium = model.create(1, 2, 0.5);
/// assert_eq!(tritium.life(), 3.888e8);
///
/// // and beta decays to helium-3
/// assert_eq!(model.decay(1, 2, 0.1), vec![DecayMode::beta_minus()]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NucleusModel<'t> {
    table: &'t NuclideTable,
}

impl<'t> NucleusModel<'t> {
    /// Model over any validated table
    pub fn new(table: &'t NuclideTable) -> Self {
        Self { table }
    }

    /// Model over the compiled-in standard table
    pub fn standard() -> NucleusModel<'static> {
        NucleusModel::new(NuclideTable::standard())
    }

    /// The underlying nuclide table
    pub fn table(&self) -> &'t NuclideTable {
        self.table
    }

    /// Report the half-life and sample a lifetime for a nucleus
    ///
    /// `random` is a uniform draw in (0, 1]. The lifetime is
    /// `half_life * -log2(random)`, the inverse transform of an exponential
    /// decay time, so a draw of 0.5 gives exactly one half-life.
    ///
    /// See [Nucleon] for the outcomes when the table has no data.
    pub fn create(&self, protons: i32, neutrons: i32, random: f64) -> Nucleon<'t> {
        if protons == 0 && neutrons == 0 {
            return Nucleon::Null;
        }

        match self.table.lookup(protons, neutrons) {
            Lookup::UnknownElement => Nucleon::UnknownElement { protons },
            Lookup::UnknownIsotope(element) => Nucleon::UnknownIsotope {
                element,
                protons,
                neutrons,
            },
            Lookup::Found(element, isotope) => Nucleon::Known {
                element,
                protons,
                neutrons,
                half_life: isotope.half_life,
                life: sample_life(isotope.half_life, random),
            },
        }
    }

    /// Sample a decay branch and produce the decay products
    ///
    /// `random` is a uniform draw in [0, 1). Nuclides missing from the table
    /// fall back to the [unknown_decay()](crate::unknown_decay) heuristic, and
    /// stable isotopes produce nothing.
    pub fn decay(&self, protons: i32, neutrons: i32, random: f64) -> Vec<DecayMode> {
        self.decay_outcome(protons, neutrons, random).into_modes()
    }

    /// Same as [decay()](Self::decay), with the selected branch or the
    /// reason for a fallback
    pub fn decay_outcome(&self, protons: i32, neutrons: i32, random: f64) -> Outcome {
        match self.table.lookup(protons, neutrons) {
            Lookup::UnknownElement => self.fallback(Miss::UnknownElement, protons, neutrons),
            Lookup::UnknownIsotope(_) => self.fallback(Miss::UnknownIsotope, protons, neutrons),
            Lookup::Found(_, isotope) => self.branch_decay(isotope, protons, neutrons, random),
        }
    }

    /// Follow a nucleus through successive decays
    ///
    /// Every draw, for both lifetimes and branches, is taken from `draws`.
    pub fn chain<R: FnMut() -> f64>(&self, protons: i32, neutrons: i32, draws: R) -> Chain<'t, R> {
        Chain::new(*self, protons, neutrons, draws)
    }

    fn branch_decay(&self, isotope: &Isotope, protons: i32, neutrons: i32, random: f64) -> Outcome {
        if isotope.is_stable() {
            warn!(
                "Decay requested for stable {}",
                self.table.nuclide_name(protons, neutrons)
            );
            return Outcome::Stable;
        }

        let Some(selection) = select_branch(&isotope.branches, random) else {
            error!(
                "No decay branches for unstable {}",
                self.table.nuclide_name(protons, neutrons)
            );
            return self.fallback(Miss::NoBranches, protons, neutrons);
        };

        debug!(
            "{} branch {} selected (fraction {:.4})",
            self.table.nuclide_name(protons, neutrons),
            selection.index,
            selection.fraction
        );

        let branch = &isotope.branches[selection.index];
        Outcome::Branch {
            index: selection.index,
            fraction: selection.fraction,
            modes: emit_modes(branch, protons, neutrons, selection.fraction),
        }
    }

    fn fallback(&self, miss: Miss, protons: i32, neutrons: i32) -> Outcome {
        debug!(
            "No decay data for {} ({miss:?}), using the unknown nuclide heuristic",
            self.table.nuclide_name(protons, neutrons)
        );
        Outcome::Fallback {
            miss,
            modes: unknown_decay(protons, neutrons),
        }
    }
}

/// Sample a lifetime (s) from a uniform draw in (0, 1]
///
/// Draws are clamped into `[f64::MIN_POSITIVE, 1]` so the logarithm is always
/// finite, and NaN is treated as 1. Stable isotopes live forever.
///
/// ```rust
/// # use isotops_decay::sample_life;
/// # use isotops_table::HalfLife;
/// assert_eq!(sample_life(HalfLife::Seconds(10.0), 0.5), 10.0);
/// assert_eq!(sample_life(HalfLife::Seconds(10.0), 0.25), 20.0);
/// assert_eq!(sample_life(HalfLife::Stable, 0.5), f64::INFINITY);
/// ```
pub fn sample_life(half_life: HalfLife, random: f64) -> f64 {
    match half_life {
        HalfLife::Stable => f64::INFINITY,
        HalfLife::Seconds(t) => t * half_lives(random),
    }
}

/// Number of half-lives elapsed for a uniform draw
fn half_lives(random: f64) -> f64 {
    let random = if random.is_nan() {
        1.0
    } else {
        random.clamp(f64::MIN_POSITIVE, 1.0)
    };
    (-random.log2()).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_lives_at_draw_edges() {
        assert_eq!(half_lives(1.0), 0.0);
        assert_eq!(half_lives(0.5), 1.0);
        assert_eq!(half_lives(0.0), 1022.0);
        assert_eq!(half_lives(-3.0), 1022.0);
        assert_eq!(half_lives(7.0), 0.0);
        assert_eq!(half_lives(f64::NAN), 0.0);
    }

    #[test]
    fn zero_half_life() {
        assert_eq!(sample_life(HalfLife::Seconds(0.0), 0.3), 0.0);
    }

    #[test]
    fn outcome_modes() {
        assert!(Outcome::Stable.modes().is_empty());

        let outcome = Outcome::Fallback {
            miss: Miss::UnknownElement,
            modes: vec![DecayMode::ejection(1, 0)],
        };
        assert_eq!(outcome.modes(), &[DecayMode::ejection(1, 0)]);
        assert_eq!(outcome.into_modes(), vec![DecayMode::ejection(1, 0)]);
    }
}
