//! Successive decays of a single nucleus

use isotops_table::DecayMode;
use log::trace;

use crate::branch::residual;
use crate::model::NucleusModel;
use crate::nucleon::Nucleon;

/// Default limit on the number of steps in a decay chain
pub const DEFAULT_MAX_STEPS: usize = 64;

/// One nucleus in a decay chain
#[derive(Debug, Clone, PartialEq)]
pub struct Step<'t> {
    /// Proton count of this nucleus
    pub protons: i32,
    /// Neutron count of this nucleus
    pub neutrons: i32,
    /// Half-life and sampled lifetime
    pub nucleon: Nucleon<'t>,
    /// Decay products, empty for the last step of a chain
    pub modes: Vec<DecayMode>,
}

/// Iterator over the successive decays of a nucleus
///
/// Each step calls [create()](NucleusModel::create) and, unless the nucleus
/// is stable or null, [decay()](NucleusModel::decay) with two consecutive
/// draws. The chain ends after a stable or null nucleus, a decay that leaves
/// the nucleus unchanged, or `max_steps` steps.
///
/// ```rust
/// # use isotops_decay::NucleusModel;
/// let model = NucleusModel::standard();
///
/// // Carbon-14 beta decays into stable nitrogen-14
/// let steps: Vec<_> = model.chain(6, 8, || 0.5).collect();
/// assert_eq!(steps.len(), 2);
/// assert_eq!((steps[1].protons, steps[1].neutrons), (7, 7));
/// assert!(steps[1].nucleon.is_stable());
/// ```
#[derive(Debug)]
pub struct Chain<'t, R> {
    model: NucleusModel<'t>,
    protons: i32,
    neutrons: i32,
    draws: R,
    steps: usize,
    max_steps: usize,
    finished: bool,
}

impl<'t, R: FnMut() -> f64> Chain<'t, R> {
    pub(crate) fn new(model: NucleusModel<'t>, protons: i32, neutrons: i32, draws: R) -> Self {
        Self {
            model,
            protons,
            neutrons,
            draws,
            steps: 0,
            max_steps: DEFAULT_MAX_STEPS,
            finished: false,
        }
    }

    /// Limit the number of steps in the chain
    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }
}

impl<'t, R: FnMut() -> f64> Iterator for Chain<'t, R> {
    type Item = Step<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.steps >= self.max_steps {
            return None;
        }
        self.steps += 1;

        let (protons, neutrons) = (self.protons, self.neutrons);
        let nucleon = self.model.create(protons, neutrons, (self.draws)());

        let modes = if nucleon.is_stable() || nucleon.is_null() {
            self.finished = true;
            Vec::new()
        } else {
            let modes = self.model.decay(protons, neutrons, (self.draws)());
            let daughter = residual(protons, neutrons, &modes);
            if daughter == (protons, neutrons) {
                self.finished = true;
            }
            (self.protons, self.neutrons) = daughter;
            modes
        };

        trace!("Chain step {}: {protons}p {neutrons}n", self.steps);
        Some(Step {
            protons,
            neutrons,
            nucleon,
            modes,
        })
    }
}
