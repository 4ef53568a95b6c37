//! Element, isotope and branch records

// external crates
use log::trace;
use serde::{Deserialize, Serialize};

// internal modules
use crate::f;
use crate::mode::ModeSpec;

/// Half-life of an isotope
///
/// Stable isotopes are represented explicitly rather than with an infinite
/// value. In serialised tables a stable half-life is `null`.
///
/// ```rust
/// # use isotops_table::HalfLife;
/// assert_eq!(HalfLife::Seconds(12.0).seconds(), 12.0);
/// assert_eq!(HalfLife::Stable.seconds(), f64::INFINITY);
/// ```
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum HalfLife {
    /// Does not decay
    Stable,
    /// Finite half-life (s)
    Seconds(f64),
}

impl HalfLife {
    /// Check if the isotope is stable
    pub fn is_stable(&self) -> bool {
        matches!(self, HalfLife::Stable)
    }

    /// Half-life in seconds, infinite for stable isotopes
    pub fn seconds(&self) -> f64 {
        match self {
            HalfLife::Stable => f64::INFINITY,
            HalfLife::Seconds(t) => *t,
        }
    }
}

impl From<Option<f64>> for HalfLife {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(t) if t.is_infinite() && t > 0.0 => HalfLife::Stable,
            Some(t) => HalfLife::Seconds(t),
            None => HalfLife::Stable,
        }
    }
}

impl From<HalfLife> for Option<f64> {
    fn from(value: HalfLife) -> Self {
        match value {
            HalfLife::Stable => None,
            HalfLife::Seconds(t) => Some(t),
        }
    }
}

impl std::fmt::Display for HalfLife {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            HalfLife::Stable => write!(f, "stable"),
            HalfLife::Seconds(t) => write!(f, "{t:.5e} s"),
        }
    }
}

/// One possible decay pathway
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Branch {
    /// Probability of taking this branch, within (0, 1]
    pub probability: f64,
    /// Decay modes applied in order when the branch is taken
    pub modes: Vec<ModeSpec>,
}

impl Branch {
    /// Branch taking the given modes in order
    pub fn new(probability: f64, modes: Vec<ModeSpec>) -> Self {
        Self { probability, modes }
    }
}

/// Decay data for a single nuclide
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Isotope {
    /// Half-life of the ground state
    pub half_life: HalfLife,
    /// Decay branches, order defines the cumulative probability intervals
    #[serde(default)]
    pub branches: Vec<Branch>,
}

impl Isotope {
    /// A stable isotope
    pub fn stable() -> Self {
        Self {
            half_life: HalfLife::Stable,
            branches: Vec::new(),
        }
    }

    /// An unstable isotope with a half-life in seconds
    pub fn unstable(half_life: f64, branches: Vec<Branch>) -> Self {
        Self {
            half_life: HalfLife::Seconds(half_life),
            branches,
        }
    }

    /// Check if the isotope is stable
    pub fn is_stable(&self) -> bool {
        self.half_life.is_stable()
    }
}

/// Element data and its isotopes
///
/// Isotopes are stored contiguously by increasing neutron count, so the
/// isotope for `n` neutrons is found at offset `n - min_neutrons`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Element {
    /// Element symbol e.g. 'He', 'Co'
    pub symbol: String,
    /// Display name e.g. 'Helium'
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Neutron count of the first isotope
    pub min_neutrons: i32,
    /// Isotopes ordered by neutron count with no gaps
    pub isotopes: Vec<Isotope>,
}

impl Element {
    /// Largest neutron count represented in the table
    pub fn max_neutrons(&self) -> i32 {
        self.min_neutrons + self.isotopes.len() as i32 - 1
    }

    /// Find the isotope with `neutrons` neutrons
    ///
    /// Returns `None` for too few or too many neutrons, which are ordinary
    /// negative results for any input.
    ///
    /// ```rust
    /// # use isotops_table::NuclideTable;
    /// let carbon = NuclideTable::standard().lookup_element(6).unwrap();
    /// assert!(carbon.lookup_isotope(8).is_some());
    /// assert!(carbon.lookup_isotope(-3).is_none());
    /// assert!(carbon.lookup_isotope(i32::MAX).is_none());
    /// ```
    pub fn lookup_isotope(&self, neutrons: i32) -> Option<&Isotope> {
        let offset = neutrons.checked_sub(self.min_neutrons)?;
        let isotope = usize::try_from(offset)
            .ok()
            .and_then(|i| self.isotopes.get(i));

        if isotope.is_none() {
            trace!("No {} isotope with {neutrons} neutrons", self.symbol);
        }
        isotope
    }

    /// Iterate over (neutrons, isotope) pairs
    pub fn isotopes(&self) -> impl Iterator<Item = (i32, &Isotope)> {
        (self.min_neutrons..).zip(self.isotopes.iter())
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = f!("{} ({})\n", self.name, self.symbol);
        s += &f!(
            "  Neutrons         {} to {}\n",
            self.min_neutrons,
            self.max_neutrons()
        );
        s += &f!(
            "  Stable isotopes  {}\n",
            self.isotopes.iter().filter(|i| i.is_stable()).count()
        );
        for line in textwrap::wrap(&self.description, 60) {
            s += &f!("  {line}\n");
        }
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::DecayMode;

    fn helium() -> Element {
        Element {
            symbol: "He".to_string(),
            name: "Helium".to_string(),
            description: String::new(),
            min_neutrons: 1,
            isotopes: vec![
                Isotope::stable(),
                Isotope::stable(),
                Isotope::unstable(7.0e-22, vec![Branch::new(1.0, vec![DecayMode::ejection(0, 1).into()])]),
            ],
        }
    }

    #[test]
    fn isotope_bounds() {
        let he = helium();
        assert!(he.lookup_isotope(0).is_none());
        assert!(he.lookup_isotope(1).unwrap().is_stable());
        assert!(!he.lookup_isotope(3).unwrap().is_stable());
        assert!(he.lookup_isotope(4).is_none());
        assert!(he.lookup_isotope(i32::MIN).is_none());
        assert_eq!(he.max_neutrons(), 3);
    }

    #[test]
    fn isotope_iteration() {
        let neutrons: Vec<i32> = helium().isotopes().map(|(n, _)| n).collect();
        assert_eq!(neutrons, vec![1, 2, 3]);
    }

    #[test]
    fn half_life_json() {
        let stable: HalfLife = serde_json::from_str("null").unwrap();
        assert!(stable.is_stable());
        assert_eq!(serde_json::to_string(&HalfLife::Stable).unwrap(), "null");

        let t: HalfLife = serde_json::from_str("12.5").unwrap();
        assert_eq!(t, HalfLife::Seconds(12.5));
    }
}
