//! Decay types and the decay modes tabulated for each branch

// external crates
use serde::{Deserialize, Serialize};

// internal modules
use crate::error::{Error, Result};
use crate::f;

/// Type of decay
///
/// The closed set of changes in composition a decay mode may describe.
///
/// The `FromStr` trait is implemented for all decay types for easy conversion
/// between the variants and their symbols.
///
/// ```rust
/// # use isotops_table::DecayKind;
/// # use std::str::FromStr;
/// // Get the variant from a symbol
/// assert_eq!(DecayKind::from_str("b-").unwrap(), DecayKind::BetaMinus);
///
/// // Get the symbol for a variant
/// assert_eq!(DecayKind::ElectronCapture.symbol(), "EC");
/// ```
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DecayKind {
    /// Beta+ (`B+`)
    #[serde(rename = "B+")]
    BetaPlus,
    /// Beta- (`B-`)
    #[serde(rename = "B-")]
    BetaMinus,
    /// Electron capture (`EC`)
    #[serde(rename = "EC")]
    ElectronCapture,
    /// Exotic positron channel (`e+`)
    #[serde(rename = "e+")]
    EPlus,
    /// Ejection of protons and/or neutrons (`N`)
    #[serde(rename = "N")]
    NucleonEjection,
}

impl DecayKind {
    /// Get the corresponding symbol for a variant
    ///
    /// ```rust
    /// # use isotops_table::DecayKind;
    /// assert_eq!(DecayKind::BetaPlus.symbol(), "B+");
    /// assert_eq!(DecayKind::BetaMinus.symbol(), "B-");
    /// assert_eq!(DecayKind::ElectronCapture.symbol(), "EC");
    /// assert_eq!(DecayKind::EPlus.symbol(), "e+");
    /// assert_eq!(DecayKind::NucleonEjection.symbol(), "N");
    /// ```
    pub fn symbol(&self) -> &str {
        match self {
            DecayKind::BetaPlus => "B+",
            DecayKind::BetaMinus => "B-",
            DecayKind::ElectronCapture => "EC",
            DecayKind::EPlus => "e+",
            DecayKind::NucleonEjection => "N",
        }
    }

    /// Longer display name for a variant
    pub fn display_name(&self) -> &str {
        match self {
            DecayKind::BetaPlus => "Beta+",
            DecayKind::BetaMinus => "Beta-",
            DecayKind::ElectronCapture => "Electron capture",
            DecayKind::EPlus => "e+",
            DecayKind::NucleonEjection => "Nucleon ejection",
        }
    }
}

impl std::str::FromStr for DecayKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "b+" | "bp" => Ok(DecayKind::BetaPlus),
            "b-" | "bm" => Ok(DecayKind::BetaMinus),
            "ec" => Ok(DecayKind::ElectronCapture),
            "e+" => Ok(DecayKind::EPlus),
            "n" => Ok(DecayKind::NucleonEjection),
            _ => Err(Error::CouldNotInferDecayKind {
                hint: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for DecayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single change in composition
///
/// The proton and neutron deltas are the counts *removed* from the parent
/// nucleus, so they are subtracted from the running totals when a branch is
/// applied. Beta- therefore removes a neutron and adds a proton:
///
/// ```rust
/// # use isotops_table::{DecayKind, DecayMode};
/// let beta = DecayMode::beta_minus();
/// assert_eq!(beta.kind, DecayKind::BetaMinus);
/// assert_eq!((beta.protons, beta.neutrons), (-1, 1));
/// ```
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DecayMode {
    /// Type of decay
    pub kind: DecayKind,
    /// Protons removed from the nucleus
    pub protons: i32,
    /// Neutrons removed from the nucleus
    pub neutrons: i32,
}

impl DecayMode {
    /// Any decay type with explicit deltas
    pub fn new(kind: DecayKind, protons: i32, neutrons: i32) -> Self {
        Self {
            kind,
            protons,
            neutrons,
        }
    }

    /// Beta+ decay, a proton converted to a neutron
    pub fn beta_plus() -> Self {
        Self::new(DecayKind::BetaPlus, 1, -1)
    }

    /// Beta- decay, a neutron converted to a proton
    pub fn beta_minus() -> Self {
        Self::new(DecayKind::BetaMinus, -1, 1)
    }

    /// Electron capture, a proton converted to a neutron
    pub fn electron_capture() -> Self {
        Self::new(DecayKind::ElectronCapture, 1, -1)
    }

    /// Ejection of any number of protons and neutrons
    pub fn ejection(protons: i32, neutrons: i32) -> Self {
        Self::new(DecayKind::NucleonEjection, protons, neutrons)
    }

    /// Alpha decay as the ejection of a helium-4 nucleus
    pub fn alpha() -> Self {
        Self::ejection(2, 2)
    }
}

impl std::fmt::Display for DecayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} ({:+}p, {:+}n)",
            self.kind.display_name(),
            -self.protons,
            -self.neutrons
        )
    }
}

/// Tabulated decay mode entry
///
/// Most entries are fixed changes in composition. A spontaneous fission split
/// is only resolved into concrete deltas when the branch is sampled, because
/// the size of the fragment depends on the random draw.
///
/// A nucleon ejection with zero deltas marks a fission split, and converts
/// into [ModeSpec::FissionSplit] both through `From<DecayMode>` and when read
/// from a table file.
///
/// ```rust
/// # use isotops_table::{DecayMode, ModeSpec};
/// assert_eq!(ModeSpec::from(DecayMode::ejection(0, 0)), ModeSpec::FissionSplit);
/// assert!(matches!(ModeSpec::from(DecayMode::alpha()), ModeSpec::Fixed(_)));
/// ```
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case", from = "TabulatedMode")]
pub enum ModeSpec {
    /// Deltas known ahead of time
    Fixed(DecayMode),
    /// Fragment size computed at evaluation time
    FissionSplit,
}

impl ModeSpec {
    /// Shorthand for the symbol of the underlying decay type
    pub fn kind(&self) -> DecayKind {
        match self {
            ModeSpec::Fixed(mode) => mode.kind,
            ModeSpec::FissionSplit => DecayKind::NucleonEjection,
        }
    }

    /// A fixed nucleon ejection that leaves the nucleus unchanged
    pub fn is_empty_ejection(&self) -> bool {
        matches!(
            self,
            ModeSpec::Fixed(DecayMode {
                kind: DecayKind::NucleonEjection,
                protons: 0,
                neutrons: 0,
            })
        )
    }
}

impl From<DecayMode> for ModeSpec {
    fn from(mode: DecayMode) -> Self {
        let spec = ModeSpec::Fixed(mode);
        if spec.is_empty_ejection() {
            ModeSpec::FissionSplit
        } else {
            spec
        }
    }
}

/// Mode entry exactly as written in a table file
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum TabulatedMode {
    Fixed(DecayMode),
    FissionSplit,
}

impl From<TabulatedMode> for ModeSpec {
    fn from(mode: TabulatedMode) -> Self {
        match mode {
            TabulatedMode::Fixed(mode) => mode.into(),
            TabulatedMode::FissionSplit => ModeSpec::FissionSplit,
        }
    }
}

impl std::fmt::Display for ModeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            ModeSpec::Fixed(mode) => f!("{mode}"),
            ModeSpec::FissionSplit => "Spontaneous fission".to_string(),
        };
        write!(f, "{s}")
    }
}
