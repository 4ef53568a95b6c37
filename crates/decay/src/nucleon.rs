//! Results of a lifetime query

use isotops_table::{f, Element, HalfLife};

/// Half-life and lifetime reported for nuclides with no decay data
///
/// Distinct from zero, which is a valid tabulated half-life.
pub const UNKNOWN_HALF_LIFE: f64 = f64::MIN_POSITIVE;

/// A sampled nucleus
///
/// Each variant corresponds to one outcome of
/// [NucleusModel::create()](crate::NucleusModel::create). The accessors give
/// a flattened view, with sentinels standing in for missing data:
///
/// | Variant          | `symbol()`    | `half_life()` / `life()` |
/// | ---------------- | ------------- | ------------------------ |
/// | `Null`           | `Null`        | infinity                 |
/// | `UnknownElement` | proton count  | [UNKNOWN_HALF_LIFE]      |
/// | `UnknownIsotope` | element       | [UNKNOWN_HALF_LIFE]      |
/// | `Known`          | element       | table value / sampled    |
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Nucleon<'t> {
    /// No nucleons at all
    Null,
    /// Proton count outside of the table
    UnknownElement {
        /// Proton count
        protons: i32,
    },
    /// Element is tabulated, but not this isotope
    UnknownIsotope {
        /// Element record
        element: &'t Element,
        /// Proton count
        protons: i32,
        /// Neutron count
        neutrons: i32,
    },
    /// Full table hit
    Known {
        /// Element record
        element: &'t Element,
        /// Proton count
        protons: i32,
        /// Neutron count
        neutrons: i32,
        /// Tabulated half-life
        half_life: HalfLife,
        /// Sampled lifetime (s)
        life: f64,
    },
}

impl<'t> Nucleon<'t> {
    /// Element record, if the element is tabulated
    pub fn element(&self) -> Option<&'t Element> {
        match self {
            Nucleon::UnknownIsotope { element, .. } | Nucleon::Known { element, .. } => {
                Some(*element)
            }
            _ => None,
        }
    }

    /// Element symbol, or a placeholder
    pub fn symbol(&self) -> String {
        match self {
            Nucleon::Null => "Null".to_string(),
            Nucleon::UnknownElement { protons } => protons.to_string(),
            Nucleon::UnknownIsotope { element, .. } | Nucleon::Known { element, .. } => {
                element.symbol.clone()
            }
        }
    }

    /// Element display name, or a placeholder
    pub fn name(&self) -> String {
        match self.element() {
            Some(element) => element.name.clone(),
            None => self.symbol(),
        }
    }

    /// Element description, empty for placeholders
    pub fn description(&self) -> &'t str {
        self.element().map_or("", |e| e.description.as_str())
    }

    /// Half-life (s)
    pub fn half_life(&self) -> f64 {
        match self {
            Nucleon::Null => f64::INFINITY,
            Nucleon::UnknownElement { .. } | Nucleon::UnknownIsotope { .. } => UNKNOWN_HALF_LIFE,
            Nucleon::Known { half_life, .. } => half_life.seconds(),
        }
    }

    /// Sampled lifetime (s)
    pub fn life(&self) -> f64 {
        match self {
            Nucleon::Null => f64::INFINITY,
            Nucleon::UnknownElement { .. } | Nucleon::UnknownIsotope { .. } => UNKNOWN_HALF_LIFE,
            Nucleon::Known { life, .. } => *life,
        }
    }

    /// Check for the absence of a nucleus
    pub fn is_null(&self) -> bool {
        matches!(self, Nucleon::Null)
    }

    /// Check if the table has decay data for this nucleus
    pub fn is_known(&self) -> bool {
        matches!(self, Nucleon::Known { .. })
    }

    /// Check for a tabulated stable isotope
    pub fn is_stable(&self) -> bool {
        matches!(self, Nucleon::Known { half_life, .. } if half_life.is_stable())
    }
}

impl std::fmt::Display for Nucleon<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Nucleon::Null | Nucleon::UnknownElement { .. } => self.symbol(),
            Nucleon::UnknownIsotope {
                element,
                protons,
                neutrons,
            }
            | Nucleon::Known {
                element,
                protons,
                neutrons,
                ..
            } => f!("{}{}", element.symbol, protons + neutrons),
        };

        let mut s = f!("Nucleon {name}\n");
        s += &f!("  Half life        {:.5e} s\n", self.half_life());
        s += &f!("  Life             {:.5e} s\n", self.life());
        write!(f, "{s}")
    }
}
