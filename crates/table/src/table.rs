//! The immutable nuclide table and its lookups

// external crates
use log::{debug, trace};
use serde::{Deserialize, Serialize};

// internal modules
use crate::element::{Element, HalfLife, Isotope};
use crate::error::{Error, Result};
use crate::f;
use crate::mode::ModeSpec;
use crate::nuclide::Nuclide;

/// Allowed deviation from 1 for the sum of branch probabilities
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Result of looking up a nuclide by proton and neutron counts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'t> {
    /// Proton count outside of the table
    UnknownElement,
    /// Element is known but not with this many neutrons
    UnknownIsotope(&'t Element),
    /// Full table hit
    Found(&'t Element, &'t Isotope),
}

/// Densely packed decay data indexed by proton count
///
/// The element with `Z` protons is stored at index `Z`, starting from the free
/// neutron at `Z = 0`. Every table is validated on construction and never
/// mutated afterwards, so it may be shared freely between threads.
///
/// ```rust
/// # use isotops_table::{Lookup, NuclideTable};
/// let table = NuclideTable::standard();
///
/// // Cobalt is not in the standard table, carbon-14 is
/// assert!(table.lookup_element(27).is_none());
/// assert!(matches!(table.lookup(6, 8), Lookup::Found(..)));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "TableData")]
pub struct NuclideTable {
    elements: Vec<Element>,
}

/// Unvalidated table layout shared by every serialised form
#[derive(Deserialize)]
struct TableData {
    elements: Vec<Element>,
}

impl TryFrom<TableData> for NuclideTable {
    type Error = Error;

    fn try_from(data: TableData) -> Result<Self> {
        NuclideTable::new(data.elements)
    }
}

impl NuclideTable {
    /// Build a table from elements ordered by proton count
    ///
    /// Fails for any element, isotope, or branch that breaks the structural
    /// invariants of the table.
    pub fn new(elements: Vec<Element>) -> Result<Self> {
        if elements.is_empty() {
            return Err(Error::EmptyTable);
        }

        for (protons, element) in elements.iter().enumerate() {
            validate_element(protons as i32, element)?;
        }

        debug!("Nuclide table built for {} elements", elements.len());
        Ok(Self { elements })
    }

    /// Shared instance of the compiled-in standard table
    pub fn standard() -> &'static NuclideTable {
        crate::load::standard()
    }

    /// Number of elements, i.e. the first unknown proton count
    pub fn max_known_protons(&self) -> i32 {
        self.elements.len() as i32
    }

    /// All elements ordered by proton count
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Find the element with `protons` protons
    ///
    /// Any proton count outside of `[0, max_known_protons)` returns `None`.
    pub fn lookup_element(&self, protons: i32) -> Option<&Element> {
        let element = usize::try_from(protons)
            .ok()
            .and_then(|i| self.elements.get(i));

        if element.is_none() {
            trace!("No element with {protons} protons");
        }
        element
    }

    /// Find the isotope of `element` with `neutrons` neutrons
    pub fn lookup_isotope<'t>(&self, element: &'t Element, neutrons: i32) -> Option<&'t Isotope> {
        element.lookup_isotope(neutrons)
    }

    /// Look up both the element and isotope in one go
    pub fn lookup(&self, protons: i32, neutrons: i32) -> Lookup<'_> {
        match self.lookup_element(protons) {
            None => Lookup::UnknownElement,
            Some(element) => match element.lookup_isotope(neutrons) {
                None => Lookup::UnknownIsotope(element),
                Some(isotope) => Lookup::Found(element, isotope),
            },
        }
    }

    /// Find an element and its proton count from a symbol
    ///
    /// An exact match wins, so `n` and `N` stay distinct when the table has
    /// both. Otherwise case is ignored.
    ///
    /// ```rust
    /// # use isotops_table::NuclideTable;
    /// let table = NuclideTable::standard();
    /// assert_eq!(table.find_element("n").unwrap().0, 0);
    /// assert_eq!(table.find_element("N").unwrap().0, 7);
    /// assert_eq!(table.find_element("na").unwrap().0, 11);
    /// ```
    pub fn find_element(&self, symbol: &str) -> Option<(i32, &Element)> {
        let mut elements = self.elements.iter().enumerate();
        elements
            .clone()
            .find(|(_, e)| e.symbol == symbol)
            .or_else(|| elements.find(|(_, e)| e.symbol.eq_ignore_ascii_case(symbol)))
            .map(|(z, e)| (z as i32, e))
    }

    /// Resolve a nuclide name such as `c14` or `He-4` into nucleon counts
    ///
    /// ```rust
    /// # use isotops_table::NuclideTable;
    /// let table = NuclideTable::standard();
    /// assert_eq!(table.resolve("c14").unwrap(), (6, 8));
    /// assert_eq!(table.resolve("He-4").unwrap(), (2, 2));
    /// assert!(table.resolve("co60").is_err());
    /// ```
    pub fn resolve(&self, name: &str) -> Result<(i32, i32)> {
        let nuclide: Nuclide = name.parse()?;
        let protons = self
            .find_element(&nuclide.symbol)
            .map(|(z, _)| z)
            .ok_or_else(|| Error::UnknownNuclide {
                name: name.to_string(),
            })?;

        Ok((protons, nuclide.mass_number as i32 - protons))
    }

    /// A name for the nuclide with consistent formatting
    ///
    /// Known elements are formatted as `<symbol><mass number>`, anything else
    /// falls back to the raw counts.
    ///
    /// ```rust
    /// # use isotops_table::NuclideTable;
    /// let table = NuclideTable::standard();
    /// assert_eq!(table.nuclide_name(6, 8), "C14");
    /// assert_eq!(table.nuclide_name(200, 100), "Z200-A300");
    /// ```
    pub fn nuclide_name(&self, protons: i32, neutrons: i32) -> String {
        let mass = protons.saturating_add(neutrons);
        match self.lookup_element(protons) {
            Some(element) => f!("{}{mass}", element.symbol),
            None => f!("Z{protons}-A{mass}"),
        }
    }

    /// Read a table from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialise to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a table from the compact binary form
    pub fn from_binary(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Encode to the compact binary form
    pub fn to_binary(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }
}

fn validate_element(protons: i32, element: &Element) -> Result<()> {
    if element.isotopes.is_empty() {
        return Err(Error::NoIsotopes {
            symbol: element.symbol.clone(),
        });
    }

    if element.min_neutrons < 0 {
        return Err(Error::NegativeMinNeutrons {
            symbol: element.symbol.clone(),
            min_neutrons: element.min_neutrons,
        });
    }

    for (neutrons, isotope) in element.isotopes() {
        let nuclide = || f!("{}{}", element.symbol, protons + neutrons);
        validate_isotope(isotope, nuclide)?;
    }

    Ok(())
}

fn validate_isotope<F: Fn() -> String>(isotope: &Isotope, nuclide: F) -> Result<()> {
    match isotope.half_life {
        HalfLife::Stable => return Ok(()),
        HalfLife::Seconds(t) if t.is_nan() || t < 0.0 => {
            return Err(Error::InvalidHalfLife {
                nuclide: nuclide(),
                half_life: t,
            })
        }
        HalfLife::Seconds(_) => (),
    }

    if isotope.branches.is_empty() {
        return Err(Error::NoBranches { nuclide: nuclide() });
    }

    for (i, branch) in isotope.branches.iter().enumerate() {
        let p = branch.probability;
        if !(p > 0.0 && p <= 1.0) {
            return Err(Error::ProbabilityOutOfRange {
                nuclide: nuclide(),
                branch: i,
                probability: p,
            });
        }

        if branch.modes.is_empty() {
            return Err(Error::EmptyBranch {
                nuclide: nuclide(),
                branch: i,
            });
        }

        if branch.modes.iter().any(ModeSpec::is_empty_ejection) {
            return Err(Error::EmptyEjection {
                nuclide: nuclide(),
                branch: i,
            });
        }
    }

    let sum: f64 = isotope.branches.iter().map(|b| b.probability).sum();
    if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
        return Err(Error::ProbabilitySum {
            nuclide: nuclide(),
            sum,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Branch;
    use crate::mode::{DecayMode, ModeSpec};

    fn element(symbol: &str, min_neutrons: i32, isotopes: Vec<Isotope>) -> Element {
        Element {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            description: String::new(),
            min_neutrons,
            isotopes,
        }
    }

    fn beta(probability: f64) -> Branch {
        Branch::new(probability, vec![DecayMode::beta_minus().into()])
    }

    #[test]
    fn element_bounds() {
        let table = NuclideTable::new(vec![
            element("n", 1, vec![Isotope::unstable(613.9, vec![beta(1.0)])]),
            element("H", 0, vec![Isotope::stable()]),
        ])
        .unwrap();

        assert_eq!(table.max_known_protons(), 2);
        assert!(table.lookup_element(-1).is_none());
        assert_eq!(table.lookup_element(0).unwrap().symbol, "n");
        assert_eq!(table.lookup_element(1).unwrap().symbol, "H");
        assert!(table.lookup_element(2).is_none());
        assert!(table.lookup_element(i32::MIN).is_none());
    }

    #[test]
    fn combined_lookup() {
        let table = NuclideTable::new(vec![element("H", 0, vec![Isotope::stable()])]).unwrap();
        assert_eq!(table.lookup(3, 0), Lookup::UnknownElement);
        assert!(matches!(table.lookup(0, 1), Lookup::UnknownIsotope(e) if e.symbol == "H"));
        assert!(matches!(table.lookup(0, 0), Lookup::Found(_, i) if i.is_stable()));
    }

    #[test]
    fn exact_symbol_before_ignoring_case() {
        let table = NuclideTable::new(vec![
            element("n", 1, vec![Isotope::unstable(613.9, vec![beta(1.0)])]),
            element("H", 0, vec![Isotope::stable()]),
            element("N", 1, vec![Isotope::stable()]),
        ])
        .unwrap();

        assert_eq!(table.find_element("n").unwrap().0, 0);
        assert_eq!(table.find_element("N").unwrap().0, 2);
        assert_eq!(table.find_element("h").unwrap().0, 1);
        assert!(table.find_element("X").is_none());
        assert_eq!(table.resolve("N3").unwrap(), (2, 1));
        assert_eq!(table.resolve(&table.nuclide_name(2, 1)).unwrap(), (2, 1));
    }

    #[test]
    fn reject_empty_ejection() {
        let isotope = Isotope::unstable(
            1.0,
            vec![Branch::new(1.0, vec![ModeSpec::Fixed(DecayMode::ejection(0, 0))])],
        );
        let result = NuclideTable::new(vec![element("X", 0, vec![isotope])]);
        assert!(matches!(result, Err(Error::EmptyEjection { branch: 0, .. })));
    }

    #[test]
    fn probabilities_within_tolerance() {
        let isotope = Isotope::unstable(1.0, vec![beta(0.7), beta(0.3 - 1e-9)]);
        assert!(NuclideTable::new(vec![element("X", 0, vec![isotope])]).is_ok());
    }

    #[test]
    fn reject_bad_probability_sum() {
        let isotope = Isotope::unstable(1.0, vec![beta(0.7), beta(0.2)]);
        let result = NuclideTable::new(vec![element("X", 0, vec![isotope])]);
        assert!(matches!(result, Err(Error::ProbabilitySum { .. })));
    }

    #[test]
    fn reject_probability_out_of_range() {
        let isotope = Isotope::unstable(1.0, vec![beta(1.5), beta(-0.5)]);
        let result = NuclideTable::new(vec![element("X", 0, vec![isotope])]);
        assert!(matches!(
            result,
            Err(Error::ProbabilityOutOfRange { branch: 0, .. })
        ));
    }

    #[test]
    fn reject_missing_branches() {
        let result = NuclideTable::new(vec![element("X", 0, vec![Isotope::unstable(1.0, vec![])])]);
        assert!(matches!(result, Err(Error::NoBranches { .. })));

        let isotope = Isotope::unstable(1.0, vec![Branch::new(1.0, vec![])]);
        let result = NuclideTable::new(vec![element("X", 0, vec![isotope])]);
        assert!(matches!(result, Err(Error::EmptyBranch { branch: 0, .. })));
    }

    #[test]
    fn reject_bad_half_life() {
        let isotope = Isotope::unstable(-1.0, vec![beta(1.0)]);
        let result = NuclideTable::new(vec![element("X", 0, vec![isotope])]);
        assert!(matches!(result, Err(Error::InvalidHalfLife { .. })));
    }

    #[test]
    fn reject_bad_elements() {
        assert!(matches!(NuclideTable::new(vec![]), Err(Error::EmptyTable)));
        assert!(matches!(
            NuclideTable::new(vec![element("X", 0, vec![])]),
            Err(Error::NoIsotopes { .. })
        ));
        assert!(matches!(
            NuclideTable::new(vec![element("X", -1, vec![Isotope::stable()])]),
            Err(Error::NegativeMinNeutrons { .. })
        ));
    }

    #[test]
    fn validation_names_the_nuclide() {
        let isotope = Isotope::unstable(1.0, vec![]);
        let table = vec![
            element("H", 0, vec![Isotope::stable()]),
            element("He", 2, vec![isotope]),
        ];
        match NuclideTable::new(table) {
            Err(Error::NoBranches { nuclide }) => assert_eq!(nuclide, "He3"),
            other => panic!("unexpected result {other:?}"),
        }
    }
}
