//! Nuclide names

// internal modules
use crate::error::{Error, Result};
use crate::f;
use crate::parsers::nuclide_from_str;

/// Name of a particular nuclide
///
/// The `FromStr` trait is implemented and will try to parse a string into
/// a nuclide. Expects `<element><separator><mass number>`, where the
/// separator is optional. e.g.
///
/// - C14, c14
/// - He-4, he_4
///
/// ```rust
/// # use isotops_table::Nuclide;
/// # use std::str::FromStr;
/// assert_eq!(
///     Nuclide::from_str("he-4").unwrap(),
///     Nuclide {
///         symbol: "he".to_string(),
///         mass_number: 4,
///     }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nuclide {
    /// Element symbol as written
    pub symbol: String,
    /// Total nucleons (Z+N)
    pub mass_number: u16,
}

impl Nuclide {
    /// A name for the nuclide with consistent formatting
    ///
    /// ```rust
    /// # use isotops_table::Nuclide;
    /// let nuclide = Nuclide {
    ///     symbol: "he".to_string(),
    ///     mass_number: 4,
    /// };
    /// assert_eq!(nuclide.name(), "He4");
    /// ```
    pub fn name(&self) -> String {
        f!("{}{}", capitalise(&self.symbol), self.mass_number)
    }
}

impl std::str::FromStr for Nuclide {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (_, nuclide) = nuclide_from_str(s)
            .map_err(|_| Error::ParseError(f!("Could not extract a nuclide from \"{s}\"")))?;

        Ok(nuclide)
    }
}

impl std::fmt::Display for Nuclide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn capitalise(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &c.as_str().to_lowercase(),
        None => String::new(),
    }
}
