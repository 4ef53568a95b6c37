//! Compact nuclide table for the `isotops` decay model
//!
//! The table maps a proton count to an [Element], and a neutron count within
//! that element to an [Isotope]. Every unstable isotope lists one or more
//! decay [Branch]es, each with a probability and an ordered list of decay
//! modes ([ModeSpec]).
//!
//! ```text
//! NuclideTable
//!   elements[Z] -> Element
//!     isotopes[N - min_neutrons] -> Isotope
//!       half_life
//!       branches[] -> Branch
//!         probability
//!         modes[] -> ModeSpec
//! ```
//!
//! For example:
//!
//! ```rust
//! # use isotops_table::{HalfLife, NuclideTable};
//! let table = NuclideTable::standard();
//!
//! // Carbon-14 has a single beta- branch
//! let carbon = table.lookup_element(6).unwrap();
//! let c14 = carbon.lookup_isotope(8).unwrap();
//!
//! assert_eq!(carbon.name, "Carbon");
//! assert_eq!(c14.half_life, HalfLife::Seconds(1.7987e11));
//! assert_eq!(c14.branches.len(), 1);
//! ```
//!
//! ## Provisioning
//!
//! The standard table is compiled in and covers the free neutron (`Z = 0`)
//! through to sodium. Other tables may be built directly with
//! [NuclideTable::new()], or read with [read_json()] and [read_binary()].
//!
//! Whatever the source, the table is validated on construction:
//!
//! - every element lists at least one isotope
//! - half-lives are non-negative
//! - every unstable isotope has at least one branch with at least one mode
//! - branch probabilities are within (0, 1] and sum to 1
//!
//! Lookups on a valid table are bounds-checked index arithmetic and never
//! allocate.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod element;
mod error;
mod load;
mod mode;
mod nuclide;
mod parsers;
mod table;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use element::{Branch, Element, HalfLife, Isotope};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use load::{read_binary, read_json, write_binary};

#[doc(inline)]
pub use mode::{DecayKind, DecayMode, ModeSpec};

#[doc(inline)]
pub use nuclide::Nuclide;

#[doc(inline)]
pub use table::{Lookup, NuclideTable, PROBABILITY_TOLERANCE};
