//! Probabilistic decay queries over an `isotops-table` nuclide table
//!
//! The [NucleusModel] answers two questions for a nucleus identified by its
//! proton and neutron counts:
//!
//! - [create()](NucleusModel::create): what is the half-life, and how long
//!   does this particular nucleus live?
//! - [decay()](NucleusModel::decay): what does it decay into?
//!
//! Both take a uniform random draw from the caller, so a simulation can use
//! whatever source of randomness it likes and replay results exactly.
//!
//! ```rust
//! # use isotops_decay::{NucleusModel, Outcome};
//! # use isotops_table::DecayMode;
//! let model = NucleusModel::standard();
//!
//! // Sodium-22 decays by beta+ 90.38% of the time, electron capture otherwise
//! assert_eq!(model.decay(11, 11, 0.5), vec![DecayMode::beta_plus()]);
//! assert_eq!(model.decay(11, 11, 0.95), vec![DecayMode::electron_capture()]);
//!
//! // The full outcome includes the branch taken
//! match model.decay_outcome(11, 11, 0.95) {
//!     Outcome::Branch { index, .. } => assert_eq!(index, 1),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! ## Missing data
//!
//! Queries never fail. Anything the table cannot answer is reported through
//! the shape of the result instead:
//!
//! | Case               | `create()`                      | `decay()`                 |
//! | ------------------ | ------------------------------- | ------------------------- |
//! | No nucleons        | [Nucleon::Null]                 | no modes                  |
//! | Unknown element    | [Nucleon::UnknownElement]       | [unknown_decay()]         |
//! | Unknown isotope    | [Nucleon::UnknownIsotope]       | [unknown_decay()]         |
//! | Stable isotope     | [Nucleon::Known], infinite life | no modes, with a warning  |
//!
//! ## Spontaneous fission
//!
//! A branch may contain a [ModeSpec::FissionSplit](isotops_table::ModeSpec)
//! entry. The size of the fragment is taken from the position of the random
//! draw within the branch interval, so fission products need no second draw.

// Modules
mod branch;
mod chain;
mod fallback;
mod model;
mod nucleon;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use branch::{emit_modes, residual, select_branch, Selection};

#[doc(inline)]
pub use chain::{Chain, Step, DEFAULT_MAX_STEPS};

#[doc(inline)]
pub use fallback::unknown_decay;

#[doc(inline)]
pub use model::{sample_life, Miss, NucleusModel, Outcome};

#[doc(inline)]
pub use nucleon::{Nucleon, UNKNOWN_HALF_LIFE};
