//! Result and Error types for the nuclide table

/// Type alias for `Result<T, table::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `isotops-table`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to (de)serialise a JSON table
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Failure to serialize/deserialize a byte stream
    #[error("failed binary (de)serialization")]
    FailedBinaryOp(#[from] Box<bincode::ErrorKind>),

    /// Generic error type for nom parser results
    #[error("parser failed: {0}")]
    ParseError(String),

    /// Symbol does not match any known decay type
    #[error("failed to infer decay type from \"{hint}\"")]
    CouldNotInferDecayKind { hint: String },

    /// Nuclide name parsed fine but there is no table entry for it
    #[error("\"{name}\" is not in the nuclide table")]
    UnknownNuclide { name: String },

    /// The table has no elements at all
    #[error("nuclide table defines no elements")]
    EmptyTable,

    /// Element listed without any isotope records
    #[error("element {symbol} lists no isotopes")]
    NoIsotopes { symbol: String },

    /// Offset arithmetic requires a non-negative starting neutron count
    #[error("element {symbol} has a negative minimum neutron count ({min_neutrons})")]
    NegativeMinNeutrons { symbol: String, min_neutrons: i32 },

    /// Half-life is negative or NaN
    #[error("{nuclide} has an invalid half-life of {half_life}")]
    InvalidHalfLife { nuclide: String, half_life: f64 },

    /// An unstable isotope must have somewhere to decay to
    #[error("{nuclide} is unstable but has no decay branches")]
    NoBranches { nuclide: String },

    /// Branch without any decay modes
    #[error("{nuclide} branch {branch} lists no decay modes")]
    EmptyBranch { nuclide: String, branch: usize },

    /// Fixed nucleon ejection that removes nothing, tabulate a fission split instead
    #[error("{nuclide} branch {branch} ejects no nucleons")]
    EmptyEjection { nuclide: String, branch: usize },

    /// Branch probability must be within (0, 1]
    #[error("{nuclide} branch {branch} has a probability of {probability}, expected (0, 1]")]
    ProbabilityOutOfRange {
        nuclide: String,
        branch: usize,
        probability: f64,
    },

    /// Branch probabilities of an isotope do not add up to 1
    #[error("{nuclide} branch probabilities sum to {sum}, expected 1")]
    ProbabilitySum { nuclide: String, sum: f64 },
}
