//! `isotops` is a small probabilistic nuclear decay model
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of member crates.
#[doc(inline)]
pub use isotops_table as table;

#[cfg(feature = "decay")]
#[cfg_attr(docsrs, doc(cfg(feature = "decay")))]
#[doc(inline)]
pub use isotops_decay as decay;
