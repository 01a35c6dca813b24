//! # lcglab-core
//!
//! Linear congruential generator streams and the classical statistical
//! tests that judge their quality.
//!
//! Two parameterizations are built in: a general-purpose mixed congruential
//! generator and RANDU, the historically notorious multiplicative one,
//! included precisely because it fails. A generated stream flows through
//! the one-sample Kolmogorov-Smirnov test for uniformity (on a sorted
//! small-sample prefix) and the runs test for independence (on the full
//! sequence); table-driven critical values turn each statistic into an
//! auditable accept/reject decision.
//!
//! ## Quick start
//!
//! ```
//! use lcglab_core::{Lcg, ks, runs, sample, significance};
//!
//! let values = Lcg::mixed().generate(10_000);
//!
//! // Uniformity: KS on the sorted first 100 values.
//! let prefix = sample::sort_ascending(sample::first_k(&values, sample::DEFAULT_PREFIX));
//! let stat = ks::compute_d(&prefix);
//! let uniformity = significance::ks_verdict(stat.d, prefix.len(), 0.05).unwrap();
//!
//! // Independence: runs test over the whole stream.
//! let z = runs::compute_z(&values, values.len()).unwrap();
//! let independence = significance::z_verdict(z, 0.95, true).unwrap();
//! println!("{} / {}", uniformity.verdict, independence.verdict);
//! ```
//!
//! ## Pipeline
//!
//! Generator → stream (optional file persistence) → prefix/sort →
//! {KS engine, runs engine} → significance lookup → decision.
//!
//! Everything is single-threaded and pure apart from [`stream`], which
//! reads and writes the line-oriented value files the generators persist.

pub mod error;
pub mod generator;
pub mod ks;
pub mod runs;
pub mod sample;
pub mod significance;
pub mod stream;

pub use error::EvalError;
pub use generator::{Lcg, LcgParams};
pub use ks::KsStatistic;
pub use runs::{Direction, Run, RunsSummary};
pub use significance::{Decision, Verdict};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
