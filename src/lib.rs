#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::just_underscores_and_digits, clippy::len_without_is_empty)]

extern crate alloc;

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod utils;

mod error;
pub use error::{Error, Result};

mod pair;
pub use pair::{Element, Pair, Shape};

mod normal;
pub use normal::Normal;

mod generator;
#[cfg(feature = "std")]
pub use generator::generate;
pub use generator::{DefaultPolicy, Parameters, Resolved, generate_with};

mod correlation;
pub use correlation::{Correlation, Truncated, pearson};

mod inspector;
pub use inspector::{Inspection, inspect, inspect_pairs};

/// Version of the crate, exposed for diagnostics only
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
