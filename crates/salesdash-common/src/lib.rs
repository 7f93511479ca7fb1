//! # SalesDash Common
//!
//! Shared types, utilities, and common functionality for SalesDash.
//!
//! This crate provides the domain types, the error type, and the logging
//! setup used across all other crates in the SalesDash workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use types::*;
pub use utils::*;
