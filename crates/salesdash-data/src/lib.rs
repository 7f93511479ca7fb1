//! # SalesDash Data
//!
//! Access to the product sales aggregation.
//!
//! [`PgSalesSource`] runs the grouped query against PostgreSQL and
//! [`SalesCache`] memoizes its result for a fixed window, degrading any
//! database failure into an empty report plus a warning.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod postgres;
pub mod source;

#[cfg(any(test, feature = "testing"))]
pub mod fixtures;

pub use cache::*;
pub use postgres::*;
pub use source::*;
