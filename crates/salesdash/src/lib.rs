//! # SalesDash
//!
//! Single-page sales dashboard.
//!
//! Each request to `/` runs one pass: check configuration, load the
//! (memoized) product sales, then render either the bar chart or a
//! "no data" warning.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod page;
pub mod routes;
pub mod server;

pub use error::*;
pub use page::*;
pub use routes::*;
pub use server::*;
