//! # SalesDash Graphs
//!
//! Bar chart generation for the sales dashboard.
//!
//! [`BarChart`] is a declarative description of the chart built from query
//! rows; [`ProductSalesChart`] renders it to SVG with plotters.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod chart;
pub mod palette;
pub mod product_sales;
pub mod traits;
pub mod utils;

pub use chart::*;
pub use palette::*;
pub use product_sales::*;
pub use traits::*;
pub use utils::*;
