//! # SalesDash Config
//!
//! Configuration management for SalesDash.
//!
//! Settings come from built-in defaults, an optional TOML file, an optional
//! `.env` file, and the process environment, in increasing precedence.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
