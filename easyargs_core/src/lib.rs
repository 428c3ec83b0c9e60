//! Core module for `easyargs`.
//! See [documentation root](https://docs.rs/easyargs/latest/easyargs/index.html) for full details.
#![deny(missing_docs)]
mod assertion;
pub mod constant;
mod error;
mod model;
mod parser;
pub mod prelude;
mod store;

pub use error::ArgError;
pub use model::Setting;
pub use store::{normalize, SettingsStore};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
