//! Builder module for `declarg`.
//! See [documentation root](https://docs.rs/declarg/latest/declarg/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;
mod scanner;

pub use api::*;
pub use model::*;
pub use parser::{ConfigError, Fault, FaultKind, GeneralParser, Outcome};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
