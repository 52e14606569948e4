//! Traits which, typically, may be imported without concern: `use declarg::prelude::*`.

// Needs to be imported in order to implement a sub-command.
pub use crate::api::Command;
// Needs to be imported in order to use `CliResults::get_as` with an explicit type.
pub use crate::model::OptionType;
