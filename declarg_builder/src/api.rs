mod command;
mod core;
mod parameter;

pub use self::command::Command;
pub use self::core::{CommandLineParser, OptionGroup};
pub use self::parameter::Parameter;
