mod assemble;
mod base;
mod coerce;
mod interface;
mod middleware;
mod printer;

pub use self::base::{ConfigError, Fault, FaultKind};
pub(crate) use self::base::{Declarations, OptionDeclaration, RegistrationError};
pub(crate) use self::interface::{ConsoleInterface, UserInterface};
pub use self::middleware::{GeneralParser, Outcome};
pub(crate) use self::middleware::{CommandEntry, Handler, ParseUnit};
pub(crate) use self::printer::{CommandParameter, Printer};

#[cfg(test)]
pub(crate) use self::interface::util;
