use std::collections::BTreeMap;
use std::env;

use crate::api::Command;
use crate::constant::*;
use crate::model::CliResults;
use crate::parser::assemble::assemble;
use crate::parser::interface::UserInterface;
use crate::parser::{Declarations, Fault, Printer};
use crate::scanner::scan;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The result of a successful parse.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// The command line was resolved into values.
    Complete(CliResults),
    /// A sub-command was resolved and its handler has run.
    Dispatched {
        /// The name of the (innermost) sub-command.
        command: String,
        /// The status returned by the sub-command's handler.
        exit_code: i32,
    },
}

pub(crate) enum Handler<'a> {
    User(Box<dyn Command + 'a>),
    Help,
}

pub(crate) struct CommandEntry<'a> {
    handler: Handler<'a>,
    unit: ParseUnit<'a>,
}

impl<'a> CommandEntry<'a> {
    pub(crate) fn new(handler: Handler<'a>, unit: ParseUnit<'a>) -> Self {
        Self { handler, unit }
    }

    pub(crate) fn usage(&self) -> &str {
        self.unit.printer.usage()
    }

    pub(crate) fn description(&self) -> &str {
        self.unit.printer.description()
    }
}

enum Body<'a> {
    Options(Declarations),
    Commands(BTreeMap<String, CommandEntry<'a>>),
}

/// A single level of the parser: either a set of options, or a set of sub-commands.
pub(crate) struct ParseUnit<'a> {
    body: Body<'a>,
    printer: Printer,
}

impl<'a> ParseUnit<'a> {
    pub(crate) fn options(declarations: Declarations, printer: Printer) -> Self {
        Self {
            body: Body::Options(declarations),
            printer,
        }
    }

    pub(crate) fn commands(commands: BTreeMap<String, CommandEntry<'a>>, printer: Printer) -> Self {
        Self {
            body: Body::Commands(commands),
            printer,
        }
    }

    pub(crate) fn usage(&self) -> &str {
        self.printer.usage()
    }

    pub(crate) fn help(&self) -> String {
        self.printer.help()
    }

    fn invoke(
        &self,
        tokens: &[&str],
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<Outcome, Fault> {
        let commands = match &self.body {
            Body::Options(declarations) => {
                let raw_scan = scan(tokens, &declarations.known_keys())?;
                return Ok(Outcome::Complete(assemble(declarations, raw_scan)?));
            }
            Body::Commands(commands) => commands,
        };

        let (name, remaining) = match tokens.split_first() {
            Some(split) => split,
            None => return Ok(Outcome::Complete(CliResults::default())),
        };
        let entry = commands
            .get(*name)
            .ok_or_else(|| Fault::UnknownCommand(name.to_string()))?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Dispatching to command '{name}'.");
        }

        match entry.unit.invoke(remaining, user_interface)? {
            Outcome::Complete(results) => {
                let exit_code = match &entry.handler {
                    Handler::User(command) => command.run(&results),
                    Handler::Help => self.run_help(commands, &results, user_interface),
                };

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Command '{name}' exited with {exit_code}.");
                }

                Ok(Outcome::Dispatched {
                    command: name.to_string(),
                    exit_code,
                })
            }
            dispatched => Ok(dispatched),
        }
    }

    fn run_help(
        &self,
        commands: &BTreeMap<String, CommandEntry<'a>>,
        results: &CliResults,
        user_interface: &(impl UserInterface + ?Sized),
    ) -> i32 {
        match results.get_as::<String>(HELP_COMMAND_OPTION) {
            Some(name) => match commands.get(&name) {
                Some(entry) => {
                    entry.unit.printer.print_help(user_interface);
                    0
                }
                None => {
                    self.printer.print_help(user_interface);
                    1
                }
            },
            None => {
                self.printer.print_help(user_interface);
                0
            }
        }
    }
}

/// The configured command line parser.
/// Built via `CommandLineParser::build` or `CommandLineParser::build_parser`.
pub struct GeneralParser<'a> {
    unit: ParseUnit<'a>,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> GeneralParser<'a> {
    pub(crate) fn new(unit: ParseUnit<'a>, user_interface: Box<dyn UserInterface>) -> Self {
        Self {
            unit,
            user_interface,
        }
    }

    /// Run the command line parser against the input tokens.
    /// The first token is the program name, and is otherwise ignored.
    ///
    /// Parsing happens in two phases:
    /// 1. Token scanning collects the raw values of each option.
    /// Any reference to an undeclared option stops the parse.
    /// 2. Resolution assigns positionals, converts each raw value to its option's type, and applies defaults.
    ///
    /// In the case of a sub-command based command line parser, the first token after the program name selects the sub-command.
    /// The remaining tokens are parsed by that sub-command, after which its handler is run.
    /// Without any tokens beyond the program name, the parse completes without any values.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{CommandLineParser, Fault, Outcome, Parameter};
    ///
    /// let parser = CommandLineParser::new("program", "")
    ///     .add(Parameter::<i32>::new("number", "").required())
    ///     .build_parser()
    ///     .unwrap();
    ///
    /// assert!(matches!(parser.parse_tokens(&["program", "--number=1"]), Ok(Outcome::Complete(_))));
    /// assert_eq!(
    ///     parser.parse_tokens(&["program"]),
    ///     Err(Fault::MissingRequiredOption(vec!["number".to_string()]))
    /// );
    /// assert_eq!(parser.parse_tokens(&[]), Err(Fault::InvalidArgs));
    /// ```
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<Outcome, Fault> {
        let (_program, arguments) = tokens.split_first().ok_or(Fault::InvalidArgs)?;
        self.unit.invoke(arguments, &*self.user_interface)
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// If a sub-command is dispatched, exits with the status of its handler (via `std::process::exit`).
    /// See [`GeneralParser::parse_tokens`] for details.
    pub fn parse(&self) -> Result<CliResults, Fault> {
        let command_input: Vec<String> = env::args().collect();

        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )? {
            Outcome::Complete(results) => Ok(results),
            Outcome::Dispatched { exit_code, .. } => std::process::exit(exit_code),
        }
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// If a fault is encountered, prints it and exits with error code `1` (via `std::process::exit`).
    /// See [`GeneralParser::parse`] for details.
    pub fn parse_or_exit(&self) -> CliResults {
        match self.parse() {
            Ok(results) => results,
            Err(fault) => {
                self.user_interface.print_error(fault.to_string());
                self.user_interface
                    .print_error(format!("See usage: {}", self.unit.usage()));
                std::process::exit(1);
            }
        }
    }

    /// Render the help message.
    pub fn help(&self) -> String {
        self.unit.help()
    }

    /// Print the help message.
    pub fn print_help(&self) {
        self.unit.printer.print_help(&*self.user_interface);
    }
}
