use crate::api::CommandLineParser;
use crate::model::CliResults;

/// A sub-command of a command line parser.
/// Added to the parser via [`CommandLineParser::command`](./struct.CommandLineParser.html#method.command).
///
/// The command configures its own options in `setup`, which is run once when the command is added.
/// Once the command's options have been parsed, `run` is called and its return value becomes the exit status.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::prelude::*;
/// use declarg::{CliResults, CommandLineParser, Outcome, Parameter};
///
/// struct Greet;
///
/// impl Command for Greet {
///     fn name(&self) -> String {
///         "greet".to_string()
///     }
///
///     fn description(&self) -> String {
///         "Say hello.".to_string()
///     }
///
///     fn setup<'p>(&self, parser: CommandLineParser<'p>) -> CommandLineParser<'p> {
///         parser.add(Parameter::<String>::new("who", "Who to greet.").required())
///     }
///
///     fn run(&self, results: &CliResults) -> i32 {
///         let who: String = results.get_as("who").unwrap();
///         println!("Hello {who}!");
///         0
///     }
/// }
///
/// let parser = CommandLineParser::new("program", "")
///     .command(Greet)
///     .build_parser()
///     .unwrap();
///
/// assert_eq!(
///     parser.parse_tokens(&["program", "greet", "--who=world"]),
///     Ok(Outcome::Dispatched { command: "greet".to_string(), exit_code: 0 })
/// );
/// ```
pub trait Command {
    /// The name by which the command is selected on the Cli.
    fn name(&self) -> String;

    /// Describe the command in the help message.
    fn description(&self) -> String {
        String::default()
    }

    /// Configure the options of this command.
    fn setup<'p>(&self, parser: CommandLineParser<'p>) -> CommandLineParser<'p> {
        parser
    }

    /// Run the command against its parsed options, returning the exit status.
    fn run(&self, results: &CliResults) -> i32;
}
