use std::collections::BTreeMap;

use crate::api::{Command, Parameter};
use crate::constant::*;
use crate::model::OptionType;
use crate::parser::{
    CommandEntry, CommandParameter, ConfigError, ConsoleInterface, Declarations, GeneralParser,
    Handler, ParseUnit, Printer, RegistrationError, UserInterface,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Unset,
    Options,
    Commands,
}

/// The base command line parser.
///
/// A command line parser either accepts options, or dispatches to sub-commands; never both.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::CommandLineParser;
///
/// let parser = CommandLineParser::new("program", "My program that does awesome stuff.")
///     // Configure with CommandLineParser::add, CommandLineParser::group, CommandLineParser::command, etc.
///     .build();
/// parser.parse_tokens(&["program"]).unwrap();
/// ```
pub struct CommandLineParser<'a> {
    program: String,
    description: String,
    mode: Mode,
    declarations: Declarations,
    commands: BTreeMap<String, CommandEntry<'a>>,
    deferred_error: Option<ConfigError>,
}

impl<'a> CommandLineParser<'a> {
    /// Create a command line parser.
    pub fn new(program: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            description: description.into(),
            mode: Mode::Unset,
            declarations: Declarations::default(),
            commands: BTreeMap::default(),
            deferred_error: None,
        }
    }

    /// Add an option to the command line parser.
    ///
    /// The order of options determines their order in the help message.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{CommandLineParser, Outcome, Parameter, Value};
    ///
    /// let parser = CommandLineParser::new("program", "")
    ///     .add(Parameter::<i32>::new("a", ""))
    ///     .add(Parameter::<f64>::new("b", "").default_value(0.5))
    ///     .build();
    ///
    /// if let Ok(Outcome::Complete(results)) = parser.parse_tokens(&["program", "--a=1"]) {
    ///     assert_eq!(results.get("a"), Some(&Value::Int(1)));
    ///     assert_eq!(results.get("b"), Some(&Value::Double(0.5)));
    /// }
    /// ```
    pub fn add<T: OptionType>(self, parameter: Parameter<T>) -> Self {
        self.register(DEFAULT_GROUP, parameter)
    }

    /// Add a named group of options to the command line parser.
    /// Groups organize the help message only; they do not affect the parse.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{CommandLineParser, Parameter};
    ///
    /// let parser = CommandLineParser::new("program", "")
    ///     .add(Parameter::switch("verbose", "Be verbose."))
    ///     .group("Output", |group| {
    ///         group
    ///             .add(Parameter::<String>::new("format", "The output format."))
    ///             .add(Parameter::<String>::new("path,p", "The output path."))
    ///     })
    ///     .build();
    ///
    /// assert!(parser.help().contains("Output:\n\n  --format VALUE\n"));
    /// ```
    pub fn group(
        mut self,
        name: impl Into<String>,
        setup_fn: impl FnOnce(OptionGroup<'a>) -> OptionGroup<'a>,
    ) -> Self {
        let name = name.into();

        if let Err(error) = self.enter(Mode::Options) {
            self.defer(error);
        } else if let Err(error) = self.declarations.add_group(name.clone()) {
            self.defer(error);
        }

        let group = setup_fn(OptionGroup { inner: self, name });
        group.inner
    }

    /// Parse the named options positionally, in the order given.
    ///
    /// A required positional may not follow a non-required one, and a list positional must be the last.
    /// Once a list positional is reached, it takes all of the remaining positional tokens.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{CommandLineParser, Outcome, Parameter, Value};
    ///
    /// let parser = CommandLineParser::new("program", "")
    ///     .add(Parameter::<String>::new("source", "").required())
    ///     .add(Parameter::<Vec<String>>::new("targets", ""))
    ///     .positional(["source", "targets"])
    ///     .build();
    ///
    /// if let Ok(Outcome::Complete(results)) = parser.parse_tokens(&["program", "a", "b", "c"]) {
    ///     assert_eq!(results.get_as::<String>("source"), Some("a".to_string()));
    ///     assert_eq!(results.get_as::<Vec<String>>("targets"), Some(vec!["b".to_string(), "c".to_string()]));
    /// }
    /// ```
    pub fn positional(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        if let Err(error) = self.enter(Mode::Options) {
            self.defer(error);
            return self;
        }

        for name in names {
            if let Err(error) = self.declarations.add_positional(&name.into()) {
                self.defer(error);
            }
        }

        self
    }

    /// Add a sub-command to the command line parser.
    ///
    /// The command's `setup` is run immediately, against a parser named `"{program} {command}"`.
    /// See [`Command`] for an example.
    pub fn command(self, command: impl Command + 'a) -> Self {
        let name = command.name();
        let description = command.description();
        let command_program = format!("{} {name}", self.program);
        let inner = command.setup(CommandLineParser::new(command_program, description));
        self.register_command(name, Handler::User(Box::new(command)), inner)
    }

    /// Add the `help [COMMAND]` sub-command to the command line parser.
    ///
    /// Without a `COMMAND`, prints the help message of this parser.
    /// With a known `COMMAND`, prints the help message of that sub-command.
    /// With an unknown `COMMAND`, prints the help message of this parser and exits with status `1`.
    pub fn help_command(self) -> Self {
        let command_program = format!("{} {HELP_COMMAND_NAME}", self.program);
        let inner = CommandLineParser::new(command_program, HELP_COMMAND_DESCRIPTION)
            .add(Parameter::<String>::new(
                HELP_COMMAND_OPTION,
                HELP_COMMAND_OPTION_DESCRIPTION,
            ))
            .positional([HELP_COMMAND_OPTION]);
        self.register_command(HELP_COMMAND_NAME.to_string(), Handler::Help, inner)
    }

    fn register<T: OptionType>(mut self, group: &str, parameter: Parameter<T>) -> Self {
        if let Err(error) = self.enter(Mode::Options) {
            self.defer(error);
            return self;
        }

        let result = parameter
            .declare()
            .and_then(|declaration| self.declarations.add_option(group, declaration));

        if let Err(error) = result {
            self.defer(error);
        }

        self
    }

    fn register_command(
        mut self,
        name: String,
        handler: Handler<'a>,
        inner: CommandLineParser<'a>,
    ) -> Self {
        if let Err(error) = self.enter(Mode::Commands) {
            self.defer(error);
            return self;
        }

        if self.commands.contains_key(&name) {
            self.defer(RegistrationError::DuplicateCommand(name));
            return self;
        }

        match inner.build_unit() {
            Ok(unit) => {
                self.commands
                    .insert(name, CommandEntry::new(handler, unit));
            }
            Err(ConfigError(message)) => {
                self.defer(RegistrationError::Command { name, message });
            }
        }

        self
    }

    fn enter(&mut self, mode: Mode) -> Result<(), RegistrationError> {
        match (self.mode, mode) {
            (Mode::Unset, _) => {
                self.mode = mode;
                Ok(())
            }
            (current, requested) if current == requested => Ok(()),
            (_, Mode::Commands) => Err(RegistrationError::CommandsInOptionMode),
            (_, _) => Err(RegistrationError::OptionsInCommandMode),
        }
    }

    // Only the first configuration error is reported.
    fn defer(&mut self, error: RegistrationError) {
        if self.deferred_error.is_none() {
            self.deferred_error.replace(error.into());
        }
    }

    fn build_unit(self) -> Result<ParseUnit<'a>, ConfigError> {
        if let Some(error) = self.deferred_error {
            return Err(error);
        }

        let terminal_width = Printer::terminal_width();

        match self.mode {
            Mode::Commands => {
                let summaries = self
                    .commands
                    .values()
                    .map(|entry| CommandParameter::new(entry.usage(), entry.description()))
                    .collect();
                let printer = Printer::commands(
                    self.program,
                    self.description,
                    summaries,
                    terminal_width,
                );
                Ok(ParseUnit::commands(self.commands, printer))
            }
            Mode::Unset | Mode::Options => {
                let printer = Printer::options(
                    self.program,
                    self.description,
                    &self.declarations,
                    terminal_width,
                );
                Ok(ParseUnit::options(self.declarations, printer))
            }
        }
    }

    fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser<'a>, ConfigError> {
        Ok(GeneralParser::new(self.build_unit()?, user_interface))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    pub fn build_parser(self) -> Result<GeneralParser<'a>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser<'a> {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

/// A named group of options, under construction.
/// See [`CommandLineParser::group`].
pub struct OptionGroup<'a> {
    inner: CommandLineParser<'a>,
    name: String,
}

impl<'a> OptionGroup<'a> {
    /// Add an option to this group.
    pub fn add<T: OptionType>(mut self, parameter: Parameter<T>) -> Self {
        self.inner = self.inner.register(&self.name, parameter);
        self
    }
}
