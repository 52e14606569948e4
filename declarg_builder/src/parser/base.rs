use std::collections::HashSet;
use thiserror::Error;

use crate::constant::*;
use crate::model::{Value, ValueType};
use crate::scanner::Key;

/// Error for an invalid parser configuration.
/// Reported by `CommandLineParser::build_parser`, before any parsing may happen.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

impl From<RegistrationError> for ConfigError {
    fn from(error: RegistrationError) -> Self {
        ConfigError(error.to_string())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum RegistrationError {
    #[error("The long name of an option cannot be empty.")]
    EmptyName,

    #[error("Short name of an option can be only one letter, got '{0}'.")]
    InvalidShort(String),

    #[error("Option '{0}' is already declared.")]
    DuplicateOption(String),

    #[error("Short name '-{0}' is already declared.")]
    DuplicateShort(char),

    #[error("Group '{0}' already exists.")]
    DuplicateGroup(String),

    #[error("Command '{0}' already exists.")]
    DuplicateCommand(String),

    #[error("Option '{option}' of type {value_type} cannot have an implicit value.")]
    UnusedImplicit {
        option: String,
        value_type: ValueType,
    },

    #[error("Option '{0}' doesn't exist.")]
    UnknownPositional(String),

    #[error("Option '{0}' is already positional.")]
    DuplicatePositional(String),

    #[error("Cannot add positional '{0}' after one with a list type.")]
    PositionalAfterList(String),

    #[error("Option '{option}' is required but is placed after a non required one '{previous}'.")]
    RequiredAfterOptional { option: String, previous: String },

    #[error("Cannot add options to a parser using commands.")]
    OptionsInCommandMode,

    #[error("Cannot add a command to a parser using options.")]
    CommandsInOptionMode,

    #[error("Invalid command '{name}': {message}")]
    Command { name: String, message: String },
}

/// The classification of a [`Fault`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// The command line did not include the program name.
    InvalidArgs,
    /// An option or positional token has no declaration.
    UnrecognizedOption,
    /// At least one required option has no value.
    MissingRequiredOption,
    /// A non-boolean option was given without a value.
    MissingOptionValue,
    /// A value does not conform to its option's type.
    InvalidOptionType,
    /// The named command does not exist.
    UnknownCommand,
}

/// Error for a command line which does not conform to the parser configuration.
///
/// Parsing stops at the first fault, except for missing required options which are reported together.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Fault {
    /// The command line did not include the program name.
    #[error("Arguments must at least contain the program name")]
    InvalidArgs,

    /// An option or positional token has no declaration.
    #[error("Unrecognized option: {0}")]
    UnrecognizedOption(String),

    /// At least one required option has no value.
    #[error("Some required options were not given: {}", .0.join(", "))]
    MissingRequiredOption(Vec<String>),

    /// A non-boolean option was given without a value.
    #[error("Option '{0}' needs a value")]
    MissingOptionValue(String),

    /// A value does not conform to its option's type.
    #[error("Option '{option}' expects a value of type {expected}, got '{value}'")]
    InvalidOptionType {
        /// The option's long name.
        option: String,
        /// The offending raw value.
        value: String,
        /// The expected (element) type.
        expected: ValueType,
    },

    /// The named command does not exist.
    #[error("Command '{0}' not found")]
    UnknownCommand(String),
}

impl Fault {
    /// The classification of this fault.
    pub fn kind(&self) -> FaultKind {
        match self {
            Fault::InvalidArgs => FaultKind::InvalidArgs,
            Fault::UnrecognizedOption(_) => FaultKind::UnrecognizedOption,
            Fault::MissingRequiredOption(_) => FaultKind::MissingRequiredOption,
            Fault::MissingOptionValue(_) => FaultKind::MissingOptionValue,
            Fault::InvalidOptionType { .. } => FaultKind::InvalidOptionType,
            Fault::UnknownCommand(_) => FaultKind::UnknownCommand,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OptionDeclaration {
    pub(crate) name: String,
    pub(crate) short: Option<char>,
    pub(crate) description: String,
    pub(crate) value_type: ValueType,
    pub(crate) required: bool,
    pub(crate) value_help: String,
    pub(crate) default_value: Option<Value>,
    pub(crate) implicit_value: Option<Value>,
}

impl OptionDeclaration {
    pub(crate) fn new(
        name: impl Into<String>,
        short: Option<char>,
        description: impl Into<String>,
        value_type: ValueType,
    ) -> Self {
        Self {
            name: name.into(),
            short,
            description: description.into(),
            value_type,
            required: false,
            value_help: DEFAULT_VALUE_HELP.to_string(),
            default_value: None,
            implicit_value: None,
        }
    }

    pub(crate) fn long_key(&self) -> Key {
        Key::Long(self.name.clone())
    }

    pub(crate) fn short_key(&self) -> Option<Key> {
        self.short.map(Key::Short)
    }
}

/// The options of a single parser (or sub-command), in declaration order.
#[derive(Debug)]
pub(crate) struct Declarations {
    options: Vec<OptionDeclaration>,
    // Each group refers to its options by index.
    groups: Vec<(String, Vec<usize>)>,
    positionals: Vec<usize>,
}

impl Default for Declarations {
    fn default() -> Self {
        Self {
            options: Vec::default(),
            groups: vec![(DEFAULT_GROUP.to_string(), Vec::default())],
            positionals: Vec::default(),
        }
    }
}

impl Declarations {
    pub(crate) fn add_group(&mut self, name: impl Into<String>) -> Result<(), RegistrationError> {
        let name = name.into();

        if self.groups.iter().any(|(existing, _)| existing == &name) {
            return Err(RegistrationError::DuplicateGroup(name));
        }

        self.groups.push((name, Vec::default()));
        Ok(())
    }

    pub(crate) fn add_option(
        &mut self,
        group: &str,
        declaration: OptionDeclaration,
    ) -> Result<(), RegistrationError> {
        if self.find(&declaration.name).is_some() {
            return Err(RegistrationError::DuplicateOption(declaration.name));
        }

        if let Some(short) = declaration.short {
            if self.options.iter().any(|o| o.short == Some(short)) {
                return Err(RegistrationError::DuplicateShort(short));
            }
        }

        let index = self.options.len();
        self.options.push(declaration);

        match self.groups.iter_mut().find(|(name, _)| name == group) {
            Some((_, members)) => members.push(index),
            None => self.groups.push((group.to_string(), vec![index])),
        }

        Ok(())
    }

    pub(crate) fn add_positional(&mut self, name: &str) -> Result<(), RegistrationError> {
        let index = self
            .options
            .iter()
            .position(|o| o.name == name)
            .ok_or_else(|| RegistrationError::UnknownPositional(name.to_string()))?;

        if self.positionals.contains(&index) {
            return Err(RegistrationError::DuplicatePositional(name.to_string()));
        }

        if let Some(previous) = self.positionals.last().map(|i| &self.options[*i]) {
            if previous.value_type.is_list() {
                return Err(RegistrationError::PositionalAfterList(name.to_string()));
            }

            if self.options[index].required && !previous.required {
                return Err(RegistrationError::RequiredAfterOptional {
                    option: name.to_string(),
                    previous: previous.name.clone(),
                });
            }
        }

        self.positionals.push(index);
        Ok(())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub(crate) fn find(&self, name: &str) -> Option<&OptionDeclaration> {
        self.options.iter().find(|o| o.name == name)
    }

    pub(crate) fn options(&self) -> &[OptionDeclaration] {
        &self.options
    }

    pub(crate) fn positionals(&self) -> impl Iterator<Item = &OptionDeclaration> {
        self.positionals.iter().map(|i| &self.options[*i])
    }

    pub(crate) fn is_positional(&self, name: &str) -> bool {
        self.positionals().any(|o| o.name == name)
    }

    /// The groups in declaration order, starting with the unnamed group.
    pub(crate) fn groups(&self) -> impl Iterator<Item = (&str, Vec<&OptionDeclaration>)> {
        self.groups.iter().map(|(name, members)| {
            (
                name.as_str(),
                members.iter().map(|i| &self.options[*i]).collect(),
            )
        })
    }

    pub(crate) fn known_keys(&self) -> HashSet<Key> {
        self.options
            .iter()
            .flat_map(|o| std::iter::once(o.long_key()).chain(o.short_key()))
            .collect()
    }
}
