use crate::constant::*;
use crate::model::{OptionType, ValueType};
use crate::parser::{OptionDeclaration, RegistrationError};

/// An option parameter, typed by its value `T`.
/// Added to the parser via [`CommandLineParser::add`](./struct.CommandLineParser.html#method.add).
///
/// The name is given as `"long"` or `"long,s"`, where `s` is the single letter short name.
/// On the Cli, the option is referenced as `--long` and (optionally) `-s`.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::{CommandLineParser, Outcome, Parameter, Value};
///
/// let parser = CommandLineParser::new("program", "")
///     .add(Parameter::<String>::new("name,n", "The name.").value_help("NAME"))
///     .add(Parameter::<Vec<i32>>::new("item", "The items."))
///     .add(Parameter::switch("verbose,v", "Be verbose."))
///     .build_parser()
///     .unwrap();
///
/// let outcome = parser
///     .parse_tokens(&["program", "-v", "-n", "abc", "--item=1", "--item=2"])
///     .unwrap();
///
/// if let Outcome::Complete(results) = outcome {
///     assert_eq!(results.get_as::<String>("name"), Some("abc".to_string()));
///     assert_eq!(results.get("item"), Some(&Value::IntList(vec![1, 2])));
///     assert_eq!(results.get_as::<bool>("verbose"), Some(true));
/// }
/// ```
pub struct Parameter<T: OptionType> {
    name: String,
    description: String,
    required: bool,
    value_help: Option<String>,
    default_value: Option<T>,
    implicit_value: Option<T>,
}

impl<T: OptionType> Parameter<T> {
    /// Create an option parameter.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: false,
            value_help: None,
            default_value: None,
            implicit_value: None,
        }
    }

    /// Require a value for this option.
    /// A required option which has a default value is always satisfied.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Document the value placeholder for this option (defaults to `VALUE`).
    pub fn value_help(mut self, value_help: impl Into<String>) -> Self {
        self.value_help.replace(value_help.into());
        self
    }

    /// The value of this option when it is not given on the Cli.
    pub fn default_value(mut self, value: T) -> Self {
        self.default_value.replace(value);
        self
    }

    /// The value of this option when it is given on the Cli without a value.
    /// Only applies to non-boolean scalars; setting it on a boolean or list option is a configuration error.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{CommandLineParser, Fault, Outcome, Parameter, Value};
    ///
    /// let parser = CommandLineParser::new("program", "")
    ///     .add(Parameter::<String>::new("color", "").implicit_value("always".to_string()))
    ///     .add(Parameter::<String>::new("format", ""))
    ///     .build_parser()
    ///     .unwrap();
    ///
    /// if let Ok(Outcome::Complete(results)) = parser.parse_tokens(&["program", "--color"]) {
    ///     assert_eq!(results.get("color"), Some(&Value::Str("always".to_string())));
    /// }
    ///
    /// assert_eq!(
    ///     parser.parse_tokens(&["program", "--format"]),
    ///     Err(Fault::MissingOptionValue("format".to_string()))
    /// );
    /// ```
    pub fn implicit_value(mut self, value: T) -> Self {
        self.implicit_value.replace(value);
        self
    }

    pub(super) fn declare(self) -> Result<OptionDeclaration, RegistrationError> {
        let Parameter {
            name,
            description,
            required,
            value_help,
            default_value,
            implicit_value,
        } = self;
        let (long, short) = split_name(&name)?;
        let value_type = T::value_type();

        // Only non-boolean scalars are ever given as a flag without a value.
        if implicit_value.is_some() && (value_type.is_list() || value_type == ValueType::Boolean) {
            return Err(RegistrationError::UnusedImplicit {
                option: long.to_string(),
                value_type,
            });
        }

        let mut declaration = OptionDeclaration::new(long, short, description, value_type);
        declaration.required = required;

        if let Some(value_help) = value_help {
            declaration.value_help = value_help;
        }

        declaration.default_value = default_value.map(OptionType::into_value);
        declaration.implicit_value = implicit_value.map(OptionType::into_value);
        Ok(declaration)
    }
}

impl Parameter<bool> {
    /// Create a boolean option parameter (a flag).
    /// Given on the Cli without a value, it resolves to `true`.
    pub fn switch(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description)
    }
}

fn split_name(name: &str) -> Result<(&str, Option<char>), RegistrationError> {
    let (long, short) = match name.rsplit_once(NAME_DELIMITER) {
        Some((long, short)) => {
            let mut letters = short.chars();

            match (letters.next(), letters.next()) {
                (Some(letter), None) if letter.is_alphabetic() => (long, Some(letter)),
                _ => return Err(RegistrationError::InvalidShort(short.to_string())),
            }
        }
        None => (name, None),
    };

    if long.is_empty() {
        return Err(RegistrationError::EmptyName);
    }

    Ok((long, short))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;
    use rstest::rstest;

    #[rstest]
    #[case("name", "name", None)]
    #[case("name,n", "name", Some('n'))]
    #[case("name,N", "name", Some('N'))]
    #[case("dry-run,d", "dry-run", Some('d'))]
    #[case("x,x", "x", Some('x'))]
    fn split_names(#[case] name: &str, #[case] long: &str, #[case] short: Option<char>) {
        assert_eq!(split_name(name), Ok((long, short)));
    }

    #[rstest]
    #[case("", RegistrationError::EmptyName)]
    #[case(",n", RegistrationError::EmptyName)]
    #[case("name,", RegistrationError::InvalidShort("".to_string()))]
    #[case("name,nn", RegistrationError::InvalidShort("nn".to_string()))]
    #[case("name,1", RegistrationError::InvalidShort("1".to_string()))]
    #[case("name,-", RegistrationError::InvalidShort("-".to_string()))]
    fn name_invalid(#[case] name: &str, #[case] expected: RegistrationError) {
        assert_eq!(split_name(name), Err(expected));
    }

    #[test]
    fn declare() {
        // Setup
        let parameter = Parameter::<i32>::new("number,n", "A number.")
            .required()
            .value_help("N")
            .default_value(1)
            .implicit_value(2);

        // Execute
        let declaration = parameter.declare().unwrap();

        // Verify
        assert_eq!(declaration.name, "number");
        assert_eq!(declaration.short, Some('n'));
        assert_eq!(declaration.description, "A number.");
        assert_eq!(declaration.value_type, ValueType::Integer);
        assert!(declaration.required);
        assert_eq!(declaration.value_help, "N");
        assert_eq!(declaration.default_value, Some(Value::Int(1)));
        assert_eq!(declaration.implicit_value, Some(Value::Int(2)));
    }

    #[test]
    fn declare_defaults() {
        // Execute
        let declaration = Parameter::<Vec<f64>>::new("values", "").declare().unwrap();

        // Verify
        assert_eq!(declaration.name, "values");
        assert_eq!(declaration.short, None);
        assert_eq!(declaration.value_type, ValueType::DoubleList);
        assert!(!declaration.required);
        assert_eq!(declaration.value_help, "VALUE");
        assert_eq!(declaration.default_value, None);
        assert_eq!(declaration.implicit_value, None);
    }

    #[test]
    fn switch() {
        // Execute
        let declaration = Parameter::switch("verbose,v", "").declare().unwrap();

        // Verify
        assert_eq!(declaration.value_type, ValueType::Boolean);
        assert_eq!(declaration.short, Some('v'));
    }

    #[rstest]
    #[case(Parameter::<Vec<String>>::new("files", "").implicit_value(vec!["x".to_string()]).declare(), ValueType::StringList)]
    #[case(Parameter::<Vec<i32>>::new("numbers", "").implicit_value(vec![1]).declare(), ValueType::IntegerList)]
    #[case(Parameter::switch("verbose", "").implicit_value(false).declare(), ValueType::Boolean)]
    fn declare_unused_implicit(
        #[case] result: Result<OptionDeclaration, RegistrationError>,
        #[case] value_type: ValueType,
    ) {
        // Verify
        assert_matches!(
            result,
            Err(RegistrationError::UnusedImplicit { option: _, value_type: actual }) if actual == value_type
        );
    }

    #[test]
    fn declare_invalid() {
        // Execute
        let error = Parameter::<String>::new("name,ab", "").declare().unwrap_err();

        // Verify
        assert_eq!(error, RegistrationError::InvalidShort("ab".to_string()));
    }
}
