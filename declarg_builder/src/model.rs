use std::collections::HashMap;

/// The declared type of an option.
///
/// Every option is parsed into precisely one of these ten kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `bool`
    Boolean,
    /// `String`
    String,
    /// `i32`
    Integer,
    /// `f32`
    Float,
    /// `f64`
    Double,
    /// `Vec<bool>`
    BooleanList,
    /// `Vec<String>`
    StringList,
    /// `Vec<i32>`
    IntegerList,
    /// `Vec<f32>`
    FloatList,
    /// `Vec<f64>`
    DoubleList,
}

impl ValueType {
    /// Whether this type collects every occurrence (`true`) or only the last one (`false`).
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            ValueType::BooleanList
                | ValueType::StringList
                | ValueType::IntegerList
                | ValueType::FloatList
                | ValueType::DoubleList
        )
    }

    /// The scalar type of the elements of this type.
    /// Scalar types are their own element type.
    pub fn element(&self) -> ValueType {
        match self {
            ValueType::BooleanList => ValueType::Boolean,
            ValueType::StringList => ValueType::String,
            ValueType::IntegerList => ValueType::Integer,
            ValueType::FloatList => ValueType::Float,
            ValueType::DoubleList => ValueType::Double,
            scalar => *scalar,
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Boolean => write!(f, "boolean"),
            ValueType::String => write!(f, "string"),
            ValueType::Integer => write!(f, "integer"),
            ValueType::Float => write!(f, "float"),
            ValueType::Double => write!(f, "double"),
            list => write!(f, "list<{}>", list.element()),
        }
    }
}

/// A typed option value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A [`ValueType::Boolean`] value.
    Bool(bool),
    /// A [`ValueType::String`] value.
    Str(String),
    /// A [`ValueType::Integer`] value.
    Int(i32),
    /// A [`ValueType::Float`] value.
    Float(f32),
    /// A [`ValueType::Double`] value.
    Double(f64),
    /// A [`ValueType::BooleanList`] value.
    BoolList(Vec<bool>),
    /// A [`ValueType::StringList`] value.
    StrList(Vec<String>),
    /// A [`ValueType::IntegerList`] value.
    IntList(Vec<i32>),
    /// A [`ValueType::FloatList`] value.
    FloatList(Vec<f32>),
    /// A [`ValueType::DoubleList`] value.
    DoubleList(Vec<f64>),
}

impl Value {
    /// The type tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Bool(_) => ValueType::Boolean,
            Value::Str(_) => ValueType::String,
            Value::Int(_) => ValueType::Integer,
            Value::Float(_) => ValueType::Float,
            Value::Double(_) => ValueType::Double,
            Value::BoolList(_) => ValueType::BooleanList,
            Value::StrList(_) => ValueType::StringList,
            Value::IntList(_) => ValueType::IntegerList,
            Value::FloatList(_) => ValueType::FloatList,
            Value::DoubleList(_) => ValueType::DoubleList,
        }
    }
}

mod private {
    pub trait Sealed {}
}

/// The Rust types which may back an option.
///
/// This trait is sealed: the supported types are precisely those of [`ValueType`].
pub trait OptionType: private::Sealed + Sized {
    /// The type tag corresponding to `Self`.
    fn value_type() -> ValueType;

    /// Wrap `self` into a [`Value`].
    fn into_value(self) -> Value;

    /// Unwrap a [`Value`], if it holds a `Self`.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! option_type {
    ($t:ty, $tag:ident, $variant:ident) => {
        impl private::Sealed for $t {}

        impl OptionType for $t {
            fn value_type() -> ValueType {
                ValueType::$tag
            }

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(inner) => Some(inner.clone()),
                    _ => None,
                }
            }
        }
    };
}

option_type!(bool, Boolean, Bool);
option_type!(String, String, Str);
option_type!(i32, Integer, Int);
option_type!(f32, Float, Float);
option_type!(f64, Double, Double);
option_type!(Vec<bool>, BooleanList, BoolList);
option_type!(Vec<String>, StringList, StrList);
option_type!(Vec<i32>, IntegerList, IntList);
option_type!(Vec<f32>, FloatList, FloatList);
option_type!(Vec<f64>, DoubleList, DoubleList);

/// The values resolved by a successful parse, keyed by option (long) name.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::{CommandLineParser, Outcome, Parameter, Value};
///
/// let parser = CommandLineParser::new("program", "")
///     .add(Parameter::<i32>::new("number,n", "A number."))
///     .build_parser()
///     .unwrap();
///
/// let results = match parser.parse_tokens(&["program", "-n=3"]).unwrap() {
///     Outcome::Complete(results) => results,
///     Outcome::Dispatched { .. } => unreachable!(),
/// };
///
/// assert_eq!(results.get("number"), Some(&Value::Int(3)));
/// assert_eq!(results.get_as::<i32>("number"), Some(3));
/// assert_eq!(results.get("other"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliResults {
    values: HashMap<String, Value>,
    rest: Vec<String>,
}

impl CliResults {
    pub(crate) fn new(values: HashMap<String, Value>, rest: Vec<String>) -> Self {
        Self { values, rest }
    }

    /// Get the value of the option `name`.
    /// Returns `None` when the option was neither specified nor has a default value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Get the value of the option `name` as the Rust type `T`.
    /// Returns `None` when there is no value, or the value is not a `T`.
    pub fn get_as<T: OptionType>(&self, name: &str) -> Option<T> {
        self.values.get(name).and_then(T::from_value)
    }

    /// Whether the option `name` has a value.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Positional tokens which were not consumed by any positional option.
    pub fn rest(&self) -> &[String] {
        self.rest.as_slice()
    }

    /// The number of options with a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no option has a value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ValueType::Boolean, false, "boolean")]
    #[case(ValueType::String, false, "string")]
    #[case(ValueType::Integer, false, "integer")]
    #[case(ValueType::Float, false, "float")]
    #[case(ValueType::Double, false, "double")]
    #[case(ValueType::BooleanList, true, "list<boolean>")]
    #[case(ValueType::StringList, true, "list<string>")]
    #[case(ValueType::IntegerList, true, "list<integer>")]
    #[case(ValueType::FloatList, true, "list<float>")]
    #[case(ValueType::DoubleList, true, "list<double>")]
    fn value_types(#[case] value_type: ValueType, #[case] is_list: bool, #[case] display: &str) {
        assert_eq!(value_type.is_list(), is_list);
        assert!(!value_type.element().is_list());
        assert_eq!(value_type.to_string(), display);
    }

    #[test]
    fn option_type_tags() {
        assert_eq!(bool::value_type(), ValueType::Boolean);
        assert_eq!(String::value_type(), ValueType::String);
        assert_eq!(i32::value_type(), ValueType::Integer);
        assert_eq!(f32::value_type(), ValueType::Float);
        assert_eq!(f64::value_type(), ValueType::Double);
        assert_eq!(Vec::<bool>::value_type(), ValueType::BooleanList);
        assert_eq!(Vec::<String>::value_type(), ValueType::StringList);
        assert_eq!(Vec::<i32>::value_type(), ValueType::IntegerList);
        assert_eq!(Vec::<f32>::value_type(), ValueType::FloatList);
        assert_eq!(Vec::<f64>::value_type(), ValueType::DoubleList);
    }

    #[test]
    fn option_type_value() {
        let value = vec![1, 2].into_value();
        assert_eq!(value, Value::IntList(vec![1, 2]));
        assert_eq!(value.value_type(), ValueType::IntegerList);
        assert_eq!(Vec::<i32>::from_value(&value), Some(vec![1, 2]));
        assert_eq!(Vec::<f64>::from_value(&value), None);
        assert_eq!(i32::from_value(&value), None);
    }

    #[test]
    fn results_get() {
        let results = CliResults::new(
            HashMap::from([
                ("name".to_string(), Value::Str("abc".to_string())),
                ("pi".to_string(), Value::Double(3.14)),
            ]),
            vec!["extra".to_string()],
        );

        assert_eq!(results.len(), 2);
        assert!(!results.is_empty());
        assert!(results.contains("name"));
        assert!(!results.contains("other"));
        assert_eq!(results.get("name"), Some(&Value::Str("abc".to_string())));
        assert_eq!(results.get_as::<String>("name"), Some("abc".to_string()));
        assert_eq!(results.get_as::<f64>("pi"), Some(3.14));
        assert_eq!(results.get_as::<f32>("pi"), None);
        assert_eq!(results.get("other"), None);
        assert_eq!(results.get_as::<bool>("other"), None);
        assert_eq!(results.rest(), &["extra".to_string()]);
    }

    #[test]
    fn results_empty() {
        let results = CliResults::default();
        assert!(results.is_empty());
        assert_eq!(results.get("anything"), None);
        assert!(results.rest().is_empty());
    }
}
