use std::str::FromStr;
use thiserror::Error;

use crate::constant::*;
use crate::model::{Value, ValueType};
use crate::parser::{Fault, OptionDeclaration};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{value}' is not a valid {expected}.")]
struct ConversionError {
    value: String,
    expected: ValueType,
}

impl ConversionError {
    fn new(value: &str, expected: ValueType) -> Self {
        Self {
            value: value.to_string(),
            expected,
        }
    }

    fn into_fault(self, option: &str) -> Fault {
        Fault::InvalidOptionType {
            option: option.to_string(),
            value: self.value,
            expected: self.expected,
        }
    }
}

/// Convert the raw occurrences of an option (given via its long/short names, or positionally) into its typed value.
///
/// A lone `"true"` on a non-boolean scalar stands for a flag given without a value.
pub(crate) fn coerce_occurrences(
    declaration: &OptionDeclaration,
    raw: &[String],
) -> Result<Value, Fault> {
    let implicit_only = matches!(raw, [only] if only == IMPLICIT_TRUE);

    if implicit_only
        && !declaration.value_type.is_list()
        && declaration.value_type != ValueType::Boolean
    {
        return match &declaration.implicit_value {
            Some(value) => Ok(value.clone()),
            None => Err(Fault::MissingOptionValue(declaration.name.clone())),
        };
    }

    coerce_values(declaration, raw)
}

// Scalars take the last value, lists take them all.
fn coerce_values(declaration: &OptionDeclaration, raw: &[String]) -> Result<Value, Fault> {
    let convert = || -> Result<Value, ConversionError> {
        if declaration.value_type.is_list() {
            return convert_list(declaration.value_type, raw);
        }

        match raw.last() {
            Some(last) => convert_scalar(declaration.value_type, last),
            // Every scanned occurrence carries at least one value.
            None => unreachable!("internal error - option without any values"),
        }
    };

    convert().map_err(|error| error.into_fault(&declaration.name))
}

fn convert_scalar(value_type: ValueType, raw: &str) -> Result<Value, ConversionError> {
    Ok(match value_type {
        ValueType::Boolean => Value::Bool(to_boolean(raw)?),
        ValueType::String => Value::Str(raw.to_string()),
        ValueType::Integer => Value::Int(to_integer(raw)?),
        ValueType::Float => Value::Float(to_decimal(raw, ValueType::Float)?),
        ValueType::Double => Value::Double(to_decimal(raw, ValueType::Double)?),
        list => unreachable!("internal error - '{list}' is not a scalar"),
    })
}

fn convert_list(value_type: ValueType, raw: &[String]) -> Result<Value, ConversionError> {
    Ok(match value_type {
        ValueType::BooleanList => Value::BoolList(
            raw.iter()
                .map(|r| to_boolean(r))
                .collect::<Result<Vec<bool>, _>>()?,
        ),
        ValueType::StringList => Value::StrList(raw.to_vec()),
        ValueType::IntegerList => Value::IntList(
            raw.iter()
                .map(|r| to_integer(r))
                .collect::<Result<Vec<i32>, _>>()?,
        ),
        ValueType::FloatList => Value::FloatList(
            raw.iter()
                .map(|r| to_decimal(r, ValueType::Float))
                .collect::<Result<Vec<f32>, _>>()?,
        ),
        ValueType::DoubleList => Value::DoubleList(
            raw.iter()
                .map(|r| to_decimal(r, ValueType::Double))
                .collect::<Result<Vec<f64>, _>>()?,
        ),
        scalar => unreachable!("internal error - '{scalar}' is not a list"),
    })
}

fn to_boolean(raw: &str) -> Result<bool, ConversionError> {
    match raw {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConversionError::new(raw, ValueType::Boolean)),
    }
}

fn is_digits(raw: &str) -> bool {
    !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit())
}

fn unsigned(raw: &str) -> &str {
    raw.strip_prefix(|c| c == '+' || c == '-').unwrap_or(raw)
}

// [+-]?\d+
fn to_integer(raw: &str) -> Result<i32, ConversionError> {
    if !is_digits(unsigned(raw)) {
        return Err(ConversionError::new(raw, ValueType::Integer));
    }

    // Out of range values fail here.
    i32::from_str(raw).map_err(|_| ConversionError::new(raw, ValueType::Integer))
}

// [+-]?(\d*\.)?\d+
fn to_decimal<T: FromStr>(raw: &str, value_type: ValueType) -> Result<T, ConversionError> {
    let valid = match unsigned(raw).split_once('.') {
        Some((whole, fraction)) => {
            (whole.is_empty() || is_digits(whole)) && is_digits(fraction)
        }
        None => is_digits(unsigned(raw)),
    };

    if !valid {
        return Err(ConversionError::new(raw, value_type));
    }

    T::from_str(raw).map_err(|_| ConversionError::new(raw, value_type))
}
