use std::collections::HashMap;

use crate::model::{CliResults, Value};
use crate::parser::coerce::coerce_occurrences;
use crate::parser::{Declarations, Fault, OptionDeclaration};
use crate::scanner::{Key, RawScan};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Resolve the typed value of every declared option from a scan of the command line.
///
/// Positional slots are filled first, and take precedence over any named occurrence.
/// Missing required options are collected and reported together.
pub(crate) fn assemble(declarations: &Declarations, raw_scan: RawScan) -> Result<CliResults, Fault> {
    let positionals = &raw_scan.positionals;
    let mut values: HashMap<String, Value> = HashMap::default();

    if declarations.positionals().next().is_none() {
        if let Some(first) = positionals.first() {
            return Err(Fault::UnrecognizedOption(first.clone()));
        }
    }

    let mut offset = 0;

    for declaration in declarations.positionals() {
        if offset == positionals.len() {
            break;
        }

        if declaration.value_type.is_list() {
            let value = coerce_occurrences(declaration, &positionals[offset..])?;
            values.insert(declaration.name.clone(), value);
            offset = positionals.len();
            break;
        }

        let value = coerce_occurrences(declaration, &positionals[offset..offset + 1])?;
        values.insert(declaration.name.clone(), value);
        offset += 1;
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Resolved {} positional options, with {} tokens left over.",
            values.len(),
            positionals.len() - offset
        );
    }

    let mut missing = Vec::default();

    for declaration in declarations.options() {
        if values.contains_key(&declaration.name) {
            continue;
        }

        let long = raw_scan.values(&declaration.long_key());
        let short = declaration
            .short_key()
            .and_then(|key| raw_scan.values(&key));

        let raw = match (long, short) {
            (Some(long), Some(short)) => Some(merge(declaration, long, short, &raw_scan.key_order)),
            (Some(long), None) => Some(long.clone()),
            (None, Some(short)) => Some(short.clone()),
            (None, None) => None,
        };

        match raw {
            Some(raw) => {
                let value = coerce_occurrences(declaration, &raw)?;
                values.insert(declaration.name.clone(), value);
            }
            None => match &declaration.default_value {
                Some(default) => {
                    values.insert(declaration.name.clone(), default.clone());
                }
                None if declaration.required => {
                    missing.push(declaration.name.clone());
                }
                None => {}
            },
        }
    }

    if !missing.is_empty() {
        return Err(Fault::MissingRequiredOption(missing));
    }

    Ok(CliResults::new(values, positionals[offset..].to_vec()))
}

// Interleave the long and short occurrences in the order they were referenced.
fn merge(
    declaration: &OptionDeclaration,
    long: &[String],
    short: &[String],
    key_order: &[Key],
) -> Vec<String> {
    let long_key = declaration.long_key();
    let short_key = declaration.short_key();
    let mut long_values = long.iter();
    let mut short_values = short.iter();
    let mut merged = Vec::with_capacity(long.len() + short.len());

    for key in key_order {
        let next = if key == &long_key {
            long_values.next()
        } else if Some(key) == short_key.as_ref() {
            short_values.next()
        } else {
            None
        };

        if let Some(value) = next {
            merged.push(value.clone());
        }
    }

    merged
}
