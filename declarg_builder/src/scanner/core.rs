use std::collections::HashSet;

use crate::constant::*;
use crate::parser::Fault;
use crate::scanner::model::{Key, RawScan};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Scan the command line `tokens` (excluding the program name) in a single left-to-right pass.
///
/// Option values are collected per [`Key`], without any interpretation beyond quote stripping.
/// Fails on the first reference to a key outside of `known`, or on any option following a positional token.
pub(crate) fn scan(tokens: &[&str], known: &HashSet<Key>) -> Result<RawScan, Fault> {
    let mut scanner = Scanner::new(known);

    for token in tokens {
        scanner.feed(token)?;
    }

    Ok(scanner.finish())
}

struct Scanner<'k> {
    known: &'k HashSet<Key>,
    raw_scan: RawScan,
    pending: Option<Key>,
    in_positional_section: bool,
}

impl<'k> Scanner<'k> {
    fn new(known: &'k HashSet<Key>) -> Self {
        Self {
            known,
            raw_scan: RawScan::default(),
            pending: None,
            in_positional_section: false,
        }
    }

    fn feed(&mut self, token: &str) -> Result<(), Fault> {
        if self.in_positional_section {
            self.raw_scan.positionals.push(token.to_string());
            return Ok(());
        }

        if token == POSITIONAL_SEPARATOR {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Entering positional section.");
            }
            self.close_pending();
            self.in_positional_section = true;
            return Ok(());
        }

        if let Some(long) = token.strip_prefix("--") {
            self.guard()?;
            self.close_pending();

            match long.split_once(VALUE_DELIMITER) {
                Some((name, value)) => {
                    let key = self.validate(Key::Long(name.to_string()))?;
                    self.raw_scan.append(&key, strip_quotes(value));
                    self.raw_scan.key_order.push(key);
                }
                None => {
                    let key = self.validate(Key::Long(long.to_string()))?;
                    self.raw_scan.mention(&key);
                    self.pending.replace(key);
                }
            }

            return Ok(());
        }

        if let Some(cluster) = token.strip_prefix('-').filter(|c| !c.is_empty()) {
            self.guard()?;
            let (letters, value) = match cluster.split_once(VALUE_DELIMITER) {
                Some((letters, value)) => (letters, Some(value)),
                None => (cluster, None),
            };

            if letters.is_empty() {
                return Err(Fault::UnrecognizedOption(token.to_string()));
            }

            for letter in letters.chars() {
                self.close_pending();
                let key = self.validate(Key::Short(letter))?;
                self.raw_scan.mention(&key);
                self.pending.replace(key);
            }

            if let Some(value) = value {
                // The value belongs to the final letter of the cluster.
                if let Some(key) = self.pending.take() {
                    self.raw_scan.append(&key, strip_quotes(value));
                }
            }

            return Ok(());
        }

        match self.pending.take() {
            Some(key) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Value '{token}' consumed by {key}.");
                }
                self.raw_scan.append(&key, token);
            }
            None => {
                self.raw_scan.positionals.push(token.to_string());
            }
        }

        Ok(())
    }

    fn finish(mut self) -> RawScan {
        self.close_pending();

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Scanned {} option references and {} positionals.",
                self.raw_scan.key_order.len(),
                self.raw_scan.positionals.len()
            );
        }

        self.raw_scan
    }

    // Options may not follow positional tokens.
    fn guard(&self) -> Result<(), Fault> {
        match self.raw_scan.positionals.first() {
            Some(positional) => Err(Fault::UnrecognizedOption(positional.clone())),
            None => Ok(()),
        }
    }

    fn close_pending(&mut self) {
        if let Some(key) = self.pending.take() {
            self.raw_scan.append(&key, IMPLICIT_TRUE);
        }
    }

    fn validate(&self, key: Key) -> Result<Key, Fault> {
        if self.known.contains(&key) {
            Ok(key)
        } else {
            Err(Fault::UnrecognizedOption(key.to_string()))
        }
    }
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }

    value
}
