use std::collections::HashMap;

/// The spelling under which an option was referenced on the command line.
///
/// Long names and short letters live in separate namespaces, so `--n` and `-n` never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Key {
    Long(String),
    Short(char),
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Long(name) => write!(f, "--{name}"),
            Key::Short(letter) => write!(f, "-{letter}"),
        }
    }
}

/// The untyped result of a single pass over the command line tokens.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct RawScan {
    /// Raw values per key, in the order they appeared.
    pub(crate) occurrences: HashMap<Key, Vec<String>>,
    /// Every key, once per time it was referenced.
    pub(crate) key_order: Vec<Key>,
    /// Tokens which did not belong to any option.
    pub(crate) positionals: Vec<String>,
}

impl RawScan {
    pub(crate) fn values(&self, key: &Key) -> Option<&Vec<String>> {
        self.occurrences.get(key)
    }

    pub(super) fn mention(&mut self, key: &Key) {
        self.occurrences.entry(key.clone()).or_default();
        self.key_order.push(key.clone());
    }

    pub(super) fn append(&mut self, key: &Key, value: impl Into<String>) {
        self.occurrences
            .entry(key.clone())
            .or_default()
            .push(value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_display() {
        assert_eq!(Key::Long("name".to_string()).to_string(), "--name");
        assert_eq!(Key::Short('n').to_string(), "-n");
        assert_ne!(Key::Long("n".to_string()), Key::Short('n'));
    }

    #[test]
    fn raw_scan() {
        // Setup
        let long = Key::Long("name".to_string());
        let short = Key::Short('n');
        let mut raw_scan = RawScan::default();

        // Execute
        raw_scan.mention(&long);
        raw_scan.append(&long, "a");
        raw_scan.mention(&short);
        raw_scan.mention(&long);
        raw_scan.append(&long, "b");

        // Verify
        assert_eq!(
            raw_scan.values(&long),
            Some(&vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(raw_scan.values(&short), Some(&vec![]));
        assert_eq!(raw_scan.values(&Key::Short('x')), None);
        assert_eq!(raw_scan.key_order, vec![long.clone(), short, long]);
        assert!(raw_scan.positionals.is_empty());
    }
}
