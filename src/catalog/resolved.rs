/// Resolved argument set: flag token → supplied value.
use std::collections::HashMap;

use clap::ArgMatches;

use super::{Catalog, ValueKind};

/// A supplied value for one flag. Absence is absence from the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// Boolean-true: emitted as a bare token.
    Switch,
    /// One value: emitted as `flag value`.
    One(String),
    /// Ordered list: emitted as `flag v1 v2 ...`, space-joined.
    Many(Vec<String>),
}

/// Mapping from flag token to supplied value, built once per invocation by
/// the host parser and consumed once by the assembler.
#[derive(Debug, Default)]
pub struct ResolvedArgs {
    values: HashMap<String, FlagValue>,
}

impl ResolvedArgs {
    /// Collect the catalog-declared values out of parsed matches.
    #[must_use]
    pub fn from_matches(catalog: &Catalog, matches: &ArgMatches) -> Self {
        let mut resolved = Self::default();
        for entry in catalog.entries() {
            match entry.kind {
                ValueKind::None => {
                    if matches.get_flag(entry.id()) {
                        resolved.set(entry.token, FlagValue::Switch);
                    }
                }
                ValueKind::Single { .. } => {
                    if let Some(value) = matches.get_one::<String>(entry.id()) {
                        resolved.set(entry.token, FlagValue::One(value.clone()));
                    }
                }
                ValueKind::Pair { .. } => {
                    if let Some(values) = matches.get_many::<String>(entry.id()) {
                        resolved.set(entry.token, FlagValue::Many(values.cloned().collect()));
                    }
                }
            }
        }
        resolved
    }

    /// Set (or overwrite) the value for a token.
    pub fn set(&mut self, token: impl Into<String>, value: FlagValue) {
        self.values.insert(token.into(), value);
    }

    /// Look up the value supplied for a token, if any.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&FlagValue> {
        self.values.get(token)
    }

    /// Number of flags with a supplied value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no flag has a supplied value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
