//! Inspection operations: value lookup and the provenance report, plus the
//! result type callers use to display them.

use std::fmt;

use crate::error::LdaprcError;
use crate::types::SettingsTable;

/// Result of an inspection operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum RcResult {
    /// A single setting's resolved value.
    Value(String),
    /// Provenance entries as `(raw_name, source description)` pairs.
    Explanation { entries: Vec<(String, String)> },
}

impl fmt::Display for RcResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RcResult::Value(value) => write!(f, "{value}"),
            RcResult::Explanation { entries } => {
                for (i, (raw_name, source)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{raw_name}: Using value from {source}")?;
                }
                Ok(())
            }
        }
    }
}

/// Look up a setting's value by name, case-insensitively.
pub(crate) fn get_value(table: &SettingsTable, name: &str) -> Result<RcResult, LdaprcError> {
    let setting = table
        .get(&name.to_lowercase())
        .ok_or_else(|| LdaprcError::NotDefined(name.to_string()))?;
    Ok(RcResult::Value(setting.value.clone()))
}

/// Report where each setting came from.
///
/// With a name: the single matching entry, or `NotDefined`. Without: every
/// entry. The table iterates by lower-cased name, which already matches
/// case-insensitive order of the raw names.
pub(crate) fn explain(table: &SettingsTable, name: Option<&str>) -> Result<RcResult, LdaprcError> {
    let picked: Vec<_> = match name {
        Some(name) => {
            let setting = table
                .get(&name.to_lowercase())
                .ok_or_else(|| LdaprcError::NotDefined(name.to_string()))?;
            vec![setting]
        }
        None => table.values().collect(),
    };

    Ok(RcResult::Explanation {
        entries: picked
            .into_iter()
            .map(|s| (s.raw_name.clone(), s.source.to_string()))
            .collect(),
    })
}
