//! Environment variable handling: the injectable snapshot and the overlay.
//!
//! The core never reads `std::env` directly. Everything it needs from the
//! environment — the `LDAP*` variables, the home directory — travels through
//! an [`EnvSnapshot`], so resolution is deterministic and unit tests can pass
//! synthetic data instead of mutating process state.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::types::{Setting, SettingsTable, Source};

/// Variables starting with this prefix are candidate settings.
pub(crate) const ENV_PREFIX: &str = "LDAP";

/// Variables that name an override file rather than carrying a setting,
/// in the order their paths are appended to the candidate list.
pub(crate) const CONF_FILE_VARS: [&str; 2] = ["LDAPCONF", "LDAPRC"];

/// When present, disables auto-discovery and the environment overlay.
pub(crate) const NO_INIT_VAR: &str = "LDAPNOINIT";

/// A point-in-time copy of the process environment.
///
/// Variables are held in a sorted map, so iteration (and therefore overlay
/// order) is deterministic regardless of how the snapshot was built.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
    home: Option<PathBuf>,
}

impl EnvSnapshot {
    /// Capture the current process environment and the platform home directory.
    pub fn from_process() -> Self {
        let home = directories::UserDirs::new().map(|u| u.home_dir().to_path_buf());
        Self {
            vars: std::env::vars().collect(),
            home,
        }
    }

    /// Build a snapshot from synthetic pairs. The home directory is unset;
    /// use [`with_home`](Self::with_home) to provide one.
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            vars: vars.into_iter().collect(),
            home: None,
        }
    }

    /// Set the home directory used for the `.ldaprc` candidate.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// The user's home directory, if one is known.
    pub fn home_dir(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// All captured variables in lexical name order.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Build the overlay table from raw environment pairs.
///
/// Keeps variables starting with `LDAP`, strips the prefix to obtain the
/// setting name, and skips `LDAPCONF`/`LDAPRC` (they name files, they are not
/// settings themselves). A variable named exactly `LDAP` strips to nothing
/// and is skipped too.
pub(crate) fn env_to_settings(vars: impl IntoIterator<Item = (String, String)>) -> SettingsTable {
    let mut table = SettingsTable::new();

    for (name, value) in vars {
        let Some(rest) = name.strip_prefix(ENV_PREFIX) else {
            continue;
        };
        if rest.is_empty() || CONF_FILE_VARS.contains(&name.as_str()) {
            continue;
        }

        let key = rest.to_lowercase();
        let raw_name = rest.to_string();
        table.insert(
            key,
            Setting {
                raw_name,
                value,
                source: Source::Env(name),
            },
        );
    }

    table
}
