use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// A single resolved setting with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Setting {
    /// The setting's name exactly as it appeared in the winning source.
    pub raw_name: String,
    /// The raw text value. No type coercion is applied.
    pub value: String,
    /// Where the value came from.
    pub source: Source,
}

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Source {
    /// A configuration file.
    File(PathBuf),
    /// An `LDAP*` environment variable, stored by its full name.
    Env(String),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Env(var) => write!(f, "{var} environment variable"),
        }
    }
}

/// Resolved settings keyed by lower-cased name.
///
/// At most one entry per key; whichever source wrote last wins. Iteration
/// follows the lower-cased name, which is also case-insensitive order of
/// each entry's `raw_name`.
pub type SettingsTable = BTreeMap<String, Setting>;

/// An inspection operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum RcAction {
    /// Show which source supplied each setting (all settings, or one).
    Explain { name: Option<String> },
    /// Print a single setting's resolved value.
    Get { name: String },
}
