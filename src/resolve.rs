//! Core resolution pipeline: merge candidate files, then overlay environment
//! variables.
//!
//! Operates on pre-loaded data (`ResolveInput`) with no I/O, making the full
//! pipeline testable with synthetic inputs. Steps:
//!
//! 1. Parse and merge candidate files (later overrides earlier)
//! 2. When the overlay applies, insert `LDAP*` settings on top (env wins)
//!
//! Nothing here can fail: unreadable sources were handled at load time, and
//! malformed lines are skipped by design.

use std::path::PathBuf;

use crate::env;
use crate::merge;
use crate::types::SettingsTable;

/// All pre-loaded data needed to resolve a settings table. No I/O happens here.
pub(crate) struct ResolveInput {
    /// File contents in precedence order: first = lowest priority, last = highest.
    pub files: Vec<(PathBuf, String)>,
    /// Raw environment variable pairs.
    pub env_vars: Vec<(String, String)>,
    /// Whether the environment overlay applies. False whenever an explicit
    /// rc file was given or `LDAPNOINIT` was set.
    pub consult_env: bool,
}

/// Resolve the settings table from pre-loaded inputs.
pub(crate) fn resolve(input: ResolveInput) -> SettingsTable {
    let mut table = merge::merge_files(&input.files);

    if input.consult_env {
        for (key, setting) in env::env_to_settings(input.env_vars) {
            table.insert(key, setting);
        }
    }

    table
}
