//! Candidate file discovery and loading.
//!
//! # Discovery
//!
//! [`build_source_list`] produces the candidate files in precedence-ascending
//! order (first = lowest priority, last = highest):
//!
//! 1. The well-known system-wide `ldap.conf` locations.
//! 2. `.ldaprc` in the user's home directory.
//! 3. `ldaprc` files found by walking from the start directory up toward the
//!    filesystem root. Directories are emitted **shallowest first**, so a file
//!    closer to the start directory lands later in the list and wins.
//! 4. The files named by `LDAPCONF` and `LDAPRC`, when set. Existence is not
//!    checked here; a dangling path is skipped at load time like any other
//!    missing file.
//!
//! An explicit rc file, or `LDAPNOINIT` in the environment, short-circuits all
//! of the above: the list is just the explicit file (or nothing), and the
//! environment overlay is disabled.
//!
//! # Loading
//!
//! [`load_source_files`] reads each candidate in order. Missing files are
//! silently skipped — listing a candidate is a suggestion, not a requirement.
//! Only actual I/O errors (permissions, etc.) are propagated.

use std::path::{Path, PathBuf};

use crate::env::{CONF_FILE_VARS, EnvSnapshot, NO_INIT_VAR};
use crate::error::LdaprcError;

/// System-wide configuration files, lowest precedence first.
pub(crate) const SYSTEM_CONF_FILES: [&str; 3] = [
    "/etc/openldap/ldap.conf",           // Red Hat, macOS
    "/etc/ldap/ldap.conf",               // Debian and friends
    "/usr/local/etc/openldap/ldap.conf", // FreeBSD
];

/// Per-user dotfile under the home directory.
pub(crate) const HOME_RC_FILE: &str = ".ldaprc";

/// Project-local file picked up by the ancestor walk.
pub(crate) const LOCAL_RC_FILE: &str = "ldaprc";

/// The ordered candidate files plus whether the environment overlay applies.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SourceList {
    /// Candidate paths in precedence order: first = lowest, last = highest.
    pub files: Vec<PathBuf>,
    /// False when an explicit file or `LDAPNOINIT` short-circuits discovery.
    pub consult_env: bool,
}

/// Decide the candidate files and whether to consult the environment.
///
/// `start_dir` is where the upward `ldaprc` walk begins; `None` skips the
/// walk entirely (the caller could not determine a working directory).
pub(crate) fn build_source_list(
    explicit: Option<&Path>,
    start_dir: Option<&Path>,
    env: &EnvSnapshot,
) -> SourceList {
    if explicit.is_some() || env.contains(NO_INIT_VAR) {
        // An explicit file replaces every other source, including the env
        // overlay. A bare LDAPNOINIT yields no sources at all.
        return SourceList {
            files: explicit.map(|p| vec![p.to_path_buf()]).unwrap_or_default(),
            consult_env: false,
        };
    }

    let mut files: Vec<PathBuf> = SYSTEM_CONF_FILES.iter().map(PathBuf::from).collect();

    if let Some(home) = env.home_dir() {
        files.push(home.join(HOME_RC_FILE));
    }

    if let Some(start) = start_dir {
        for dir in ancestor_dirs(start) {
            let candidate = dir.join(LOCAL_RC_FILE);
            if candidate.is_file() {
                files.push(candidate);
            }
        }
    }

    for var in CONF_FILE_VARS {
        if let Some(path) = env.get(var) {
            files.push(PathBuf::from(path));
        }
    }

    SourceList {
        files,
        consult_env: true,
    }
}

/// Ancestors of `start` in root-to-leaf order (shallowest first, `start` last).
///
/// The walk follows `parent()` until it runs out, so it terminates at the
/// filesystem root for absolute paths and at the first component for relative
/// ones.
pub(crate) fn ancestor_dirs(start: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    let mut current = start;

    loop {
        dirs.push(current.to_path_buf());
        match current.parent() {
            Some(parent) => current = parent,
            None => break, // reached root
        }
    }

    // Reverse: shallowest first (lowest priority), start dir last (highest).
    dirs.reverse();
    dirs
}

/// Read each candidate file, in order, skipping ones that do not exist.
pub(crate) fn load_source_files(
    files: &[PathBuf],
) -> Result<Vec<(PathBuf, String)>, LdaprcError> {
    let mut loaded = Vec::new();
    for path in files {
        match std::fs::read_to_string(path) {
            Ok(content) => loaded.push((path.clone(), content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(LdaprcError::IoError {
                    path: path.clone(),
                    source: e,
                });
            }
        }
    }
    Ok(loaded)
}
