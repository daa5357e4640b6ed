//! Resolve the effective OpenLDAP client configuration — `ldap.conf`,
//! `ldaprc` files, and `LDAP*` environment variables — with provenance.
//!
//! ```ignore
//! let ldaprc = Ldaprc::builder().load()?;
//! let uri = ldaprc.get("uri")?;
//! ```
//!
//! That single call reads the well-known configuration files, discovers
//! project-local `ldaprc` files, overlays `LDAP*` environment variables, and
//! hands you an immutable table that knows, for every setting, which source
//! supplied the winning value.
//!
//! # Why ldaprc
//!
//! OpenLDAP client tools agree on a layered configuration convention:
//! system-wide `ldap.conf`, a per-user `.ldaprc`, project-local `ldaprc`
//! files, and `LDAP*` environment variables. Any program that talks to the
//! same directories should honor the same convention — and when a setting
//! doesn't have the value a user expects, the first question is always
//! *which file did this come from?* This crate implements the lookup once,
//! keeps the exact compatibility paths and variable names, and records
//! provenance for every value so that question has an answer.
//!
//! # Layer precedence
//!
//! ```text
//! System files          /etc/openldap/ldap.conf, /etc/ldap/ldap.conf,
//!                       /usr/local/etc/openldap/ldap.conf
//!        ↑ overridden by
//! Home dotfile          ~/.ldaprc
//!        ↑ overridden by
//! Discovered ldaprc     ancestors of the start directory, closest last
//!        ↑ overridden by
//! Named files           $LDAPCONF, then $LDAPRC
//!        ↑ overridden by
//! Environment vars      LDAP* (prefix stripped)
//! ```
//!
//! Every layer is **sparse**: a source only overrides the settings it
//! actually defines, key by key, and keys are matched case-insensitively.
//! Missing files are silently skipped — listing a candidate is a suggestion,
//! not a requirement. Lines that don't parse as a setting (blanks, comments,
//! malformed input) are skipped the same way.
//!
//! # Discovery
//!
//! The `ldaprc` walk starts at the current directory (or
//! [`start_dir`](LdaprcBuilder::start_dir)) and climbs to the filesystem
//! root, collecting every regular file named `ldaprc` along the way. Files
//! closer to the start directory have higher precedence, the way
//! `.editorconfig`-style tools resolve project-local config.
//!
//! Two environment variables are *meta*-configuration: `LDAPCONF` and
//! `LDAPRC` name additional candidate files rather than carrying settings,
//! and therefore never show up in the resolved table themselves.
//!
//! # Short-circuits
//!
//! An explicit file ([`rc_file`](LdaprcBuilder::rc_file)) makes that file the
//! **only** source: no system files, no discovery, no environment overlay.
//! Setting `LDAPNOINIT` disables discovery and the overlay the same way
//! without supplying a replacement, which resolves to an empty table.
//!
//! # Provenance
//!
//! Each resolved [`Setting`] keeps the name exactly as the winning source
//! wrote it, the raw text value, and a [`Source`]. [`Ldaprc::explain`]
//! renders the report users see:
//!
//! ```text
//! BASE: Using value from /etc/ldap/ldap.conf
//! URI: Using value from LDAPURI environment variable
//! ```
//!
//! # Testability
//!
//! The core never reads process state behind your back: inject an
//! [`EnvSnapshot`] and a start directory and resolution becomes a pure
//! function of its inputs. Values are never validated or coerced — every
//! value is a string, and deciding what `deref` or `sizelimit` *means* is
//! the consuming application's job.
//!
//! # Errors
//!
//! All fallible operations return [`LdaprcError`]. Looking up an undefined
//! setting is the only user-visible failure in normal operation; a file that
//! vanishes or becomes unreadable between discovery and reading surfaces as
//! an I/O error.

pub mod error;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod env;
mod file;
mod merge;
mod ops;
mod resolve;

#[cfg(test)]
mod fixtures;

pub use builder::{Ldaprc, LdaprcBuilder};
#[cfg(feature = "clap")]
pub use cli::{RcArgs, RcSubcommand};
pub use env::EnvSnapshot;
pub use error::LdaprcError;
pub use ops::RcResult;
pub use types::{RcAction, Setting, Source};
