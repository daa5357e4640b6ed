use std::path::{Path, PathBuf};

use crate::env::EnvSnapshot;
use crate::error::LdaprcError;
use crate::file;
use crate::ops::{self, RcResult};
use crate::resolve::{self, ResolveInput};
use crate::types::{RcAction, Setting, SettingsTable};

/// A resolved, immutable snapshot of the effective LDAP client settings.
///
/// Built by [`LdaprcBuilder::load`]. Lookups are case-insensitive; each entry
/// remembers the source that supplied its winning value.
#[derive(Debug, Clone)]
pub struct Ldaprc {
    settings: SettingsTable,
    rc_file: Option<PathBuf>,
}

impl Ldaprc {
    pub fn builder() -> LdaprcBuilder {
        LdaprcBuilder::new()
    }

    /// A setting's resolved value, or [`LdaprcError::NotDefined`].
    pub fn get(&self, name: &str) -> Result<&str, LdaprcError> {
        self.setting(name)
            .map(|s| s.value.as_str())
            .ok_or_else(|| LdaprcError::NotDefined(name.to_string()))
    }

    /// The full record for a setting, including its provenance.
    pub fn setting(&self, name: &str) -> Option<&Setting> {
        self.settings.get(&name.to_lowercase())
    }

    /// All winning settings, ordered by lower-cased name.
    pub fn settings(&self) -> impl Iterator<Item = &Setting> {
        self.settings.values()
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// The explicit rc file this snapshot was resolved from, when one was given.
    pub fn rc_file(&self) -> Option<&Path> {
        self.rc_file.as_deref()
    }

    /// Report which source supplied each setting.
    ///
    /// With a name: that entry alone, or [`LdaprcError::NotDefined`]. Without:
    /// every entry, sorted case-insensitively by raw name. Each line renders
    /// as `<raw_name>: Using value from <source>`.
    pub fn explain(&self, name: Option<&str>) -> Result<RcResult, LdaprcError> {
        ops::explain(&self.settings, name)
    }

    /// Handle an [`RcAction`].
    pub fn handle(&self, action: &RcAction) -> Result<RcResult, LdaprcError> {
        match action {
            RcAction::Explain { name } => self.explain(name.as_deref()),
            RcAction::Get { name } => ops::get_value(&self.settings, name),
        }
    }

    /// Handle an [`RcAction`] and print the result to stdout.
    pub fn handle_and_print(&self, action: &RcAction) -> Result<(), LdaprcError> {
        let result = self.handle(action)?;
        println!("{result}");
        Ok(())
    }
}

/// Builder for resolving the effective settings.
///
/// All inputs are optional: by default the builder auto-discovers candidate
/// files and snapshots the process environment at [`load`](Self::load) time.
pub struct LdaprcBuilder {
    rc_file: Option<PathBuf>,
    start_dir: Option<PathBuf>,
    env: Option<EnvSnapshot>,
}

impl LdaprcBuilder {
    fn new() -> Self {
        Self {
            rc_file: None,
            start_dir: None,
            env: None,
        }
    }

    /// Use only this file, ignoring every discovered source **and** the
    /// environment overlay.
    pub fn rc_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.rc_file = Some(path.into());
        self
    }

    /// Where the upward `ldaprc` walk begins (default: the current directory).
    pub fn start_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }

    /// Inject an environment snapshot instead of capturing the process
    /// environment. This is how tests keep resolution hermetic.
    pub fn env_snapshot(mut self, env: EnvSnapshot) -> Self {
        self.env = Some(env);
        self
    }

    /// Resolve: build the source list, merge the files, overlay the
    /// environment.
    pub fn load(self) -> Result<Ldaprc, LdaprcError> {
        let env = self.env.unwrap_or_else(EnvSnapshot::from_process);

        // If the current directory is unknowable, skip the walk rather than
        // failing the whole resolution.
        let start_dir = self.start_dir.or_else(|| std::env::current_dir().ok());

        let sources = file::build_source_list(self.rc_file.as_deref(), start_dir.as_deref(), &env);
        let files = file::load_source_files(&sources.files)?;

        let settings = resolve::resolve(ResolveInput {
            files,
            env_vars: env.vars().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            consult_env: sources.consult_env,
        });

        Ok(Ldaprc {
            settings,
            rc_file: self.rc_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::snapshot;
    use crate::types::Source;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_rc_file_is_the_only_source() {
        let dir = TempDir::new().unwrap();
        let rc = dir.path().join("my-ldaprc");
        fs::write(&rc, "URI ldap://x\n").unwrap();

        // Env is set but must never be consulted.
        let env = snapshot(&[("LDAPURI", "ldap://env"), ("LDAPHOST", "envhost")]);
        let ldaprc = Ldaprc::builder()
            .rc_file(&rc)
            .env_snapshot(env)
            .load()
            .unwrap();

        assert_eq!(ldaprc.get("uri").unwrap(), "ldap://x");
        assert!(ldaprc.setting("host").is_none());
        assert_eq!(ldaprc.rc_file(), Some(rc.as_path()));
    }

    #[test]
    fn missing_explicit_rc_file_resolves_empty() {
        let ldaprc = Ldaprc::builder()
            .rc_file("/nonexistent/ldaprc")
            .env_snapshot(snapshot(&[]))
            .load()
            .unwrap();
        assert!(ldaprc.is_empty());
    }

    #[test]
    fn noinit_resolves_empty_and_lookups_fail() {
        let ldaprc = Ldaprc::builder()
            .env_snapshot(snapshot(&[("LDAPNOINIT", "1"), ("LDAPHOST", "envhost")]))
            .load()
            .unwrap();

        assert!(ldaprc.is_empty());
        assert!(matches!(
            ldaprc.get("host"),
            Err(LdaprcError::NotDefined(name)) if name == "host"
        ));
    }

    #[test]
    fn home_dotfile_overrides_nothing_but_loads() {
        let home = TempDir::new().unwrap();
        fs::write(home.path().join(".ldaprc"), "BINDDN cn=user,dc=example\n").unwrap();

        let work = TempDir::new().unwrap();
        let ldaprc = Ldaprc::builder()
            .start_dir(work.path())
            .env_snapshot(snapshot(&[]).with_home(home.path()))
            .load()
            .unwrap();

        assert_eq!(ldaprc.get("binddn").unwrap(), "cn=user,dc=example");
    }

    #[test]
    fn closer_walk_file_beats_grandparent() {
        let root = TempDir::new().unwrap();
        let deep = root.path().join("project").join("sub");
        fs::create_dir_all(&deep).unwrap();
        fs::write(root.path().join("ldaprc"), "DEREF finding\nBASE dc=outer\n").unwrap();
        fs::write(deep.join("ldaprc"), "BASE dc=inner\n").unwrap();

        let ldaprc = Ldaprc::builder()
            .start_dir(&deep)
            .env_snapshot(snapshot(&[]))
            .load()
            .unwrap();

        assert_eq!(ldaprc.get("base").unwrap(), "dc=inner");
        assert_eq!(
            ldaprc.setting("base").unwrap().source,
            Source::File(deep.join("ldaprc"))
        );
        // The grandparent still contributes keys the closer file left alone.
        assert_eq!(ldaprc.get("deref").unwrap(), "finding");
    }

    #[test]
    fn env_overlay_beats_walk_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ldaprc"), "HOST filehost\n").unwrap();

        let ldaprc = Ldaprc::builder()
            .start_dir(dir.path())
            .env_snapshot(snapshot(&[("LDAPHOST", "example.com")]))
            .load()
            .unwrap();

        let setting = ldaprc.setting("host").unwrap();
        assert_eq!(setting.value, "example.com");
        assert_eq!(setting.raw_name, "HOST");
        assert_eq!(setting.source, Source::Env("LDAPHOST".into()));
    }

    #[test]
    fn conf_var_file_beats_walk_file() {
        let work = TempDir::new().unwrap();
        fs::write(work.path().join("ldaprc"), "BASE dc=walk\n").unwrap();
        let conf = work.path().join("named.conf");
        fs::write(&conf, "BASE dc=named\n").unwrap();

        let env = snapshot(&[("LDAPCONF", conf.to_str().unwrap())]);
        let ldaprc = Ldaprc::builder()
            .start_dir(work.path())
            .env_snapshot(env)
            .load()
            .unwrap();

        assert_eq!(ldaprc.get("base").unwrap(), "dc=named");
        assert!(ldaprc.setting("conf").is_none());
    }

    #[test]
    fn later_casing_wins_lookup_stays_case_insensitive() {
        let home = TempDir::new().unwrap();
        fs::write(home.path().join(".ldaprc"), "XHOST foo\n").unwrap();
        let work = TempDir::new().unwrap();
        fs::write(work.path().join("ldaprc"), "xhost bar\n").unwrap();

        let ldaprc = Ldaprc::builder()
            .start_dir(work.path())
            .env_snapshot(snapshot(&[]).with_home(home.path()))
            .load()
            .unwrap();

        let setting = ldaprc.setting("XHOST").unwrap();
        assert_eq!(setting.value, "bar");
        assert_eq!(setting.raw_name, "xhost");
    }

    #[test]
    fn resolving_twice_yields_identical_tables() {
        let work = TempDir::new().unwrap();
        fs::write(work.path().join("ldaprc"), "BASE dc=x\nURI ldap://x\n").unwrap();

        let build = || {
            Ldaprc::builder()
                .start_dir(work.path())
                .env_snapshot(snapshot(&[("LDAPHOST", "h")]))
                .load()
                .unwrap()
        };
        let (a, b) = (build(), build());
        let left: Vec<_> = a.settings().collect();
        let right: Vec<_> = b.settings().collect();
        assert_eq!(left, right);
    }

    #[test]
    fn handle_dispatches_get_and_explain() {
        let dir = TempDir::new().unwrap();
        let rc = dir.path().join("rc");
        fs::write(&rc, "URI ldap://x\n").unwrap();

        let ldaprc = Ldaprc::builder()
            .rc_file(&rc)
            .env_snapshot(snapshot(&[]))
            .load()
            .unwrap();

        let value = ldaprc
            .handle(&RcAction::Get { name: "uri".into() })
            .unwrap();
        assert_eq!(value.to_string(), "ldap://x");

        let report = ldaprc
            .handle(&RcAction::Explain { name: None })
            .unwrap();
        assert_eq!(
            report.to_string(),
            format!("URI: Using value from {}", rc.display())
        );
    }
}
