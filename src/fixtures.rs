#[cfg(test)]
pub mod test {
    use crate::env::EnvSnapshot;

    /// Owned pairs from borrowed test data.
    pub fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// A synthetic snapshot with no home directory.
    pub fn snapshot(pairs: &[(&str, &str)]) -> EnvSnapshot {
        EnvSnapshot::from_vars(vars(pairs))
    }

    #[test]
    fn snapshot_carries_exactly_the_given_vars() {
        let snap = snapshot(&[("LDAPHOST", "h")]);
        assert_eq!(snap.get("LDAPHOST"), Some("h"));
        assert_eq!(snap.home_dir(), None);
        assert_eq!(snap.vars().count(), 1);
    }
}
