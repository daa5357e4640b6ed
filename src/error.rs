use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LdaprcError {
    #[error("no value defined for '{0}'")]
    NotDefined(String),

    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
}
