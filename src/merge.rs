//! Line parsing and the last-write-wins merge of candidate files.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Setting, SettingsTable, Source};

/// A keyword (a letter, then one or more word characters), whitespace, then
/// the rest of the line as the value. Case-insensitive on the keyword.
static SETTING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([a-z]\w+)\s+(.*)$").expect("setting line pattern"));

/// Parse one line into `(name, value)`.
///
/// Returns `None` for anything that does not look like a setting — blank
/// lines, `#` comments, a keyword with no value. Those are not errors.
pub(crate) fn parse_line(line: &str) -> Option<(&str, &str)> {
    let caps = SETTING_LINE.captures(line.trim())?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Merge the loaded files into a settings table, in order.
///
/// Each matching line inserts or overwrites the entry for its lower-cased
/// keyword, so a later file's line for the same keyword unconditionally
/// replaces an earlier file's.
pub(crate) fn merge_files(files: &[(PathBuf, String)]) -> SettingsTable {
    let mut table = SettingsTable::new();

    for (path, content) in files {
        for line in content.lines() {
            if let Some((name, value)) = parse_line(line) {
                table.insert(
                    name.to_lowercase(),
                    Setting {
                        raw_name: name.to_string(),
                        value: value.to_string(),
                        source: Source::File(path.clone()),
                    },
                );
            }
        }
    }

    table
}
