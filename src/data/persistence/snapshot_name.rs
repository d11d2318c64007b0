use std::fmt;

use crate::config::PERSISTENCE;
use crate::domain::{DashboardError, DashboardResult};

/// A snapshot name that is safe to use as a file stem.
///
/// Accepted characters: ASCII letters, digits, space, `_`, `-` and `.`.
/// No leading dot and no `..` anywhere, so a name can never climb out of
/// the snapshot directory or hide itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SnapshotName(String);

impl SnapshotName {
    pub fn parse(raw: &str) -> DashboardResult<Self> {
        let name = raw.trim();
        let reject = |reason: &'static str| {
            Err(DashboardError::InvalidName {
                name: raw.to_string(),
                reason,
            })
        };

        if name.is_empty() {
            return reject("name is empty");
        }
        if name.chars().count() > PERSISTENCE.snapshots.max_name_len {
            return reject("name is too long");
        }
        if name.contains('/') || name.contains('\\') {
            return reject("path separators are not allowed");
        }
        if name.contains("..") {
            return reject("'..' is not allowed");
        }
        if name.starts_with('.') {
            return reject("name may not start with '.'");
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-' | '.'))
        {
            return reject("only letters, digits, space, '_', '-' and '.' are allowed");
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SnapshotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_names_pass() {
        for raw in ["default", "ES week 12", "pre-FOMC_v2", "plan.b"] {
            assert_eq!(SnapshotName::parse(raw).unwrap().as_str(), raw);
        }
        assert_eq!(SnapshotName::parse("  padded ").unwrap().as_str(), "padded");
    }

    #[test]
    fn traversal_and_separators_are_rejected() {
        for raw in [
            "",
            "   ",
            "..",
            "../etc/passwd",
            "a/b",
            "a\\b",
            "x..y",
            ".hidden",
            "nul\0byte",
            "emoji📈",
            "C:evil",
        ] {
            assert!(
                matches!(
                    SnapshotName::parse(raw),
                    Err(DashboardError::InvalidName { .. })
                ),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn long_names_are_rejected() {
        let ok = "a".repeat(PERSISTENCE.snapshots.max_name_len);
        let too_long = "a".repeat(PERSISTENCE.snapshots.max_name_len + 1);
        assert!(SnapshotName::parse(&ok).is_ok());
        assert!(SnapshotName::parse(&too_long).is_err());
    }
}
