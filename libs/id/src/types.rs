//! Typed ID definitions for all PASS record types.
//!
//! Each ID type has a unique prefix that identifies the record type.
//! IDs are ULID-based for sortability and uniqueness.

use crate::define_id;

// =============================================================================
// Record Identities
// =============================================================================

define_id!(SubmissionId, "sub");
define_id!(UserId, "usr");
define_id!(SubmissionEventId, "evt");

// =============================================================================
// Optimistic-Lock Version
// =============================================================================

/// Optimistic-lock version counter carried by every persisted record.
///
/// The storage layer bumps the version on each successful update and
/// rejects writes made against a stale version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(i64);

impl Version {
    /// The version assigned to a freshly inserted record.
    pub const FIRST: Self = Self(0);

    /// Creates a new Version from an i64.
    #[must_use]
    pub const fn new(version: i64) -> Self {
        Self(version)
    }

    /// Returns the underlying i64 value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Returns the next version.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Version {
    fn from(version: i64) -> Self {
        Self(version)
    }
}

impl From<Version> for i64 {
    fn from(version: Version) -> Self {
        version.0
    }
}

impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let version = i64::deserialize(deserializer)?;
        Ok(Self(version))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_submission_id_roundtrip() {
        let id = SubmissionId::new();
        let s = id.to_string();
        let parsed: SubmissionId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_submission_id_prefix() {
        let id = SubmissionId::new();
        let s = id.to_string();
        assert!(s.starts_with("sub_"));
    }

    #[test]
    fn test_submission_id_invalid_prefix() {
        let result: Result<SubmissionId, _> = "usr_01HV4Z2WQXKJNM8GPQY6VBKC3D".parse();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            crate::IdError::InvalidPrefix { .. }
        ));
    }

    #[test]
    fn test_submission_id_missing_separator() {
        let result: Result<SubmissionId, _> = "sub01HV4Z2WQXKJNM8GPQY6VBKC3D".parse();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            crate::IdError::MissingSeparator
        ));
    }

    #[test]
    fn test_submission_id_empty() {
        let result: Result<SubmissionId, _> = "".parse();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), crate::IdError::Empty));
    }

    #[test]
    fn test_submission_id_invalid_ulid() {
        let result: Result<SubmissionId, _> = "sub_invalid".parse();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), crate::IdError::InvalidUlid(_)));
    }

    #[test]
    fn test_user_id_json_roundtrip() {
        let id = UserId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_event_id_sortable() {
        let id1 = SubmissionEventId::new();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = SubmissionEventId::new();
        // ULIDs are time-ordered, so id1 < id2
        assert!(id1 < id2);
    }

    #[test]
    fn test_version_next() {
        let version = Version::FIRST;
        assert_eq!(version.value(), 0);
        let next = version.next();
        assert_eq!(next.value(), 1);
    }

    #[test]
    fn test_version_json_roundtrip() {
        let version = Version::new(7);
        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(json, "7");
        let parsed: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(version, parsed);
    }

    #[test]
    fn test_all_id_prefixes_unique() {
        // Ensure all prefixes are unique
        let prefixes = vec![
            SubmissionId::PREFIX,
            UserId::PREFIX,
            SubmissionEventId::PREFIX,
        ];

        let unique: std::collections::HashSet<_> = prefixes.iter().collect();
        assert_eq!(prefixes.len(), unique.len(), "Duplicate ID prefixes found!");
    }

    proptest! {
        #[test]
        fn prop_parse_rejects_unprefixed_strings(s in "[A-Za-z0-9]{0,40}") {
            // No underscore means no valid ID, whatever the payload looks like
            prop_assert!(SubmissionEventId::parse(&s).is_err());
        }

        #[test]
        fn prop_display_parse_roundtrip(ms in 0u64..=281_474_976_710_655u64) {
            let id = UserId::from_ulid(ulid::Ulid::from_parts(ms, 42));
            let parsed = UserId::parse(&id.to_string()).unwrap();
            prop_assert_eq!(id, parsed);
        }
    }
}
