//! Embedded record identity.
//!
//! The original object model inherited its identifier from a common entity
//! supertype. Here identity is a value embedded in each record: an optional
//! typed ID (unset until the storage layer assigns one) plus the
//! optimistic-lock [`Version`].

use pass_id::Version;
use serde::{Deserialize, Serialize};

/// Identity of a persisted record: primary ID plus optimistic-lock version.
///
/// Record equality compares identity before any declared field, mirroring
/// the supertype-first comparison of the original model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity<I> {
    /// Primary ID; `None` until the record has been persisted.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<I>,

    /// Optimistic-lock version, bumped by the storage layer on update.
    #[serde(default)]
    pub version: Version,
}

impl<I> Identity<I> {
    /// An unset identity, as carried by a record that has never been persisted.
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            id: None,
            version: Version::FIRST,
        }
    }

    /// Creates an identity for a persisted record.
    #[must_use]
    pub const fn persisted(id: I, version: Version) -> Self {
        Self {
            id: Some(id),
            version,
        }
    }

    /// Returns true if this identity refers to a persisted record.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Clears the identity.
    ///
    /// Call this on a copied record before handing it to the storage layer
    /// as a new row candidate; otherwise the copy still claims the
    /// original's row.
    pub fn clear(&mut self) {
        self.id = None;
        self.version = Version::FIRST;
    }
}

impl<I> Default for Identity<I> {
    fn default() -> Self {
        Self::unset()
    }
}
