//! The submission event record.

use chrono::{DateTime, FixedOffset};
use pass_id::{SubmissionEventId, SubmissionId, UserId};
use serde::{Deserialize, Serialize};

use crate::{EventType, Identity, PerformerRole};

/// One significant event performed by a user against a submission.
///
/// All declared fields start unset and stay freely mutable until the record
/// is handed to the storage layer; no validation happens here. Equality and
/// hashing are structural over the embedded [`Identity`] and every declared
/// field, in declaration order, with an unset field equal only to another
/// unset field.
///
/// Cloning yields a structurally-equal, independently mutable record that
/// still carries the original's identity; call [`Identity::clear`] on the
/// clone before treating it as a new row candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionEvent {
    /// Record identity; unset until persisted.
    #[serde(default)]
    pub identity: Identity<SubmissionEventId>,

    /// The type of event.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub event_type: Option<EventType>,

    /// When the event was performed, carrying the originating UTC offset.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub performed_date: Option<DateTime<FixedOffset>>,

    /// The user responsible for performing the event, by foreign key.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub performed_by: Option<UserId>,

    /// Role of the person performing the event.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub performer_role: Option<PerformerRole>,

    /// The associated submission, by foreign key.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub submission: Option<SubmissionId>,

    /// A comment relevant to the event. For example, when a `changes-requested`
    /// event occurs, this might communicate what changes should be made.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comment: Option<String>,

    /// A URI relevant to the event, typically a UI link to the affected
    /// submission.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub link: Option<String>,
}

impl SubmissionEvent {
    /// Creates an empty record: identity unset, every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing a record field by field.
    pub fn builder() -> SubmissionEventBuilder {
        SubmissionEventBuilder::new()
    }
}

/// Builder for constructing submission event records.
///
/// Every field is optional by contract, so `build` is total.
#[derive(Debug, Default)]
pub struct SubmissionEventBuilder {
    event: SubmissionEvent,
}

impl SubmissionEventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(mut self, identity: Identity<SubmissionEventId>) -> Self {
        self.event.identity = identity;
        self
    }

    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.event.event_type = Some(event_type);
        self
    }

    pub fn performed_date(mut self, performed_date: DateTime<FixedOffset>) -> Self {
        self.event.performed_date = Some(performed_date);
        self
    }

    pub fn performed_by(mut self, performed_by: UserId) -> Self {
        self.event.performed_by = Some(performed_by);
        self
    }

    pub fn performer_role(mut self, performer_role: PerformerRole) -> Self {
        self.event.performer_role = Some(performer_role);
        self
    }

    pub fn submission(mut self, submission: SubmissionId) -> Self {
        self.event.submission = Some(submission);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.event.comment = Some(comment.into());
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.event.link = Some(link.into());
        self
    }

    /// Builds the record.
    pub fn build(self) -> SubmissionEvent {
        self.event
    }
}
