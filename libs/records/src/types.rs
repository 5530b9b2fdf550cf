//! Enumerated record fields and their string-tag converters.
//!
//! Both enums persist as canonical kebab-case tags. Decoding is strict:
//! a tag outside the closed set is a [`RecordError`], never a default member.

use serde::{Deserialize, Serialize};

use crate::RecordError;

/// The category of a submission lifecycle event.
///
/// This is a closed label, not a transition-bearing state; any lifecycle
/// logic for submissions lives with the `Submission` record, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    /// A preparer requested approval from a submitter who already has an account.
    ApprovalRequested,
    /// A preparer requested approval from a submitter who has no account yet.
    ApprovalRequestedNewuser,
    /// The submitter requested changes before approving the submission.
    ChangesRequested,
    /// The submission was submitted.
    Submitted,
    /// The submission was cancelled by the preparer or submitter.
    Cancelled,
}

impl EventType {
    /// Returns the canonical string tag for this event type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            EventType::ApprovalRequested => "approval-requested",
            EventType::ApprovalRequestedNewuser => "approval-requested-newuser",
            EventType::ChangesRequested => "changes-requested",
            EventType::Submitted => "submitted",
            EventType::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EventType {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approval-requested" => Ok(EventType::ApprovalRequested),
            "approval-requested-newuser" => Ok(EventType::ApprovalRequestedNewuser),
            "changes-requested" => Ok(EventType::ChangesRequested),
            "submitted" => Ok(EventType::Submitted),
            "cancelled" => Ok(EventType::Cancelled),
            other => Err(RecordError::UnknownEventType(other.to_string())),
        }
    }
}

/// The capacity in which a user acted when performing an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerformerRole {
    /// The user prepared the submission on the submitter's behalf.
    Preparer,
    /// The user owns the submission.
    Submitter,
}

impl PerformerRole {
    /// Returns the canonical string tag for this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PerformerRole::Preparer => "preparer",
            PerformerRole::Submitter => "submitter",
        }
    }
}

impl std::fmt::Display for PerformerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PerformerRole {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preparer" => Ok(PerformerRole::Preparer),
            "submitter" => Ok(PerformerRole::Submitter),
            other => Err(RecordError::UnknownPerformerRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_tag_roundtrip() {
        let members = vec![
            EventType::ApprovalRequested,
            EventType::ApprovalRequestedNewuser,
            EventType::ChangesRequested,
            EventType::Submitted,
            EventType::Cancelled,
        ];
        for member in members {
            let decoded: EventType = member.as_str().parse().unwrap();
            assert_eq!(member, decoded);
        }
    }

    #[test]
    fn test_performer_role_tag_roundtrip() {
        let members = vec![PerformerRole::Preparer, PerformerRole::Submitter];
        for member in members {
            let decoded: PerformerRole = member.as_str().parse().unwrap();
            assert_eq!(member, decoded);
        }
    }

    #[test]
    fn test_event_type_serde_uses_canonical_tags() {
        assert_eq!(
            serde_json::to_string(&EventType::ChangesRequested).unwrap(),
            "\"changes-requested\""
        );
        assert_eq!(
            serde_json::to_string(&EventType::ApprovalRequestedNewuser).unwrap(),
            "\"approval-requested-newuser\""
        );
        let parsed: EventType = serde_json::from_str("\"submitted\"").unwrap();
        assert_eq!(parsed, EventType::Submitted);
    }

    #[test]
    fn test_performer_role_serde_uses_canonical_tags() {
        assert_eq!(
            serde_json::to_string(&PerformerRole::Preparer).unwrap(),
            "\"preparer\""
        );
        let parsed: PerformerRole = serde_json::from_str("\"submitter\"").unwrap();
        assert_eq!(parsed, PerformerRole::Submitter);
    }

    #[test]
    fn test_unknown_event_type_tag_is_an_error() {
        let result: Result<EventType, _> = "approved".parse();
        assert_eq!(
            result.unwrap_err(),
            RecordError::UnknownEventType("approved".to_string())
        );
    }

    #[test]
    fn test_unknown_performer_role_tag_is_an_error() {
        let result: Result<PerformerRole, _> = "reviewer".parse();
        assert_eq!(
            result.unwrap_err(),
            RecordError::UnknownPerformerRole("reviewer".to_string())
        );
    }

    #[test]
    fn test_empty_tag_is_an_error() {
        assert!("".parse::<EventType>().is_err());
        assert!("".parse::<PerformerRole>().is_err());
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(EventType::Cancelled.to_string(), "cancelled");
        assert_eq!(PerformerRole::Submitter.to_string(), "submitter");
    }
}
