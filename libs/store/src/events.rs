//! Submission event row storage.
//!
//! Rows are persisted in the shape declared by `pass_records::mapping`:
//! string-tag columns for the enumerated fields, RFC 3339 text for the
//! performed date (so the originating offset survives a round trip), and
//! prefixed ID strings for identity and relations. Decoding applies the
//! record converters and fails loudly on anything unrecognized.

use std::str::FromStr;

use chrono::DateTime;
use pass_id::{SubmissionEventId, SubmissionId, UserId, Version};
use pass_records::{mapping, EventType, Identity, PerformerRole, RecordError, SubmissionEvent};
use sqlx::{postgres::PgPool, postgres::PgRow, Row};
use tracing::debug;

use crate::StoreError;

/// A raw row from the `pass_submission_event` table.
#[derive(Debug, Clone)]
pub struct SubmissionEventRow {
    pub id: String,
    pub version: i64,
    pub event_type: Option<String>,
    pub performed_date: Option<String>,
    pub performed_by: Option<String>,
    pub performer_role: Option<String>,
    pub submission: Option<String>,
    pub comment: Option<String>,
    pub link: Option<String>,
}

impl<'r> sqlx::FromRow<'r, PgRow> for SubmissionEventRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            version: row.try_get("version")?,
            event_type: row.try_get("event_type")?,
            performed_date: row.try_get("performed_date")?,
            performed_by: row.try_get("performed_by")?,
            performer_role: row.try_get("performer_role")?,
            submission: row.try_get("submission")?,
            comment: row.try_get("comment")?,
            link: row.try_get("link")?,
        })
    }
}

impl TryFrom<SubmissionEventRow> for SubmissionEvent {
    type Error = RecordError;

    fn try_from(row: SubmissionEventRow) -> Result<Self, RecordError> {
        let id = SubmissionEventId::parse(&row.id)?;

        let event_type = row
            .event_type
            .as_deref()
            .map(EventType::from_str)
            .transpose()?;

        let performed_date = row
            .performed_date
            .as_deref()
            .map(|value| {
                DateTime::parse_from_rfc3339(value).map_err(|e| RecordError::InvalidTimestamp {
                    value: value.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let performed_by = row
            .performed_by
            .as_deref()
            .map(UserId::parse)
            .transpose()?;

        let performer_role = row
            .performer_role
            .as_deref()
            .map(PerformerRole::from_str)
            .transpose()?;

        let submission = row
            .submission
            .as_deref()
            .map(SubmissionId::parse)
            .transpose()?;

        Ok(SubmissionEvent {
            identity: Identity::persisted(id, Version::new(row.version)),
            event_type,
            performed_date,
            performed_by,
            performer_role,
            submission,
            comment: row.comment,
            link: row.link,
        })
    }
}

fn decode(row: SubmissionEventRow) -> Result<SubmissionEvent, StoreError> {
    let row_id = row.id.clone();
    SubmissionEvent::try_from(row).map_err(|source| StoreError::DataIntegrity { id: row_id, source })
}

fn insert_sql() -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        mapping::TABLE,
        mapping::column_list(),
        mapping::placeholder_list()
    )
}

fn select_by_id_sql() -> String {
    format!(
        "SELECT {} FROM {} WHERE id = $1",
        mapping::column_list(),
        mapping::TABLE
    )
}

fn select_by_submission_sql(with_cursor: bool) -> String {
    if with_cursor {
        format!(
            "SELECT {} FROM {} WHERE submission = $1 AND id > $2 ORDER BY id LIMIT $3",
            mapping::column_list(),
            mapping::TABLE
        )
    } else {
        format!(
            "SELECT {} FROM {} WHERE submission = $1 ORDER BY id LIMIT $2",
            mapping::column_list(),
            mapping::TABLE
        )
    }
}

fn update_sql() -> String {
    format!(
        "UPDATE {} SET {} WHERE id = $1 AND version = $2",
        mapping::TABLE,
        mapping::update_set_list(3)
    )
}

fn delete_sql() -> String {
    format!("DELETE FROM {} WHERE id = $1", mapping::TABLE)
}

/// Store for submission event rows.
#[derive(Clone)]
pub struct SubmissionEventStore {
    pool: PgPool,
}

impl SubmissionEventStore {
    /// Create a new store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a record as a new row.
    ///
    /// Assigns a fresh ID when the record's identity is unset and stamps the
    /// row with the first version. Returns the stored identity; the caller
    /// decides whether to write it back into its record.
    pub async fn insert(
        &self,
        event: &SubmissionEvent,
    ) -> Result<Identity<SubmissionEventId>, StoreError> {
        let id = event.identity.id.unwrap_or_else(SubmissionEventId::new);
        let sql = insert_sql();

        sqlx::query(&sql)
            .bind(id.to_string())
            .bind(Version::FIRST.value())
            .bind(event.event_type.map(|t| t.as_str()))
            .bind(event.performed_date.map(|d| d.to_rfc3339()))
            .bind(event.performed_by.map(|u| u.to_string()))
            .bind(event.performer_role.map(|r| r.as_str()))
            .bind(event.submission.map(|s| s.to_string()))
            .bind(event.comment.as_deref())
            .bind(event.link.as_deref())
            .execute(&self.pool)
            .await
            .map_err(StoreError::Query)?;

        debug!(id = %id, "Inserted submission event");
        Ok(Identity::persisted(id, Version::FIRST))
    }

    /// Load one record by ID.
    ///
    /// Returns `Ok(None)` when no row exists. A row that cannot be decoded
    /// surfaces as [`StoreError::DataIntegrity`].
    pub async fn fetch(
        &self,
        id: &SubmissionEventId,
    ) -> Result<Option<SubmissionEvent>, StoreError> {
        let sql = select_by_id_sql();
        let row: Option<SubmissionEventRow> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::Query)?;

        row.map(decode).transpose()
    }

    /// List records for one submission, oldest first, with cursor paging.
    ///
    /// Pass the last seen event ID as `after` to fetch the next page; IDs
    /// are ULID-ordered, so the cursor walks rows in creation order.
    pub async fn list_by_submission(
        &self,
        submission: &SubmissionId,
        after: Option<&SubmissionEventId>,
        limit: i64,
    ) -> Result<Vec<SubmissionEvent>, StoreError> {
        let rows: Vec<SubmissionEventRow> = if let Some(after) = after {
            let sql = select_by_submission_sql(true);
            sqlx::query_as(&sql)
                .bind(submission.to_string())
                .bind(after.to_string())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
                .map_err(StoreError::Query)?
        } else {
            let sql = select_by_submission_sql(false);
            sqlx::query_as(&sql)
                .bind(submission.to_string())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
                .map_err(StoreError::Query)?
        };

        rows.into_iter().map(decode).collect()
    }

    /// Update a persisted record under its optimistic-lock version.
    ///
    /// The row is written only if it still carries the record's version;
    /// otherwise [`StoreError::VersionConflict`] is returned and nothing
    /// changes. On success the row's version is bumped and the new identity
    /// returned.
    pub async fn update(
        &self,
        event: &SubmissionEvent,
    ) -> Result<Identity<SubmissionEventId>, StoreError> {
        let id = event.identity.id.ok_or(StoreError::MissingIdentity)?;
        let expected = event.identity.version;
        let sql = update_sql();

        let result = sqlx::query(&sql)
            .bind(id.to_string())
            .bind(expected.value())
            .bind(event.event_type.map(|t| t.as_str()))
            .bind(event.performed_date.map(|d| d.to_rfc3339()))
            .bind(event.performed_by.map(|u| u.to_string()))
            .bind(event.performer_role.map(|r| r.as_str()))
            .bind(event.submission.map(|s| s.to_string()))
            .bind(event.comment.as_deref())
            .bind(event.link.as_deref())
            .execute(&self.pool)
            .await
            .map_err(StoreError::Query)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::VersionConflict {
                id: id.to_string(),
                expected: expected.value(),
            });
        }

        debug!(id = %id, version = %expected.next(), "Updated submission event");
        Ok(Identity::persisted(id, expected.next()))
    }

    /// Delete one row.
    ///
    /// Returns true if a row was removed. Destruction of persisted records
    /// belongs solely to this layer.
    pub async fn delete(&self, id: &SubmissionEventId) -> Result<bool, StoreError> {
        let sql = delete_sql();
        let result = sqlx::query(&sql)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StoreError::Query)?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            debug!(id = %id, "Deleted submission event");
        }
        Ok(deleted)
    }
}
