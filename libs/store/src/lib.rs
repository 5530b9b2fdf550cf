//! # pass-store
//!
//! Postgres storage for PASS submission event records.
//!
//! This crate owns the persistence seam of the records layer:
//!
//! - Connection pool management ([`DbConfig`], [`Database`])
//! - Row mapping for the `pass_submission_event` table, built from the
//!   declarative column mapping in `pass-records`
//! - Converter registration at read time: enum tags, timestamps, and IDs are
//!   decoded when a row is loaded, and an unrecognized persisted value
//!   surfaces as [`StoreError::DataIntegrity`] naming the offending row
//! - Row lifecycle: insert, fetch, list, optimistic-lock update, delete
//!
//! Retries for transient database failures are the caller's concern; this
//! crate reports them as [`StoreError::Query`] and stops.

mod db;
mod error;
mod events;

pub use db::{Database, DbConfig};
pub use error::StoreError;
pub use events::{SubmissionEventRow, SubmissionEventStore};
