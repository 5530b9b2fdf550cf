//! # pass-records
//!
//! Record types and persistence mapping for PASS submission events.
//!
//! ## Design Principles
//!
//! - Records are plain mutable values; identity is embedded, not inherited
//! - Enumerated fields map to canonical string tags through explicit converters
//! - An unrecognized persisted tag is a data-corruption condition, never a default
//! - Equality is structural over identity and every declared field, with an
//!   unset field equal only to another unset field
//!
//! ## Record Shape
//!
//! A [`SubmissionEvent`] captures one significant action performed by a user
//! against a submission: what happened ([`EventType`]), when, by whom and in
//! which capacity ([`PerformerRole`]), against which submission, plus an
//! optional comment and an optional link to the affected resource.
//!
//! Relations to `User` and `Submission` records are held as typed foreign-key
//! IDs from `pass-id`; this crate never loads or owns the referenced records.
//!
//! ## Persistence
//!
//! The [`mapping`] module declares the table name and field-to-column mapping
//! consumed by the storage layer. Conversion to and from persisted string
//! tags lives on the enums themselves ([`EventType::as_str`], `FromStr`).

mod error;
mod event;
mod identity;
pub mod mapping;
mod types;

pub use error::RecordError;
pub use event::{SubmissionEvent, SubmissionEventBuilder};
pub use identity::Identity;
pub use types::{EventType, PerformerRole};
