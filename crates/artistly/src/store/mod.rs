//! # Record Store
//!
//! The [`RecordStore`] trait is the authoritative holder of artists and
//! submissions. Views never read it directly: they take a snapshot, and the
//! [`crate::session::Session`] refreshes that snapshot after every write.
//!
//! ## Write Discipline
//!
//! The store has exactly two submission writers:
//!
//! - [`RecordStore::insert_submission`] adds a new submission at the front
//!   (newest first).
//! - [`RecordStore::set_status`] replaces the status of an existing one and
//!   nothing else.
//!
//! Submissions are never deleted, and there is no other path that changes a
//! stored status.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: Vec-backed store seeded from a
//!   [`crate::dataset::Dataset`].

use crate::error::Result;
use crate::model::{Artist, Submission, SubmissionStatus};

pub mod memory;

pub trait RecordStore {
    /// All gallery artists, in dataset order.
    fn artists(&self) -> Result<Vec<Artist>>;

    /// Replaces the gallery artists wholesale.
    fn replace_artists(&mut self, artists: Vec<Artist>) -> Result<()>;

    /// All submissions, newest insertion first.
    fn submissions(&self) -> Result<Vec<Submission>>;

    fn get_submission(&self, id: &str) -> Result<Submission>;

    /// Prepends a submission. Fails with `DuplicateId` if the id is taken.
    fn insert_submission(&mut self, submission: Submission) -> Result<()>;

    /// Sets the moderation status of submission `id` and returns the updated
    /// record. Fails with `NotFound` if absent.
    fn set_status(&mut self, id: &str, status: SubmissionStatus) -> Result<Submission>;
}
