use super::RecordStore;
use crate::dataset::Dataset;
use crate::error::{ArtistlyError, Result};
use crate::model::{Artist, Submission, SubmissionStatus};

/// In-memory record store. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    artists: Vec<Artist>,
    submissions: Vec<Submission>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store from a dataset, rejecting duplicate submission ids.
    pub fn from_dataset(dataset: Dataset) -> Result<Self> {
        let mut store = Self {
            artists: dataset.artists,
            submissions: Vec::with_capacity(dataset.submissions.len()),
        };
        for submission in dataset.submissions {
            if store.position(submission.id()).is_some() {
                return Err(ArtistlyError::DuplicateId(submission.id().to_string()));
            }
            store.submissions.push(submission);
        }
        Ok(store)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.submissions.iter().position(|s| s.id() == id)
    }
}

impl RecordStore for InMemoryStore {
    fn artists(&self) -> Result<Vec<Artist>> {
        Ok(self.artists.clone())
    }

    fn replace_artists(&mut self, artists: Vec<Artist>) -> Result<()> {
        self.artists = artists;
        Ok(())
    }

    fn submissions(&self) -> Result<Vec<Submission>> {
        Ok(self.submissions.clone())
    }

    fn get_submission(&self, id: &str) -> Result<Submission> {
        self.position(id)
            .map(|idx| self.submissions[idx].clone())
            .ok_or_else(|| ArtistlyError::NotFound(id.to_string()))
    }

    fn insert_submission(&mut self, submission: Submission) -> Result<()> {
        if self.position(submission.id()).is_some() {
            return Err(ArtistlyError::DuplicateId(submission.id().to_string()));
        }
        self.submissions.insert(0, submission);
        Ok(())
    }

    fn set_status(&mut self, id: &str, status: SubmissionStatus) -> Result<Submission> {
        let idx = self
            .position(id)
            .ok_or_else(|| ArtistlyError::NotFound(id.to_string()))?;
        let submission = &mut self.submissions[idx];
        submission.set_status(status);
        Ok(submission.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ArtistDraft;
    use chrono::{Duration, TimeZone, Utc};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn sample() -> Self {
            Self {
                store: InMemoryStore::from_dataset(Dataset::sample().unwrap()).unwrap(),
            }
        }

        pub fn with_artist(mut self, id: &str, name: &str, category: &str) -> Self {
            let artist = Artist::try_from(
                ArtistDraft::new(name, vec![category.to_string()], "₹25,000 - ₹50,000", "Pune")
                    .with_id(id),
            )
            .unwrap();
            self.store.artists.push(artist);
            self
        }

        /// Adds `count` pending submissions, one day apart, the last one newest.
        pub fn with_submissions(mut self, count: usize) -> Self {
            let base = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
            for i in 0..count {
                let draft = ArtistDraft::new(
                    format!("Submitter {}", i + 1),
                    vec!["Comedians".to_string()],
                    "₹10,000 - ₹25,000",
                    "Surat",
                );
                let submitted_at = base + Duration::days(i as i64);
                let sub =
                    Submission::from_draft(draft, format!("s{}", i + 1), submitted_at).unwrap();
                self.store.insert_submission(sub).unwrap();
            }
            self
        }
    }
}
