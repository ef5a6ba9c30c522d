//! # Session
//!
//! A [`Session`] is the explicit state object a front-end creates once and
//! passes around by reference. It owns the record store and one view per
//! screen:
//!
//! - the **gallery** view over artists,
//! - the **dashboard** view over submissions.
//!
//! ## Writes
//!
//! [`Session::submit`] and [`Session::set_status`] are the only write paths.
//! Both apply the write to the store in full and then refresh the dashboard
//! snapshot before returning, so the next read of the dashboard result
//! already reflects the write. Since all of this happens behind `&mut self`,
//! no derivation can interleave with a half-applied write. A front-end
//! sharing a session across threads wraps it in a `Mutex`.

use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::model::{Artist, ArtistDraft, Submission, SubmissionStatus};
use crate::store::RecordStore;
use crate::view::{DashboardView, GalleryView};

/// Submission counts per moderation status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

pub struct Session<S: RecordStore> {
    store: S,
    gallery: GalleryView,
    dashboard: DashboardView,
}

impl<S: RecordStore> Session<S> {
    pub fn new(store: S, config: &EngineConfig) -> Result<Self> {
        let gallery = GalleryView::new(store.artists()?, config.gallery_sort);
        let dashboard = DashboardView::new(store.submissions()?, config.dashboard_sort);
        Ok(Self {
            store,
            gallery,
            dashboard,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn gallery(&self) -> &GalleryView {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut GalleryView {
        &mut self.gallery
    }

    pub fn dashboard(&self) -> &DashboardView {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut DashboardView {
        &mut self.dashboard
    }

    /// Records a new submission from form input.
    ///
    /// Stamps a fresh time-ordered id, the current time and `pending`.
    pub fn submit(&mut self, draft: ArtistDraft) -> Result<Submission> {
        let id = Uuid::now_v7().to_string();
        let submission = Submission::from_draft(draft, id, Utc::now())?;
        self.store.insert_submission(submission.clone())?;
        info!(id = submission.id(), name = %submission.artist.name, "submission received");
        self.refresh_dashboard()?;
        Ok(submission)
    }

    /// Moderates submission `id`. Fails with `NotFound` if it does not exist.
    pub fn set_status(&mut self, id: &str, status: SubmissionStatus) -> Result<Submission> {
        let updated = self.store.set_status(id, status)?;
        info!(id, %status, "submission status changed");
        self.refresh_dashboard()?;
        Ok(updated)
    }

    /// Replaces the gallery's artists and re-derives the gallery.
    pub fn replace_artists(&mut self, artists: Vec<Artist>) -> Result<()> {
        self.store.replace_artists(artists)?;
        self.gallery.replace_records(self.store.artists()?);
        Ok(())
    }

    pub fn stats(&self) -> SubmissionStats {
        self.dashboard
            .records()
            .iter()
            .fold(SubmissionStats::default(), |mut stats, sub| {
                stats.total += 1;
                match sub.status() {
                    SubmissionStatus::Pending => stats.pending += 1,
                    SubmissionStatus::Approved => stats.approved += 1,
                    SubmissionStatus::Rejected => stats.rejected += 1,
                }
                stats
            })
    }

    /// Distinct categories across all submissions, in first-seen order.
    pub fn dashboard_categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for tag in self
            .dashboard
            .records()
            .iter()
            .flat_map(|s| s.artist.category.iter())
        {
            if !seen.contains(tag) {
                seen.push(tag.clone());
            }
        }
        seen
    }

    fn refresh_dashboard(&mut self) -> Result<()> {
        let submissions = self.store.submissions()?;
        self.dashboard.replace_records(submissions);
        Ok(())
    }
}
