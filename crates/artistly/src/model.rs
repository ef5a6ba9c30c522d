//! # Domain Model: Artists and Submissions
//!
//! This module defines the records the engine filters and sorts: [`Artist`],
//! the listable entity of the gallery, and [`Submission`], an artist
//! augmented with moderation state for the dashboard.
//!
//! ## Validated vs. Raw Shapes
//!
//! Records arrive from two places: the JSON dataset and the onboarding form.
//! Both deliver an [`ArtistDraft`], the raw camelCase shape with every field
//! loosely typed. Converting a draft into an [`Artist`] checks that
//! all of the following hold:
//!
//! - `id` is non-empty.
//! - `category` is non-empty and every tag is a published category.
//! - `priceRange` and `location` are published labels.
//! - `rating`, when present, lies within `0.0..=5.0`.
//! - `availability` defaults to `true` when absent.
//!
//! Invalid enumeration values fail with [`ArtistlyError::InvalidEnumValue`];
//! structural problems fail with [`ArtistlyError::InvalidRecord`].
//!
//! ## Submission Lifecycle
//!
//! A submission's `submitted_at` is fixed at creation and its `status` starts
//! at [`SubmissionStatus::Pending`]. Both fields are private: the only way to
//! change a stored status is [`crate::store::RecordStore::set_status`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog;
use crate::error::{ArtistlyError, Result};

pub const MAX_RATING: f32 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ArtistDraft")]
pub struct Artist {
    pub id: String,
    pub name: String,
    /// Display order is preserved; matching treats it as a set.
    pub category: Vec<String>,
    pub price_range: String,
    pub location: String,
    pub bio: String,
    pub languages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    pub availability: bool,
}

/// Unvalidated artist fields as supplied by a dataset or the onboarding form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDraft {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub category: Vec<String>,
    pub price_range: String,
    pub location: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub availability: Option<bool>,
}

impl ArtistDraft {
    pub fn new(
        name: impl Into<String>,
        category: Vec<String>,
        price_range: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            price_range: price_range.into(),
            location: location.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = Some(experience.into());
        self
    }

    pub fn with_availability(mut self, available: bool) -> Self {
        self.availability = Some(available);
        self
    }
}

impl TryFrom<ArtistDraft> for Artist {
    type Error = ArtistlyError;

    fn try_from(draft: ArtistDraft) -> Result<Self> {
        let id = match draft.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err(ArtistlyError::InvalidRecord("artist id is missing".into())),
        };

        if draft.category.is_empty() {
            return Err(ArtistlyError::InvalidRecord(format!(
                "artist {id} has no category"
            )));
        }
        let mut category: Vec<String> = Vec::with_capacity(draft.category.len());
        for tag in &draft.category {
            let tag = catalog::validate_category(tag)?;
            // Duplicates carry no meaning for matching; keep the first occurrence.
            if !category.iter().any(|c| c == tag) {
                category.push(tag.to_string());
            }
        }

        let price_range = catalog::validate_price_range(&draft.price_range)?.to_string();
        let location = catalog::validate_location(&draft.location)?.to_string();

        if let Some(rating) = draft.rating {
            if !(0.0..=MAX_RATING).contains(&rating) {
                return Err(ArtistlyError::InvalidRecord(format!(
                    "artist {id} has rating {rating} outside 0-{MAX_RATING}"
                )));
            }
        }

        Ok(Artist {
            id,
            name: draft.name,
            category,
            price_range,
            location,
            bio: draft.bio,
            languages: draft.languages,
            profile_image: draft.profile_image,
            rating: draft.rating,
            experience: draft.experience,
            availability: draft.availability.unwrap_or(true),
        })
    }
}

impl Artist {
    /// Whether the artist carries `tag` among its categories.
    pub fn has_category(&self, tag: &str) -> bool {
        self.category.iter().any(|c| c == tag)
    }

    /// Rating used for ordering; an unrated artist ranks as `0`.
    pub fn effective_rating(&self) -> f32 {
        // Adding +0.0 folds -0.0 into 0.0 so both compare equal under total_cmp.
        self.rating.unwrap_or(0.0) + 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 3] = [
        SubmissionStatus::Pending,
        SubmissionStatus::Approved,
        SubmissionStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = ArtistlyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(SubmissionStatus::Pending),
            "approved" => Ok(SubmissionStatus::Approved),
            "rejected" => Ok(SubmissionStatus::Rejected),
            _ => Err(ArtistlyError::invalid_value("status", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SubmissionDraft")]
pub struct Submission {
    #[serde(flatten)]
    pub artist: Artist,
    submitted_at: DateTime<Utc>,
    status: SubmissionStatus,
}

/// Raw submission shape: artist fields plus moderation state.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDraft {
    #[serde(flatten)]
    pub artist: ArtistDraft,
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub status: SubmissionStatus,
}

impl TryFrom<SubmissionDraft> for Submission {
    type Error = ArtistlyError;

    fn try_from(draft: SubmissionDraft) -> Result<Self> {
        Ok(Submission::new(
            Artist::try_from(draft.artist)?,
            draft.submitted_at,
            draft.status,
        ))
    }
}

impl Submission {
    pub fn new(artist: Artist, submitted_at: DateTime<Utc>, status: SubmissionStatus) -> Self {
        Self {
            artist,
            submitted_at,
            status,
        }
    }

    /// Builds a fresh pending submission from form input.
    ///
    /// Any id on the draft is replaced by `id`.
    pub fn from_draft(
        mut draft: ArtistDraft,
        id: String,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self> {
        draft.id = Some(id);
        let artist = Artist::try_from(draft)?;
        Ok(Self::new(artist, submitted_at, SubmissionStatus::Pending))
    }

    pub fn id(&self) -> &str {
        &self.artist.id
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: SubmissionStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ArtistDraft {
        ArtistDraft::new(
            "Priya Sharma",
            vec!["Singers".into(), "Musicians".into()],
            "₹50,000 - ₹1,00,000",
            "Mumbai",
        )
        .with_id("1")
        .with_bio("Bollywood vocalist")
    }

    #[test]
    fn valid_draft_converts() {
        let artist = Artist::try_from(draft()).unwrap();
        assert_eq!(artist.id, "1");
        assert_eq!(artist.category, vec!["Singers", "Musicians"]);
        assert!(artist.availability);
        assert!(artist.has_category("Singers"));
        assert!(!artist.has_category("DJs"));
    }

    #[test]
    fn missing_id_is_rejected() {
        let mut d = draft();
        d.id = None;
        assert!(matches!(
            Artist::try_from(d),
            Err(ArtistlyError::InvalidRecord(_))
        ));
    }

    #[test]
    fn empty_category_is_rejected() {
        let mut d = draft();
        d.category.clear();
        assert!(matches!(
            Artist::try_from(d),
            Err(ArtistlyError::InvalidRecord(_))
        ));
    }

    #[test]
    fn unknown_category_is_invalid_enum() {
        let mut d = draft();
        d.category.push("Jugglers".into());
        match Artist::try_from(d) {
            Err(ArtistlyError::InvalidEnumValue { field, value }) => {
                assert_eq!(field, "category");
                assert_eq!(value, "Jugglers");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn unknown_location_and_price_are_invalid_enum() {
        let mut d = draft();
        d.location = "Paris".into();
        assert!(matches!(
            Artist::try_from(d),
            Err(ArtistlyError::InvalidEnumValue { field: "location", .. })
        ));

        let mut d = draft();
        d.price_range = "cheap".into();
        assert!(matches!(
            Artist::try_from(d),
            Err(ArtistlyError::InvalidEnumValue { field: "priceRange", .. })
        ));
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        assert!(Artist::try_from(draft().with_rating(5.5)).is_err());
        assert!(Artist::try_from(draft().with_rating(-0.1)).is_err());
        assert!(Artist::try_from(draft().with_rating(5.0)).is_ok());
    }

    #[test]
    fn duplicate_tags_collapse() {
        let mut d = draft();
        d.category = vec!["DJs".into(), "DJs".into()];
        let artist = Artist::try_from(d).unwrap();
        assert_eq!(artist.category, vec!["DJs"]);
    }

    #[test]
    fn availability_defaults_true_when_absent_in_json() {
        let json = r#"{
            "id": "9",
            "name": "Test",
            "category": ["Bands"],
            "priceRange": "₹5,00,000+",
            "location": "Pune",
            "bio": "",
            "languages": []
        }"#;
        let artist: Artist = serde_json::from_str(json).unwrap();
        assert!(artist.availability);
        assert_eq!(artist.rating, None);
    }

    #[test]
    fn json_with_invalid_location_fails_to_deserialize() {
        let json = r#"{
            "id": "9",
            "name": "Test",
            "category": ["Bands"],
            "priceRange": "₹5,00,000+",
            "location": "Atlantis"
        }"#;
        assert!(serde_json::from_str::<Artist>(json).is_err());
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(
            "Approved".parse::<SubmissionStatus>().unwrap(),
            SubmissionStatus::Approved
        );
        assert!("archived".parse::<SubmissionStatus>().is_err());
    }

    #[test]
    fn submission_from_draft_is_pending_and_uses_given_id() {
        let now = Utc::now();
        let sub = Submission::from_draft(draft().with_id("ignored"), "abc".into(), now).unwrap();
        assert_eq!(sub.id(), "abc");
        assert_eq!(sub.status(), SubmissionStatus::Pending);
        assert_eq!(sub.submitted_at(), now);
    }

    #[test]
    fn submission_serializes_flat_camel_case() {
        let sub = Submission::from_draft(draft(), "abc".into(), Utc::now()).unwrap();
        let value = serde_json::to_value(&sub).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["priceRange"], "₹50,000 - ₹1,00,000");
        assert_eq!(value["status"], "pending");
        assert!(value.get("submittedAt").is_some());
    }

    #[test]
    fn submission_round_trips_through_json() {
        let sub = Submission::from_draft(draft(), "abc".into(), Utc::now()).unwrap();
        let json = serde_json::to_string(&sub).unwrap();
        let back: Submission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sub);
    }
}
