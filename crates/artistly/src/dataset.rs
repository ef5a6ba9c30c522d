//! Record datasets.
//!
//! A dataset is the whole record collection handed to the engine in one
//! piece. The JSON shape is:
//!
//! ```json
//! {
//!   "artists": [ { "id": "1", "name": "…", "category": ["Singers"], "priceRange": "…", "location": "…" } ],
//!   "submissions": [ { "id": "1", "…": "…", "submittedAt": "2024-01-15T10:30:00Z", "status": "approved" } ]
//! }
//! ```
//!
//! Every record is validated on load. The first invalid record aborts the
//! load with its error; nothing is normalized silently.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::model::{Artist, ArtistDraft, Submission, SubmissionDraft};

const SAMPLE_JSON: &str = include_str!("../data/sample.json");

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    pub artists: Vec<Artist>,
    pub submissions: Vec<Submission>,
}

#[derive(Deserialize)]
struct RawDataset {
    #[serde(default)]
    artists: Vec<ArtistDraft>,
    #[serde(default)]
    submissions: Vec<SubmissionDraft>,
}

impl Dataset {
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawDataset = serde_json::from_str(json)?;
        let artists = raw
            .artists
            .into_iter()
            .map(Artist::try_from)
            .collect::<Result<Vec<_>>>()?;
        let submissions = raw
            .submissions
            .into_iter()
            .map(Submission::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            artists,
            submissions,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The built-in mock catalog: eight artists and three submissions.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_JSON)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
