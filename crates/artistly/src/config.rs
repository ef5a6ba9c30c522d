//! # Configuration
//!
//! Engine configuration is managed by [`confique`], which handles layered
//! loading from TOML files and environment variables.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `ARTISTLY_GALLERY_SORT`, `ARTISTLY_DASHBOARD_SORT`,
//!    `ARTISTLY_DATASET`.
//! 2. **Config files**: in the order given to [`EngineConfig::load`], earlier files win.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `gallery_sort` | `name` | Gallery order when no sort is chosen (`name`, `rating`, `price`) |
//! | `dashboard_sort` | `submitted_at` | Dashboard order (`submitted_at`, `name`, `rating`) |
//! | `dataset` | none | JSON dataset path; the built-in sample is used when absent |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::criteria::{DashboardSort, GallerySort};
use crate::error::{ArtistlyError, Result};

pub const CONFIG_FILE_NAME: &str = "artistly.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Default gallery sort key.
    #[config(env = "ARTISTLY_GALLERY_SORT", parse_env = parse_gallery_sort, default = "name")]
    pub gallery_sort: GallerySort,

    /// Default dashboard sort key.
    #[config(
        env = "ARTISTLY_DASHBOARD_SORT",
        parse_env = parse_dashboard_sort,
        default = "submitted_at"
    )]
    pub dashboard_sort: DashboardSort,

    /// Path to a JSON dataset.
    #[config(env = "ARTISTLY_DATASET")]
    pub dataset: Option<PathBuf>,
}

fn parse_gallery_sort(value: &str) -> Result<GallerySort> {
    value.parse()
}

fn parse_dashboard_sort(value: &str) -> Result<DashboardSort> {
    value.parse()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gallery_sort: GallerySort::Name,
            dashboard_sort: DashboardSort::SubmittedAt,
            dataset: None,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from the environment and the given files.
    ///
    /// Missing files are skipped.
    pub fn load<P: AsRef<Path>>(files: &[P]) -> Result<Self> {
        let mut builder = EngineConfig::builder().env();
        for file in files {
            builder = builder.file(file.as_ref());
        }
        builder
            .load()
            .map_err(|e| ArtistlyError::Config(e.to_string()))
    }

    /// Parses configuration from a TOML string, falling back to defaults.
    pub fn from_toml(source: &str) -> Result<Self> {
        let layer: <EngineConfig as Config>::Layer =
            toml::from_str(source).map_err(|e| ArtistlyError::Config(e.to_string()))?;
        EngineConfig::builder()
            .preloaded(layer)
            .load()
            .map_err(|e| ArtistlyError::Config(e.to_string()))
    }
}
