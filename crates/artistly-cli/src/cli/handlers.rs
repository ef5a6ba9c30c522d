//! Command handlers.
//!
//! Each handler applies the parsed flags to the session through the engine's
//! mutators, then hands the resulting view to the renderer. Handlers never
//! print; `run` prints whatever they return.

use super::render::{Message, Renderer};
use super::setup::{ArtistsArgs, DashboardArgs};
use anyhow::Context;
use artistly::criteria::MultiField;
use artistly::model::{ArtistDraft, SubmissionStatus};
use artistly::session::Session;
use artistly::store::RecordStore;
use chrono::Utc;
use std::fs;
use std::path::Path;
use tracing::debug;

pub struct AppState<S: RecordStore> {
    pub session: Session<S>,
    pub renderer: Renderer,
}

pub fn artists<S: RecordStore>(
    state: &mut AppState<S>,
    args: ArtistsArgs,
) -> anyhow::Result<String> {
    let gallery = state.session.gallery_mut();

    // The view already warned; an unusable link leaves the gallery unfiltered.
    if let Err(e) = gallery.apply_deep_link(args.deep_link.as_deref()) {
        debug!(error = %e, "continuing without deep-link category");
    }

    let toggles = [
        (MultiField::Category, &args.category),
        (MultiField::Location, &args.location),
        (MultiField::PriceRange, &args.price),
    ];
    for (field, values) in toggles {
        for value in values {
            gallery
                .toggle_set_member(field, value, true)
                .with_context(|| format!("invalid --{} filter", flag_name(field)))?;
        }
    }
    if let Some(term) = args.search {
        gallery.set_search_term(term);
    }
    if let Some(sort) = args.sort {
        gallery.set_sort(sort);
    }

    state.renderer.artists(state.session.gallery())
}

pub fn dashboard<S: RecordStore>(
    state: &mut AppState<S>,
    args: DashboardArgs,
) -> anyhow::Result<String> {
    let mut messages = Vec::new();

    for path in &args.submit {
        let draft = read_draft(path)?;
        let submission = state
            .session
            .submit(draft)
            .with_context(|| format!("cannot submit {}", path.display()))?;
        messages.push(Message::success(format!(
            "Submitted {} as {}",
            submission.artist.name,
            submission.id()
        )));
    }

    let moderation = args
        .approve
        .iter()
        .map(|id| (id, SubmissionStatus::Approved))
        .chain(args.reject.iter().map(|id| (id, SubmissionStatus::Rejected)));
    for (id, status) in moderation {
        let updated = state.session.set_status(id, status)?;
        let verb = match status {
            SubmissionStatus::Approved => "Approved",
            SubmissionStatus::Rejected => "Rejected",
            SubmissionStatus::Pending => "Reopened",
        };
        messages.push(Message::success(format!(
            "{verb} {} ({})",
            updated.artist.name,
            updated.id()
        )));
    }

    let view = state.session.dashboard_mut();
    if let Some(status) = args.status {
        view.set_status(status);
    }
    if let Some(category) = args.category {
        view.set_category(category);
    }
    if let Some(term) = args.search {
        view.set_search_term(term);
    }
    if let Some(sort) = args.sort {
        view.set_sort(sort);
    }

    state
        .renderer
        .dashboard(&state.session, &messages, Utc::now())
}

pub fn catalog<S: RecordStore>(state: &AppState<S>) -> anyhow::Result<String> {
    state.renderer.catalog()
}

fn read_draft(path: &Path) -> anyhow::Result<ArtistDraft> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("cannot read submission {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("invalid submission {}", path.display()))
}

fn flag_name(field: MultiField) -> &'static str {
    match field {
        MultiField::Category => "category",
        MultiField::Location => "location",
        MultiField::PriceRange => "price",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::setup::OutputFormat;
    use artistly::config::EngineConfig;
    use artistly::criteria::StatusFilter;
    use artistly::dataset::Dataset;
    use artistly::store::memory::InMemoryStore;

    fn state(format: OutputFormat) -> AppState<InMemoryStore> {
        let store = InMemoryStore::from_dataset(Dataset::sample().unwrap()).unwrap();
        AppState {
            session: Session::new(store, &EngineConfig::default()).unwrap(),
            renderer: Renderer::with_color(format, false).unwrap(),
        }
    }

    #[test]
    fn artists_applies_every_flag() {
        let mut s = state(OutputFormat::Text);
        let args = ArtistsArgs {
            category: vec!["Singers".into()],
            location: vec!["Hyderabad".into()],
            ..Default::default()
        };
        let out = artists(&mut s, args).unwrap();
        assert!(out.starts_with("Kavya Reddy"));
        assert_eq!(s.session.gallery().active_count(), 2);
    }

    #[test]
    fn artists_unknown_filter_is_an_error() {
        let mut s = state(OutputFormat::Text);
        let args = ArtistsArgs {
            location: vec!["Atlantis".into()],
            ..Default::default()
        };
        let err = artists(&mut s, args).unwrap_err();
        assert!(format!("{err:#}").contains("invalid --location filter"));
    }

    #[test]
    fn artists_ignores_bad_deep_link() {
        let mut s = state(OutputFormat::Text);
        let args = ArtistsArgs {
            deep_link: Some("Acrobats".into()),
            ..Default::default()
        };
        artists(&mut s, args).unwrap();
        assert_eq!(s.session.gallery().len(), 8);
    }

    #[test]
    fn dashboard_moderates_before_filtering() {
        let mut s = state(OutputFormat::Text);
        let args = DashboardArgs {
            approve: vec!["2".into()],
            status: Some(StatusFilter::Only(SubmissionStatus::Pending)),
            ..Default::default()
        };
        let out = dashboard(&mut s, args).unwrap();
        assert!(out.starts_with("Approved Arjun Khanna (2)"));
        assert!(s.session.dashboard().is_empty());
        assert_eq!(s.session.stats().approved, 3);
    }

    #[test]
    fn dashboard_unknown_id_fails() {
        let mut s = state(OutputFormat::Text);
        let args = DashboardArgs {
            reject: vec!["nonexistent-id".into()],
            ..Default::default()
        };
        assert!(dashboard(&mut s, args).is_err());
    }
}
