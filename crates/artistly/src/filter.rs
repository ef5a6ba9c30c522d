//! Filter evaluation.
//!
//! A record is included iff it passes every active criterion (AND across
//! fields). Within a multi-valued field the match is OR: a category criterion
//! of `{Singers, DJs}` admits any record tagged with either.
//!
//! Search is a case-insensitive substring match. The gallery searches name,
//! bio and category tags; the dashboard searches name, location and category
//! tags, the columns its table shows.

use crate::criteria::{CategoryFilter, DashboardCriteria, GalleryCriteria, StatusFilter};
use crate::model::{Artist, Submission};

/// Whether `artist` survives the gallery criteria.
pub fn include_artist(artist: &Artist, criteria: &GalleryCriteria) -> bool {
    matches_gallery_search(artist, criteria.search_term())
        && (criteria.category().is_empty()
            || artist.category.iter().any(|c| criteria.category().contains(c)))
        && (criteria.location().is_empty() || criteria.location().contains(&artist.location))
        && (criteria.price_range().is_empty()
            || criteria.price_range().contains(&artist.price_range))
}

/// Whether `submission` survives the dashboard criteria.
pub fn include_submission(submission: &Submission, criteria: &DashboardCriteria) -> bool {
    let matches_status = match criteria.status() {
        StatusFilter::All => true,
        StatusFilter::Only(status) => submission.status() == status,
    };

    let matches_category = match criteria.category() {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => submission.artist.has_category(category),
    };

    matches_status
        && matches_category
        && matches_dashboard_search(&submission.artist, criteria.search_term())
}

fn matches_gallery_search(artist: &Artist, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term_lower = term.to_lowercase();
    contains_folded(&artist.name, &term_lower)
        || contains_folded(&artist.bio, &term_lower)
        || artist.category.iter().any(|c| contains_folded(c, &term_lower))
}

fn matches_dashboard_search(artist: &Artist, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term_lower = term.to_lowercase();
    contains_folded(&artist.name, &term_lower)
        || contains_folded(&artist.location, &term_lower)
        || artist.category.iter().any(|c| contains_folded(c, &term_lower))
}

fn contains_folded(haystack: &str, term_lower: &str) -> bool {
    haystack.to_lowercase().contains(term_lower)
}
