//! # Derivation Pipeline
//!
//! `derive` turns a record collection and a criteria value into the ordered
//! result a view displays:
//!
//! 1. **Filter**: keep every record for which [`Criteria::matches`] holds.
//! 2. **Sort**: order the survivors with [`Criteria::compare`] under the
//!    requested key.
//!
//! The input slice is never touched and a fresh `Vec` is returned each run.
//! Because the comparators are total orders, identical inputs always yield
//! identical output, element for element.

use std::cmp::Ordering;

use tracing::debug;

use crate::criteria::{DashboardCriteria, DashboardSort, GalleryCriteria, GallerySort};
use crate::filter::{include_artist, include_submission};
use crate::model::{Artist, Submission};
use crate::sort::{compare_artists, compare_submissions};

/// Common shape of the gallery and dashboard criteria.
pub trait Criteria: Clone {
    type Record: Clone;
    type SortKey: Copy + std::fmt::Debug;

    /// A criteria value with no constraints, ordered by `sort`.
    fn unconstrained(sort: Self::SortKey) -> Self;

    fn matches(&self, record: &Self::Record) -> bool;

    fn sort_key(&self) -> Self::SortKey;

    fn compare(a: &Self::Record, b: &Self::Record, key: Self::SortKey) -> Ordering;

    fn active_count(&self) -> usize;
}

impl Criteria for GalleryCriteria {
    type Record = Artist;
    type SortKey = GallerySort;

    fn unconstrained(sort: GallerySort) -> Self {
        GalleryCriteria::sorted_by(sort)
    }

    fn matches(&self, record: &Artist) -> bool {
        include_artist(record, self)
    }

    fn sort_key(&self) -> GallerySort {
        self.sort()
    }

    fn compare(a: &Artist, b: &Artist, key: GallerySort) -> Ordering {
        compare_artists(a, b, key)
    }

    fn active_count(&self) -> usize {
        GalleryCriteria::active_count(self)
    }
}

impl Criteria for DashboardCriteria {
    type Record = Submission;
    type SortKey = DashboardSort;

    fn unconstrained(sort: DashboardSort) -> Self {
        DashboardCriteria::sorted_by(sort)
    }

    fn matches(&self, record: &Submission) -> bool {
        include_submission(record, self)
    }

    fn sort_key(&self) -> DashboardSort {
        self.sort()
    }

    fn compare(a: &Submission, b: &Submission, key: DashboardSort) -> Ordering {
        compare_submissions(a, b, key)
    }

    fn active_count(&self) -> usize {
        DashboardCriteria::active_count(self)
    }
}

/// Filters `records` by `criteria` and orders the survivors by `key`.
pub fn derive<C: Criteria>(records: &[C::Record], criteria: &C, key: C::SortKey) -> Vec<C::Record> {
    let mut result: Vec<C::Record> = records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect();
    result.sort_by(|a, b| C::compare(a, b, key));

    debug!(
        records = records.len(),
        matched = result.len(),
        active = criteria.active_count(),
        sort = ?key,
        "derived view"
    );
    result
}

/// [`derive`] using the sort key carried by the criteria itself.
pub fn derive_with<C: Criteria>(records: &[C::Record], criteria: &C) -> Vec<C::Record> {
    derive(records, criteria, criteria.sort_key())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::MultiField;
    use crate::model::ArtistDraft;

    fn named(id: &str, name: &str) -> Artist {
        Artist::try_from(
            ArtistDraft::new(name, vec!["Dancers".into()], "₹5,00,000+", "Chennai").with_id(id),
        )
        .unwrap()
    }

    #[test]
    fn sorts_by_name() {
        let records = vec![named("1", "Bravo"), named("2", "Alpha")];
        let out = derive(&records, &GalleryCriteria::new(), GallerySort::Name);
        let names: Vec<&str> = out.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Bravo"]);
        // Input untouched.
        assert_eq!(records[0].name, "Bravo");
    }

    #[test]
    fn empty_inputs_yield_empty_output() {
        let out = derive(&[], &GalleryCriteria::new(), GallerySort::Rating);
        assert!(out.is_empty());
    }

    #[test]
    fn zero_matches_is_empty_not_error() {
        let records = vec![named("1", "Solo")];
        let criteria = GalleryCriteria::new()
            .with(MultiField::Category, "Magicians")
            .unwrap();
        assert!(derive_with(&records, &criteria).is_empty());
    }

    #[test]
    fn repeated_derivation_is_identical() {
        let records = vec![named("3", "Same"), named("1", "Same"), named("2", "Other")];
        let criteria = GalleryCriteria::new();
        let first = derive_with(&records, &criteria);
        let second = derive_with(&records, &criteria);
        assert_eq!(first, second);
        let ids: Vec<&str> = first.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }
}
