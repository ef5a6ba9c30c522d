//! Sort comparators.
//!
//! Every comparator is a total order: records with equal primary keys fall
//! through to a secondary key and finally to `id`, so two distinct records
//! never compare `Equal`.
//!
//! | Key | Primary order | Tie-break |
//! |-----|---------------|-----------|
//! | name | case-folded name, ascending | id |
//! | rating | rating descending, unrated = 0 | name order |
//! | price | price label, lexical | name order |
//! | submittedAt | newest first | id |
//!
//! Price labels are compared as strings, not as rupee amounts, so
//! `"₹1,00,000 - ₹2,50,000"` sorts before `"₹10,000 - ₹25,000"`.

use std::cmp::Ordering;

use crate::criteria::{DashboardSort, GallerySort};
use crate::model::{Artist, Submission};

pub fn compare_artists(a: &Artist, b: &Artist, key: GallerySort) -> Ordering {
    match key {
        GallerySort::Name => by_name(a, b),
        GallerySort::Rating => by_rating(a, b),
        GallerySort::Price => a
            .price_range
            .cmp(&b.price_range)
            .then_with(|| by_name(a, b)),
    }
}

pub fn compare_submissions(a: &Submission, b: &Submission, key: DashboardSort) -> Ordering {
    match key {
        DashboardSort::SubmittedAt => b
            .submitted_at()
            .cmp(&a.submitted_at())
            .then_with(|| a.id().cmp(b.id())),
        DashboardSort::Name => by_name(&a.artist, &b.artist),
        DashboardSort::Rating => by_rating(&a.artist, &b.artist),
    }
}

fn by_name(a: &Artist, b: &Artist) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.id.cmp(&b.id))
}

fn by_rating(a: &Artist, b: &Artist) -> Ordering {
    b.effective_rating()
        .total_cmp(&a.effective_rating())
        .then_with(|| by_name(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArtistDraft, SubmissionStatus};
    use chrono::{TimeZone, Utc};

    fn artist(id: &str, name: &str, rating: Option<f32>, price: &str) -> Artist {
        let mut draft = ArtistDraft::new(name, vec!["Singers".into()], price, "Mumbai").with_id(id);
        draft.rating = rating;
        Artist::try_from(draft).unwrap()
    }

    const LOW: &str = "₹10,000 - ₹25,000";
    const HIGH: &str = "₹1,00,000 - ₹2,50,000";

    #[test]
    fn name_is_case_insensitive() {
        let a = artist("1", "alpha", None, LOW);
        let b = artist("2", "Bravo", None, LOW);
        assert_eq!(compare_artists(&a, &b, GallerySort::Name), Ordering::Less);
    }

    #[test]
    fn identical_names_break_on_id() {
        let a = artist("1", "Same", None, LOW);
        let b = artist("2", "Same", None, LOW);
        assert_eq!(compare_artists(&a, &b, GallerySort::Name), Ordering::Less);
        assert_eq!(compare_artists(&b, &a, GallerySort::Name), Ordering::Greater);
    }

    #[test]
    fn rating_descends_and_unrated_counts_as_zero() {
        let top = artist("1", "Top", Some(4.9), LOW);
        let mid = artist("2", "Mid", Some(2.0), LOW);
        let none = artist("3", "None", None, LOW);
        let zero = artist("4", "Zero", Some(0.0), LOW);

        assert_eq!(compare_artists(&top, &mid, GallerySort::Rating), Ordering::Less);
        assert_eq!(compare_artists(&mid, &none, GallerySort::Rating), Ordering::Less);
        // Equal effective rating: falls back to name.
        assert_eq!(compare_artists(&none, &zero, GallerySort::Rating), Ordering::Less);
    }

    #[test]
    fn price_compares_labels_lexically() {
        let cheap = artist("1", "A", None, LOW);
        let pricey = artist("2", "B", None, HIGH);
        // "₹1,0..." < "₹10,..." as strings.
        assert_eq!(compare_artists(&pricey, &cheap, GallerySort::Price), Ordering::Less);
    }

    #[test]
    fn submitted_at_is_newest_first_then_id() {
        let t1 = Utc.with_ymd_and_hms(2024, 1, 13, 9, 20, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let old = Submission::new(artist("a", "Old", None, LOW), t1, SubmissionStatus::Pending);
        let new = Submission::new(artist("b", "New", None, LOW), t2, SubmissionStatus::Pending);
        let twin = Submission::new(artist("c", "Twin", None, LOW), t2, SubmissionStatus::Pending);

        assert_eq!(
            compare_submissions(&new, &old, DashboardSort::SubmittedAt),
            Ordering::Less
        );
        assert_eq!(
            compare_submissions(&new, &twin, DashboardSort::SubmittedAt),
            Ordering::Less
        );
    }

    #[test]
    fn names_differing_only_in_case_break_on_id() {
        let lower = artist("1", "alpha", None, LOW);
        let upper = artist("2", "Alpha", None, LOW);
        assert_eq!(compare_artists(&lower, &upper, GallerySort::Name), Ordering::Less);
        assert_eq!(compare_artists(&upper, &lower, GallerySort::Name), Ordering::Greater);
    }

    #[test]
    fn negative_zero_rating_ties_with_unrated() {
        let abe = artist("1", "Abe", Some(-0.0), LOW);
        let zed = artist("2", "Zed", None, LOW);
        assert_eq!(compare_artists(&abe, &zed, GallerySort::Rating), Ordering::Less);
        assert_eq!(compare_artists(&zed, &abe, GallerySort::Rating), Ordering::Greater);
    }

    fn submission(id: &str, name: &str, rating: Option<f32>) -> Submission {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        Submission::new(artist(id, name, rating, LOW), at, SubmissionStatus::Pending)
    }

    #[test]
    fn submissions_sort_by_name_with_id_tie_break() {
        let b = submission("1", "Bravo", None);
        let a2 = submission("3", "alpha", None);
        let a1 = submission("2", "Alpha", None);

        assert_eq!(compare_submissions(&a1, &b, DashboardSort::Name), Ordering::Less);
        assert_eq!(compare_submissions(&a1, &a2, DashboardSort::Name), Ordering::Less);
        assert_eq!(compare_submissions(&a2, &a1, DashboardSort::Name), Ordering::Greater);
    }

    #[test]
    fn submissions_sort_by_rating_then_name() {
        let top = submission("1", "Top", Some(4.9));
        let kim = submission("2", "Kim", Some(4.5));
        let ann = submission("3", "Ann", Some(4.5));
        let unrated = submission("4", "Un", None);

        assert_eq!(compare_submissions(&top, &ann, DashboardSort::Rating), Ordering::Less);
        // Equal ratings fall back to name.
        assert_eq!(compare_submissions(&ann, &kim, DashboardSort::Rating), Ordering::Less);
        assert_eq!(
            compare_submissions(&unrated, &kim, DashboardSort::Rating),
            Ordering::Greater
        );
    }

    #[test]
    fn distinct_records_never_compare_equal() {
        let a = artist("1", "Dup", Some(3.0), LOW);
        let b = artist("2", "Dup", Some(3.0), LOW);
        for key in [GallerySort::Name, GallerySort::Rating, GallerySort::Price] {
            assert_ne!(compare_artists(&a, &b, key), Ordering::Equal);
        }
    }
}
