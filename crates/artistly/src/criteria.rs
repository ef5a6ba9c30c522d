//! # Criteria Model
//!
//! A criteria value describes what one view wants to see. There are two
//! variants, one per consumer:
//!
//! | Variant | Fields | Used by |
//! |---------|--------|---------|
//! | [`GalleryCriteria`] | category / location / price sets, search term, sort | artist gallery |
//! | [`DashboardCriteria`] | status, single category, search term, sort | moderation table |
//!
//! ## Empty Means Unconstrained
//!
//! An empty set or the `all` sentinel places no constraint on its field. A
//! freshly constructed criteria value therefore matches every record.
//!
//! ## Mutation
//!
//! Every mutator validates its input before touching state. A rejected value
//! leaves the criteria unchanged. Toggling is idempotent: switching a value
//! on twice, or off when absent, is a no-op.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::catalog;
use crate::error::{ArtistlyError, Result};
use crate::model::SubmissionStatus;

/// A multi-select criterion dimension of the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MultiField {
    Category,
    Location,
    PriceRange,
}

impl MultiField {
    pub const ALL: [MultiField; 3] = [
        MultiField::Category,
        MultiField::Location,
        MultiField::PriceRange,
    ];

    /// Checks `value` against the published enumeration for this field.
    pub fn validate(&self, value: &str) -> Result<&'static str> {
        match self {
            MultiField::Category => catalog::validate_category(value),
            MultiField::Location => catalog::validate_location(value),
            MultiField::PriceRange => catalog::validate_price_range(value),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MultiField::Category => "category",
            MultiField::Location => "location",
            MultiField::PriceRange => "priceRange",
        }
    }
}

impl FromStr for MultiField {
    type Err = ArtistlyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "category" => Ok(MultiField::Category),
            "location" => Ok(MultiField::Location),
            "pricerange" | "price_range" | "price" => Ok(MultiField::PriceRange),
            _ => Err(ArtistlyError::invalid_value("field", s)),
        }
    }
}

/// A single-select criterion dimension of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    Status,
    Category,
    SortKey,
}

impl FromStr for ScalarField {
    type Err = ArtistlyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "status" => Ok(ScalarField::Status),
            "category" => Ok(ScalarField::Category),
            "sort" | "sortkey" | "sort_key" => Ok(ScalarField::SortKey),
            _ => Err(ArtistlyError::invalid_value("field", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GallerySort {
    #[default]
    Name,
    Rating,
    #[serde(alias = "price_range")]
    Price,
}

impl GallerySort {
    pub fn as_str(&self) -> &'static str {
        match self {
            GallerySort::Name => "name",
            GallerySort::Rating => "rating",
            GallerySort::Price => "price",
        }
    }
}

impl fmt::Display for GallerySort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GallerySort {
    type Err = ArtistlyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(GallerySort::Name),
            "rating" => Ok(GallerySort::Rating),
            "price" | "pricerange" | "price_range" => Ok(GallerySort::Price),
            _ => Err(ArtistlyError::invalid_value("sortKey", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardSort {
    #[default]
    #[serde(alias = "submittedAt")]
    SubmittedAt,
    Name,
    Rating,
}

impl DashboardSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardSort::SubmittedAt => "submittedAt",
            DashboardSort::Name => "name",
            DashboardSort::Rating => "rating",
        }
    }
}

impl fmt::Display for DashboardSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DashboardSort {
    type Err = ArtistlyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "submittedat" | "submitted_at" | "submitted-at" => Ok(DashboardSort::SubmittedAt),
            "name" => Ok(DashboardSort::Name),
            "rating" => Ok(DashboardSort::Rating),
            _ => Err(ArtistlyError::invalid_value("sortKey", s)),
        }
    }
}

/// Dashboard status selector. `All` is the unconstrained sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(SubmissionStatus),
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => write!(f, "{status}"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ArtistlyError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// Dashboard category selector. `All` is the unconstrained sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => f.write_str(category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ArtistlyError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        catalog::validate_category(s).map(|c| CategoryFilter::Only(c.to_string()))
    }
}

/// Selections driving the artist gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryCriteria {
    category: BTreeSet<String>,
    location: BTreeSet<String>,
    price_range: BTreeSet<String>,
    search_term: String,
    sort: GallerySort,
}

impl GalleryCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sorted_by(sort: GallerySort) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    pub fn category(&self) -> &BTreeSet<String> {
        &self.category
    }

    pub fn location(&self) -> &BTreeSet<String> {
        &self.location
    }

    pub fn price_range(&self) -> &BTreeSet<String> {
        &self.price_range
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> GallerySort {
        self.sort
    }

    pub fn field(&self, field: MultiField) -> &BTreeSet<String> {
        match field {
            MultiField::Category => &self.category,
            MultiField::Location => &self.location,
            MultiField::PriceRange => &self.price_range,
        }
    }

    fn field_mut(&mut self, field: MultiField) -> &mut BTreeSet<String> {
        match field {
            MultiField::Category => &mut self.category,
            MultiField::Location => &mut self.location,
            MultiField::PriceRange => &mut self.price_range,
        }
    }

    /// Replaces the search term verbatim. Case folding happens at match time.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
    }

    /// Adds (`included = true`) or removes `value` from a multi-select field.
    pub fn toggle(&mut self, field: MultiField, value: &str, included: bool) -> Result<()> {
        let value = field.validate(value)?;
        let set = self.field_mut(field);
        if included {
            set.insert(value.to_string());
        } else {
            set.remove(value);
        }
        Ok(())
    }

    /// Builder form of [`GalleryCriteria::toggle`] with `included = true`.
    pub fn with(mut self, field: MultiField, value: &str) -> Result<Self> {
        self.toggle(field, value, true)?;
        Ok(self)
    }

    pub fn with_search_term(mut self, text: impl Into<String>) -> Self {
        self.set_search_term(text);
        self
    }

    pub fn set_sort(&mut self, sort: GallerySort) {
        self.sort = sort;
    }

    /// Number of engaged fields: each non-empty set counts once, as does a
    /// non-empty search term.
    pub fn active_count(&self) -> usize {
        [&self.category, &self.location, &self.price_range]
            .into_iter()
            .filter(|set| !set.is_empty())
            .count()
            + usize::from(!self.search_term.is_empty())
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active_count() == 0
    }
}

/// Selections driving the moderation dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardCriteria {
    status: StatusFilter,
    category: CategoryFilter,
    sort: DashboardSort,
    search_term: String,
}

impl DashboardCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sorted_by(sort: DashboardSort) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    pub fn status(&self) -> StatusFilter {
        self.status
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn sort(&self) -> DashboardSort {
        self.sort
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_sort(&mut self, sort: DashboardSort) {
        self.sort = sort;
    }

    /// Parses `value` for `field` and replaces the field wholesale.
    pub fn set_single_value(&mut self, field: ScalarField, value: &str) -> Result<()> {
        match field {
            ScalarField::Status => self.status = value.parse()?,
            ScalarField::Category => self.category = value.parse()?,
            ScalarField::SortKey => self.sort = value.parse()?,
        }
        Ok(())
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_search_term(mut self, text: impl Into<String>) -> Self {
        self.search_term = text.into();
        self
    }

    /// One per non-`all` selector, plus one for a search term.
    pub fn active_count(&self) -> usize {
        usize::from(self.status != StatusFilter::All)
            + usize::from(self.category != CategoryFilter::All)
            + usize::from(!self.search_term.is_empty())
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gallery_criteria_is_unconstrained() {
        let c = GalleryCriteria::new();
        assert!(c.is_unconstrained());
        assert_eq!(c.sort(), GallerySort::Name);
    }

    #[test]
    fn toggle_on_twice_is_idempotent() {
        let mut c = GalleryCriteria::new();
        c.toggle(MultiField::Category, "DJs", true).unwrap();
        c.toggle(MultiField::Category, "DJs", true).unwrap();
        assert_eq!(c.category().len(), 1);
        assert_eq!(c.active_count(), 1);
    }

    #[test]
    fn toggle_off_absent_is_noop() {
        let mut c = GalleryCriteria::new();
        c.toggle(MultiField::Location, "Pune", false).unwrap();
        assert!(c.location().is_empty());
    }

    #[test]
    fn toggle_on_then_off_restores_set() {
        let mut c = GalleryCriteria::new()
            .with(MultiField::Location, "Delhi")
            .unwrap();
        let before = c.clone();
        c.toggle(MultiField::Location, "Mumbai", true).unwrap();
        c.toggle(MultiField::Location, "Mumbai", false).unwrap();
        assert_eq!(c, before);
    }

    #[test]
    fn toggle_rejects_unpublished_value_and_keeps_state() {
        let mut c = GalleryCriteria::new()
            .with(MultiField::Category, "Bands")
            .unwrap();
        let before = c.clone();
        let err = c.toggle(MultiField::Category, "Jugglers", true).unwrap_err();
        assert!(matches!(
            err,
            ArtistlyError::InvalidEnumValue {
                field: "category",
                ..
            }
        ));
        assert_eq!(c, before);
    }

    #[test]
    fn active_count_counts_fields_and_search() {
        let c = GalleryCriteria::new()
            .with(MultiField::Category, "DJs")
            .unwrap()
            .with(MultiField::Category, "Singers")
            .unwrap()
            .with(MultiField::PriceRange, "₹5,00,000+")
            .unwrap()
            .with_search_term("bolly");
        assert_eq!(c.active_count(), 3);
    }

    #[test]
    fn several_values_in_one_field_count_once() {
        let c = GalleryCriteria::new()
            .with(MultiField::Category, "DJs")
            .unwrap()
            .with(MultiField::Category, "Singers")
            .unwrap()
            .with(MultiField::Category, "Bands")
            .unwrap();
        assert_eq!(c.active_count(), 1);
        assert!(!c.is_unconstrained());
    }

    #[test]
    fn search_term_is_stored_verbatim() {
        let mut c = GalleryCriteria::new();
        c.set_search_term("  Mixed Case ");
        assert_eq!(c.search_term(), "  Mixed Case ");
        c.set_search_term("");
        assert!(c.is_unconstrained());
    }

    #[test]
    fn multi_field_parses_aliases() {
        assert_eq!("priceRange".parse::<MultiField>().unwrap(), MultiField::PriceRange);
        assert_eq!("price".parse::<MultiField>().unwrap(), MultiField::PriceRange);
        assert_eq!("Category".parse::<MultiField>().unwrap(), MultiField::Category);
        assert!("rating".parse::<MultiField>().is_err());
    }

    #[test]
    fn status_filter_accepts_all_sentinel() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "rejected".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(SubmissionStatus::Rejected)
        );
        assert!("unknown".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn category_filter_validates_against_catalog() {
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Magicians".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only("Magicians".into())
        );
        assert!("Poets".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn set_single_value_replaces_each_field() {
        let mut c = DashboardCriteria::new();
        c.set_single_value(ScalarField::Status, "pending").unwrap();
        c.set_single_value(ScalarField::Category, "DJs").unwrap();
        c.set_single_value(ScalarField::SortKey, "rating").unwrap();
        assert_eq!(c.status(), StatusFilter::Only(SubmissionStatus::Pending));
        assert_eq!(c.category(), &CategoryFilter::Only("DJs".into()));
        assert_eq!(c.sort(), DashboardSort::Rating);
        assert_eq!(c.active_count(), 2);

        c.set_single_value(ScalarField::Status, "all").unwrap();
        c.set_single_value(ScalarField::Category, "all").unwrap();
        assert_eq!(c.active_count(), 0);
    }

    #[test]
    fn set_single_value_rejects_bad_value_without_change() {
        let mut c = DashboardCriteria::new();
        assert!(c.set_single_value(ScalarField::SortKey, "price").is_err());
        assert_eq!(c, DashboardCriteria::new());
    }

    #[test]
    fn sort_keys_parse_common_spellings() {
        assert_eq!("submitted-at".parse::<DashboardSort>().unwrap(), DashboardSort::SubmittedAt);
        assert_eq!("submittedAt".parse::<DashboardSort>().unwrap(), DashboardSort::SubmittedAt);
        assert_eq!("PRICE".parse::<GallerySort>().unwrap(), GallerySort::Price);
        assert!("newest".parse::<GallerySort>().is_err());
    }
}
