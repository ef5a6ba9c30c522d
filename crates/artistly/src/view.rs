//! # Views
//!
//! A [`View`] is the state one screen holds: a criteria value, the record
//! snapshot it filters, and the derived result. Consumers read the result by
//! reference and change it only through mutators.
//!
//! ## Synchronous Recompute
//!
//! Every successful mutator re-runs the pipeline exactly once before it
//! returns. There is no batching: the result after a call always reflects that
//! call. A mutator that fails validation leaves both the criteria and the
//! result untouched.
//!
//! Mutations are applied to a copy of the criteria which replaces the current
//! one only on success, so a reader never sees a partially updated criteria.

use tracing::warn;

use crate::criteria::{
    CategoryFilter, DashboardCriteria, DashboardSort, GalleryCriteria, GallerySort, MultiField,
    ScalarField, StatusFilter,
};
use crate::error::Result;
use crate::pipeline::{derive, Criteria};

pub struct View<C: Criteria> {
    records: Vec<C::Record>,
    default_sort: C::SortKey,
    criteria: C,
    results: Vec<C::Record>,
}

pub type GalleryView = View<GalleryCriteria>;
pub type DashboardView = View<DashboardCriteria>;

impl<C: Criteria> View<C> {
    /// Creates an unconstrained view over `records`, ordered by `default_sort`.
    pub fn new(records: Vec<C::Record>, default_sort: C::SortKey) -> Self {
        let criteria = C::unconstrained(default_sort);
        let results = derive(&records, &criteria, default_sort);
        Self {
            records,
            default_sort,
            criteria,
            results,
        }
    }

    pub fn criteria(&self) -> &C {
        &self.criteria
    }

    /// The current derived result.
    pub fn results(&self) -> &[C::Record] {
        &self.results
    }

    /// The snapshot the view derives from.
    pub fn records(&self) -> &[C::Record] {
        &self.records
    }

    pub fn active_count(&self) -> usize {
        self.criteria.active_count()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Resets every criterion, including the sort key, to its default.
    pub fn clear_all(&mut self) {
        self.criteria = C::unconstrained(self.default_sort);
        self.refresh();
    }

    pub(crate) fn replace_records(&mut self, records: Vec<C::Record>) {
        self.records = records;
        self.refresh();
    }

    fn update<F>(&mut self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut C) -> Result<()>,
    {
        let mut next = self.criteria.clone();
        mutate(&mut next)?;
        self.criteria = next;
        self.refresh();
        Ok(())
    }

    fn apply<F: FnOnce(&mut C)>(&mut self, mutate: F) {
        mutate(&mut self.criteria);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.results = derive(&self.records, &self.criteria, self.criteria.sort_key());
    }
}

impl View<GalleryCriteria> {
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.apply(|c| c.set_search_term(text));
    }

    pub fn toggle_set_member(
        &mut self,
        field: MultiField,
        value: &str,
        included: bool,
    ) -> Result<()> {
        self.update(|c| c.toggle(field, value, included))
    }

    pub fn set_sort(&mut self, sort: GallerySort) {
        self.apply(|c| c.set_sort(sort));
    }

    /// Merges an externally supplied category (e.g. a `?category=` link) into
    /// the criteria exactly as an "on" toggle would.
    ///
    /// `None` or an empty value is a no-op.
    pub fn apply_deep_link(&mut self, category: Option<&str>) -> Result<()> {
        let Some(category) = category.filter(|c| !c.is_empty()) else {
            return Ok(());
        };
        self.toggle_set_member(MultiField::Category, category, true)
            .inspect_err(|e| warn!(category, error = %e, "ignoring deep-link category"))
    }
}

impl View<DashboardCriteria> {
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.apply(|c| c.set_search_term(text));
    }

    pub fn set_single_value(&mut self, field: ScalarField, value: &str) -> Result<()> {
        self.update(|c| c.set_single_value(field, value))
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.apply(|c| c.set_status(status));
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.apply(|c| c.set_category(category));
    }

    pub fn set_sort(&mut self, sort: DashboardSort) {
        self.apply(|c| c.set_sort(sort));
    }
}
