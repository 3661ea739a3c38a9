use serde::Serialize;

use crate::model::filters::FilterSet;
use crate::model::records::ScreenRow;

/// Rows satisfying every dimension of `filters`. Never falls back; an empty
/// result is returned as is.
pub fn apply_filters<'a, R, I>(rows: I, filters: &FilterSet) -> Vec<&'a R>
where
    R: ScreenRow + 'a,
    I: IntoIterator<Item = &'a R>,
{
    rows.into_iter().filter(|r| filters.passes(*r)).collect()
}

/// A filtered view as shown to the user, recording whether the requested
/// filters had to be cleared because they matched nothing.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredView<'a, R> {
    pub requested: FilterSet,
    pub applied: FilterSet,
    pub filters_cleared: bool,
    pub rows: Vec<&'a R>,
}

impl<'a, R> FilteredView<'a, R> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Applies `filters`, re-running with every dimension at `no filter` when the
/// selection leaves nothing to show.
pub fn filter_or_clear<'a, R: ScreenRow + 'a>(
    rows: &[&'a R],
    filters: &FilterSet,
) -> FilteredView<'a, R> {
    let filtered = apply_filters(rows.iter().copied(), filters);
    if filtered.is_empty() && !rows.is_empty() && !filters.is_none() {
        tracing::debug!(%filters, "no rows left under selected filters; clearing filters");
        return FilteredView {
            requested: *filters,
            applied: FilterSet::NONE,
            filters_cleared: true,
            rows: apply_filters(rows.iter().copied(), &FilterSet::NONE),
        };
    }
    FilteredView {
        requested: *filters,
        applied: *filters,
        filters_cleared: false,
        rows: filtered,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/filter.rs"]
mod tests;
