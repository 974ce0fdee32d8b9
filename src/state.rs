use crate::color::ColorMap;
use crate::data::filter::{filtered_indices, FilterParams};
use crate::data::model::{Category, Dataset, Record, TimeOfDay};
use crate::data::stats::Summary;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering.
///
/// Owns the immutable dataset and the user's filter parameters. Every
/// mutator recomputes `visible_indices` synchronously, so the cached view
/// always reflects the current parameters.
pub struct AppState {
    /// Loaded dataset, read-only after startup.
    pub dataset: Dataset,

    /// Current filter parameters.
    pub filters: FilterParams,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Which categorical column colours the scatter points, if any.
    pub scatter_color: Option<Category>,

    /// Active colour map for the scatter plot.
    pub color_map: Option<ColorMap>,

    /// Which categorical column splits the ridgeline rows.
    pub ridge_split: Category,
}

impl AppState {
    /// Start a session over a freshly loaded dataset, unfiltered.
    pub fn new(dataset: Dataset) -> Self {
        let filters = FilterParams::full(&dataset);
        let visible_indices = (0..dataset.len()).collect();
        AppState {
            dataset,
            filters,
            visible_indices,
            scatter_color: None,
            color_map: None,
            ridge_split: Category::Day,
        }
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.filters);
    }

    /// Restore the default parameters: full bill range, both service times.
    pub fn reset_filters(&mut self) {
        self.filters = FilterParams::full(&self.dataset);
        self.refilter();
    }

    /// Apply a new bill range from the UI. Values are clamped to the
    /// dataset's global range; an inverted interval is dropped and the
    /// previous range kept.
    pub fn set_bill_range(&mut self, low: f64, high: f64) {
        let (min, max) = self.dataset.bill_range;
        let low = low.clamp(min, max);
        let high = high.clamp(min, max);
        match self.filters.set_bill_range(low, high) {
            Ok(()) => self.refilter(),
            Err(e) => log::warn!("ignoring bill range update: {e}"),
        }
    }

    /// Toggle a service time in or out of the selection.
    pub fn toggle_time(&mut self, time: TimeOfDay) {
        self.filters.toggle_time(time);
        self.refilter();
    }

    /// Set the scatter colour-by column and rebuild the colour map.
    pub fn set_scatter_color(&mut self, category: Option<Category>) {
        self.scatter_color = category;
        if self.color_map.as_ref().map(|cm| cm.category) != category {
            self.color_map = category.map(ColorMap::new);
        }
    }

    /// Summary metrics over the currently visible records.
    pub fn summary(&self) -> Summary {
        Summary::compute(&self.dataset, &self.visible_indices)
    }

    /// Iterate the currently visible records in dataset order.
    pub fn visible_records(&self) -> impl Iterator<Item = &Record> {
        self.visible_indices.iter().map(|&i| &self.dataset.records[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Day, Sex, Smoker};

    fn record(bill: f64, tip: f64, time: TimeOfDay) -> Record {
        Record {
            total_bill: bill,
            tip,
            sex: Sex::Male,
            smoker: Smoker::Yes,
            day: Day::Fri,
            time,
            size: 3,
        }
    }

    fn state() -> AppState {
        AppState::new(Dataset::from_records(vec![
            record(10.0, 2.0, TimeOfDay::Lunch),
            record(20.0, 3.0, TimeOfDay::Dinner),
            record(40.0, 5.0, TimeOfDay::Dinner),
        ]))
    }

    #[test]
    fn starts_unfiltered() {
        let s = state();
        assert_eq!(s.visible_indices, vec![0, 1, 2]);
        assert_eq!(s.filters.bill_range, (10.0, 40.0));
    }

    #[test]
    fn mutators_keep_view_in_sync() {
        let mut s = state();
        s.toggle_time(TimeOfDay::Dinner);
        assert_eq!(s.visible_indices, vec![0]);
        s.set_bill_range(15.0, 40.0);
        assert!(s.visible_indices.is_empty());
        assert_eq!(s.summary().tippers, 0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut s = state();
        s.set_bill_range(12.0, 18.0);
        s.toggle_time(TimeOfDay::Lunch);
        s.reset_filters();
        assert_eq!(s.filters.bill_range, s.dataset.bill_range);
        assert_eq!(s.filters.times.len(), 2);
        assert_eq!(s.visible_indices, vec![0, 1, 2]);
    }

    #[test]
    fn bill_range_is_clamped_to_dataset_limits() {
        let mut s = state();
        s.set_bill_range(0.0, 1000.0);
        assert_eq!(s.filters.bill_range, (10.0, 40.0));
    }

    #[test]
    fn inverted_range_is_ignored() {
        let mut s = state();
        let before = s.filters.bill_range;
        s.set_bill_range(30.0, 15.0);
        assert_eq!(s.filters.bill_range, before);
        assert_eq!(s.visible_indices, vec![0, 1, 2]);
    }
}
