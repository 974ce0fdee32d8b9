use std::collections::BTreeSet;

use thiserror::Error;

use super::model::{Dataset, TimeOfDay};

// ---------------------------------------------------------------------------
// Filter parameters: bill range + selected service times
// ---------------------------------------------------------------------------

/// User-selected filter criteria for the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    /// Inclusive `(low, high)` interval on `total_bill`.
    pub bill_range: (f64, f64),
    /// Selected service times. May be empty, which matches nothing.
    pub times: BTreeSet<TimeOfDay>,
}

#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("invalid bill range: low {low} > high {high}")]
    InvalidRange { low: f64, high: f64 },
}

impl FilterParams {
    /// The unconstrained parameters: the dataset's full bill range and
    /// every service time selected.
    pub fn full(dataset: &Dataset) -> Self {
        FilterParams {
            bill_range: dataset.bill_range,
            times: TimeOfDay::ALL.into_iter().collect(),
        }
    }

    /// Replace the bill range. An inverted interval is rejected and the
    /// previous range is kept.
    pub fn set_bill_range(&mut self, low: f64, high: f64) -> Result<(), FilterError> {
        if low > high {
            return Err(FilterError::InvalidRange { low, high });
        }
        self.bill_range = (low, high);
        Ok(())
    }

    /// Toggle a service time in or out of the selection.
    pub fn toggle_time(&mut self, time: TimeOfDay) {
        if !self.times.remove(&time) {
            self.times.insert(time);
        }
    }
}

// ---------------------------------------------------------------------------
// Filter engine
// ---------------------------------------------------------------------------

/// Return indices of records that pass the current filters, in dataset
/// order.
///
/// A record passes when:
/// * `low ≤ total_bill ≤ high` (inclusive on both ends), and
/// * its service time is in the selected set.
///
/// An empty time selection yields an empty result. Inverted bounds are
/// sorted before use so a bad range can never panic or invert the filter.
pub fn filtered_indices(dataset: &Dataset, params: &FilterParams) -> Vec<usize> {
    let (mut low, mut high) = params.bill_range;
    if low > high {
        std::mem::swap(&mut low, &mut high);
    }

    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            low <= r.total_bill && r.total_bill <= high && params.times.contains(&r.time)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Day, Record, Sex, Smoker};

    fn record(bill: f64, tip: f64, time: TimeOfDay) -> Record {
        Record {
            total_bill: bill,
            tip,
            sex: Sex::Male,
            smoker: Smoker::No,
            day: Day::Sat,
            time,
            size: 2,
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            record(10.0, 2.0, TimeOfDay::Lunch),
            record(25.0, 4.0, TimeOfDay::Dinner),
            record(25.0, 3.0, TimeOfDay::Lunch),
            record(50.0, 5.0, TimeOfDay::Dinner),
        ])
    }

    #[test]
    fn unconstrained_params_keep_everything() {
        let ds = dataset();
        let params = FilterParams::full(&ds);
        assert_eq!(filtered_indices(&ds, &params), vec![0, 1, 2, 3]);
    }

    #[test]
    fn result_is_ordered_subset() {
        let ds = dataset();
        let mut params = FilterParams::full(&ds);
        params.bill_range = (20.0, 60.0);
        let idx = filtered_indices(&ds, &params);
        assert_eq!(idx, vec![1, 2, 3]);
        assert!(idx.windows(2).all(|w| w[0] < w[1]));
        assert!(idx.iter().all(|&i| i < ds.len()));
    }

    #[test]
    fn empty_time_selection_yields_empty_view() {
        let ds = dataset();
        let mut params = FilterParams::full(&ds);
        params.times.clear();
        assert!(filtered_indices(&ds, &params).is_empty());
    }

    #[test]
    fn bounds_are_inclusive_and_degenerate_range_matches_exactly() {
        let ds = dataset();
        let mut params = FilterParams::full(&ds);
        params.bill_range = (25.0, 25.0);
        assert_eq!(filtered_indices(&ds, &params), vec![1, 2]);
    }

    #[test]
    fn filter_is_idempotent() {
        let ds = dataset();
        let mut params = FilterParams::full(&ds);
        params.bill_range = (10.0, 25.0);
        params.times = [TimeOfDay::Lunch].into_iter().collect();
        assert_eq!(
            filtered_indices(&ds, &params),
            filtered_indices(&ds, &params)
        );
    }

    #[test]
    fn inverted_bounds_behave_as_sorted_range() {
        let ds = dataset();
        let mut params = FilterParams::full(&ds);
        params.bill_range = (25.0, 10.0);
        assert_eq!(filtered_indices(&ds, &params), vec![0, 1, 2]);
    }

    #[test]
    fn set_bill_range_rejects_inverted_interval() {
        let ds = dataset();
        let mut params = FilterParams::full(&ds);
        let before = params.bill_range;
        let err = params.set_bill_range(30.0, 20.0).unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidRange {
                low: 30.0,
                high: 20.0
            }
        );
        assert_eq!(params.bill_range, before);
    }

    #[test]
    fn toggle_time_round_trips() {
        let ds = dataset();
        let mut params = FilterParams::full(&ds);
        params.toggle_time(TimeOfDay::Lunch);
        assert!(!params.times.contains(&TimeOfDay::Lunch));
        params.toggle_time(TimeOfDay::Lunch);
        assert!(params.times.contains(&TimeOfDay::Lunch));
    }
}
