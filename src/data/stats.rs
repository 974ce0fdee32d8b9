use super::model::Dataset;

// ---------------------------------------------------------------------------
// Summary metrics over the filtered view
// ---------------------------------------------------------------------------

/// Aggregate statistics for the currently visible records.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of visible records.
    pub tippers: usize,
    /// Mean of tip / bill, `None` when no records are visible.
    pub avg_tip_percent: Option<f64>,
    /// Mean bill amount, `None` when no records are visible.
    pub avg_bill: Option<f64>,
}

impl Summary {
    /// Compute the summary from the dataset and the visible indices.
    pub fn compute(dataset: &Dataset, indices: &[usize]) -> Self {
        if indices.is_empty() {
            return Summary {
                tippers: 0,
                avg_tip_percent: None,
                avg_bill: None,
            };
        }

        let n = indices.len() as f64;
        let mut percent_sum = 0.0;
        let mut bill_sum = 0.0;
        for &i in indices {
            let r = &dataset.records[i];
            percent_sum += r.tip_percent();
            bill_sum += r.total_bill;
        }

        Summary {
            tippers: indices.len(),
            avg_tip_percent: Some(percent_sum / n),
            avg_bill: Some(bill_sum / n),
        }
    }
}

/// Format a fractional value as a percentage, `"n/a"` when absent.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => "n/a".to_string(),
    }
}

/// Format a dollar amount, `"n/a"` when absent.
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${v:.2}"),
        None => "n/a".to_string(),
    }
}
