use anyhow::{bail, Context, Result};

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Bundled dataset
// ---------------------------------------------------------------------------

/// Tipping records bundled into the binary at compile time.
const TIPS_CSV: &str = include_str!("../../assets/tips.csv");

/// Parse the bundled tipping dataset. Called once at process start.
pub fn load_embedded() -> Result<Dataset> {
    load_csv(TIPS_CSV).context("parsing bundled tips.csv")
}

/// Parse CSV text with a
/// `total_bill,tip,sex,smoker,day,time,size` header row.
fn load_csv(text: &str) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let mut records: Vec<Record> = Vec::new();
    for (row_no, result) in reader.deserialize().enumerate() {
        let record: Record = result.with_context(|| format!("CSV row {row_no}"))?;
        if record.total_bill <= 0.0 {
            bail!(
                "CSV row {row_no}: bill must be positive, got {}",
                record.total_bill
            );
        }
        if record.tip < 0.0 {
            bail!("CSV row {row_no}: tip must be non-negative, got {}", record.tip);
        }
        records.push(record);
    }

    if records.is_empty() {
        bail!("dataset contains no records");
    }
    Ok(Dataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_parses_and_is_well_formed() {
        let ds = load_embedded().unwrap();
        assert!(!ds.is_empty());
        assert!(ds.records.iter().all(|r| r.total_bill > 0.0 && r.tip >= 0.0));

        let min = ds
            .records
            .iter()
            .map(|r| r.total_bill)
            .fold(f64::INFINITY, f64::min);
        let max = ds
            .records
            .iter()
            .map(|r| r.total_bill)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(ds.bill_range, (min, max));
        assert!(min < max);
    }

    #[test]
    fn rejects_non_positive_bill() {
        let csv = "total_bill,tip,sex,smoker,day,time,size\n0.0,1.0,Male,No,Sun,Dinner,2\n";
        assert!(load_csv(csv).is_err());
    }

    #[test]
    fn rejects_unknown_category_value() {
        let csv = "total_bill,tip,sex,smoker,day,time,size\n12.0,2.0,Male,No,Mon,Dinner,2\n";
        assert!(load_csv(csv).is_err());
    }

    #[test]
    fn rejects_empty_input() {
        let csv = "total_bill,tip,sex,smoker,day,time,size\n";
        assert!(load_csv(csv).is_err());
    }
}
