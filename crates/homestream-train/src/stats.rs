//! Feature statistics computation for the simulator artifact.

use std::collections::BTreeMap;

use homestream_core::stats::{FeatureKind, FeatureSummary};
use homestream_data::Table;

use crate::error::{Result, TrainError};

/// Computes per-feature summaries over every column of `table` except the
/// target.
///
/// A column whose observed values are all exactly 0 or 1 is recorded as
/// [`FeatureKind::Binary`]; everything else is continuous. Standard
/// deviations are population (ddof = 0) to match the scaler.
pub fn compute_feature_stats(
    table: &Table,
    target: &str,
) -> Result<BTreeMap<String, FeatureSummary>> {
    if table.num_rows() == 0 {
        return Err(TrainError::TooFewRows { rows: 0, min: 1 });
    }

    let mut out = BTreeMap::new();
    for header in table.headers() {
        if header == target {
            continue;
        }
        // Headers come from the table itself, so the column always exists.
        let values = table.column(header).unwrap_or(&[]);
        let summary = summarize(header, values)?;
        out.insert(header.clone(), summary);
    }
    Ok(out)
}

/// Mean and population standard deviation of a slice.
pub fn mean_and_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

fn summarize(feature: &str, values: &[f64]) -> Result<FeatureSummary> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (mean, std) = mean_and_std(values);
    let kind = if values.iter().all(|v| *v == 0.0 || *v == 1.0) {
        FeatureKind::Binary
    } else {
        FeatureKind::Continuous
    };
    Ok(FeatureSummary::new(feature, min, max, mean, std, kind)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::new(
            vec![
                "Gr Liv Area".to_string(),
                "Central Air".to_string(),
                "SalePrice".to_string(),
            ],
            vec![
                vec![1000.0, 2000.0, 3000.0, 4000.0],
                vec![1.0, 0.0, 1.0, 1.0],
                vec![100.0, 200.0, 300.0, 400.0],
            ],
        )
    }

    #[test]
    fn test_stats_exclude_target_column() {
        let stats = compute_feature_stats(&table(), "SalePrice").unwrap();
        assert_eq!(stats.len(), 2);
        assert!(!stats.contains_key("SalePrice"));
    }

    #[test]
    fn test_stats_values() {
        let stats = compute_feature_stats(&table(), "SalePrice").unwrap();
        let area = &stats["Gr Liv Area"];
        assert_eq!(area.min, 1000.0);
        assert_eq!(area.max, 4000.0);
        assert_eq!(area.mean, 2500.0);
        // Population std of {1000, 2000, 3000, 4000}.
        assert!((area.std - 1118.033988749895).abs() < 1e-9);
        assert_eq!(area.kind, FeatureKind::Continuous);
    }

    #[test]
    fn test_indicator_column_detected_as_binary() {
        let stats = compute_feature_stats(&table(), "SalePrice").unwrap();
        assert_eq!(stats["Central Air"].kind, FeatureKind::Binary);
    }

    #[test]
    fn test_mean_and_std_population() {
        let (mean, std) = mean_and_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(mean, 5.0);
        assert_eq!(std, 2.0);
    }
}
