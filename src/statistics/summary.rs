//! Per-column quantile summaries of a result table.

use serde::{Deserialize, Serialize};

use crate::constants::SUMMARY_PROBABILITIES;
use crate::result::ResultTable;
use crate::types::Regime;

use super::quantile::compute_quantiles;

/// Quantile band of one column across trials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Column name, e.g. `cor2`.
    pub column: String,
    /// Attribute regime of the column.
    pub regime: Regime,
    /// Diversity order of the column.
    pub order: f64,
    /// 2.5th percentile.
    pub lower: f64,
    /// Median.
    pub median: f64,
    /// 97.5th percentile.
    pub upper: f64,
}

/// Quantile bands for every column of a [`ResultTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of trials summarized.
    pub trials: usize,
    /// One entry per column, in table column order.
    pub columns: Vec<ColumnSummary>,
}

impl Summary {
    /// Summarize `table` with the 2.5 / 50 / 97.5 percentiles.
    ///
    /// # Panics
    ///
    /// Panics if the table has no rows.
    pub fn from_table(table: &ResultTable) -> Self {
        assert!(!table.is_empty(), "Cannot summarize an empty result table");

        let width = table.orders.len();
        let mut columns = Vec::with_capacity(table.columns.len());
        for (r, regime) in Regime::ALL.into_iter().enumerate() {
            for (k, &order) in table.orders.iter().enumerate() {
                let idx = r * width + k;
                let values = table.column_at(idx);
                let q = compute_quantiles(&values, &SUMMARY_PROBABILITIES);
                columns.push(ColumnSummary {
                    column: table.columns[idx].clone(),
                    regime,
                    order,
                    lower: q[0],
                    median: q[1],
                    upper: q[2],
                });
            }
        }

        Self {
            trials: table.len(),
            columns,
        }
    }

    /// Bands for one regime, in order of increasing column position.
    pub fn regime(&self, regime: Regime) -> impl Iterator<Item = &ColumnSummary> {
        self.columns.iter().filter(move |c| c.regime == regime)
    }

    /// Band for a named column.
    pub fn get(&self, column: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.column == column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trial::TrialResult;

    #[test]
    fn test_constant_column_summary() {
        let trials: Vec<TrialResult> = (0..25)
            .map(|i| TrialResult {
                correlated: vec![3.5, i as f64],
                uncorrelated: vec![2.0, 1.0],
            })
            .collect();
        let table = ResultTable::from_trials(&[1.0, 2.0], &trials);
        let summary = Summary::from_table(&table);

        assert_eq!(summary.trials, 25);
        assert_eq!(summary.columns.len(), 4);

        let cor1 = summary.get("cor1").unwrap();
        assert_eq!((cor1.lower, cor1.median, cor1.upper), (3.5, 3.5, 3.5));
        assert_eq!(cor1.regime, Regime::Correlated);
        assert_eq!(cor1.order, 1.0);

        let cor2 = summary.get("cor2").unwrap();
        assert!((cor2.lower - 0.6).abs() < 1e-12);
        assert!((cor2.median - 12.0).abs() < 1e-12);
        assert!((cor2.upper - 23.4).abs() < 1e-12);
    }

    #[test]
    fn test_regime_filter() {
        let trials = vec![TrialResult {
            correlated: vec![1.0, 2.0, 3.0],
            uncorrelated: vec![4.0, 5.0, 6.0],
        }];
        let table = ResultTable::from_trials(&[1.0, 2.0, 3.0], &trials);
        let summary = Summary::from_table(&table);

        let noc: Vec<f64> = summary
            .regime(Regime::Uncorrelated)
            .map(|c| c.median)
            .collect();
        assert_eq!(noc, vec![4.0, 5.0, 6.0]);
        assert!(summary.get("cor9").is_none());
    }

    #[test]
    fn test_short_row_summarized_as_nan() {
        let json = r#"{"orders":[1.0],"columns":["cor1","noc1"],"rows":[[2.0,3.0],[2.0]]}"#;
        let table: ResultTable = serde_json::from_str(json).unwrap();
        let summary = Summary::from_table(&table);

        let cor1 = summary.get("cor1").unwrap();
        assert_eq!((cor1.lower, cor1.median, cor1.upper), (2.0, 2.0, 2.0));
        let noc1 = summary.get("noc1").unwrap();
        assert!(noc1.median.is_nan() && noc1.upper.is_nan());
    }

    #[test]
    #[should_panic(expected = "Cannot summarize an empty result table")]
    fn test_empty_table_panics() {
        Summary::from_table(&ResultTable::new(&[1.0]));
    }
}
