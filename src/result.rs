//! Result table collected from an experiment.

use serde::{Deserialize, Serialize};

use crate::error::{HillError, Result};
use crate::trial::TrialResult;
use crate::types::Regime;

/// One row per trial, columns named `{cor,noc}{q}`.
///
/// Columns list every correlated order first, then every uncorrelated order,
/// matching [`TrialResult::values`]. Non-finite cells are kept as-is. A row
/// shorter than the column list (e.g. from hand-edited JSON) reads as NaN in
/// the missing columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    /// Diversity orders, in column order within each regime.
    pub orders: Vec<f64>,
    /// Column names.
    pub columns: Vec<String>,
    /// Row-major cell values.
    pub rows: Vec<Vec<f64>>,
}

impl ResultTable {
    /// Empty table for the given orders.
    pub fn new(orders: &[f64]) -> Self {
        let columns = Regime::ALL
            .iter()
            .flat_map(|regime| orders.iter().map(move |&q| regime.column(q)))
            .collect();
        Self {
            orders: orders.to_vec(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Table holding one row per trial.
    ///
    /// # Panics
    ///
    /// Panics if any trial was evaluated for a different number of orders.
    pub fn from_trials(orders: &[f64], trials: &[TrialResult]) -> Self {
        let mut table = Self::new(orders);
        table.rows.reserve(trials.len());
        for trial in trials {
            table.push(trial);
        }
        table
    }

    /// Append one trial.
    ///
    /// # Panics
    ///
    /// Panics if the trial was evaluated for a different number of orders.
    pub fn push(&mut self, trial: &TrialResult) {
        let values = trial.values();
        assert_eq!(
            values.len(),
            self.columns.len(),
            "Trial width does not match table columns"
        );
        self.rows.push(values);
    }

    /// Number of rows (trials).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if no trials were recorded.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a named column.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| HillError::UnknownColumn(name.to_string()))
    }

    /// All values of a named column, in row order.
    ///
    /// # Errors
    ///
    /// Returns [`HillError::UnknownColumn`] if no column has that name.
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        let idx = self.column_index(name)?;
        Ok(self.column_at(idx))
    }

    /// Values of the column at `idx`, NaN where a row is too short.
    pub(crate) fn column_at(&self, idx: usize) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| row.get(idx).copied().unwrap_or(f64::NAN))
            .collect()
    }

    /// Values for one regime and order.
    pub fn series(&self, regime: Regime, q: f64) -> Result<Vec<f64>> {
        self.column(&regime.column(q))
    }

    /// Count of NaN or infinite cells.
    pub fn non_finite_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|v| !v.is_finite())
            .count()
    }
}
