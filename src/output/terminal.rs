//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::config::Config;
use crate::statistics::{ColumnSummary, Summary};
use crate::types::Regime;

/// Format a summary for human-readable terminal output.
///
/// One line per diversity order with the median and 95% band of both regimes
/// and the difference of medians (correlated minus uncorrelated).
pub fn format_summary(summary: &Summary) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(78);

    output.push_str("joint-hill\n");
    output.push_str(&sep);
    output.push('\n');
    output.push_str(&format!("  Trials: {}\n\n", summary.trials));

    output.push_str(&format!(
        "  {:>6}  {:<30}  {:<30}  {}\n",
        "q".bold(),
        "Correlated".cyan().bold(),
        "Uncorrelated".magenta().bold(),
        "\u{0394} median".bold()
    ));

    let correlated: Vec<&ColumnSummary> = summary.regime(Regime::Correlated).collect();
    let uncorrelated: Vec<&ColumnSummary> = summary.regime(Regime::Uncorrelated).collect();

    for (cor, noc) in correlated.iter().zip(uncorrelated.iter()) {
        let delta = cor.median - noc.median;
        output.push_str(&format!(
            "  {:>6}  {:<30}  {:<30}  {}\n",
            cor.order,
            format_band(cor),
            format_band(noc),
            format_delta(delta)
        ));
    }

    output.push('\n');
    output.push_str(&sep);
    output.push('\n');
    output.push_str("Note: bands are the 2.5%\u{2013}97.5% range across trials.\n");

    output
}

/// Format the run configuration as a single header line.
pub fn format_config(config: &Config, seed: Option<u64>) -> String {
    let seed_str = seed
        .or(config.seed)
        .map(|s| format!("0x{s:08x}"))
        .unwrap_or_else(|| "none".to_string());
    format!(
        "joint-hill: species={} trials={} workers={} abundance={} covariance={:.2} seed={}",
        config.species,
        config.trials,
        config.workers,
        config.abundance.name(),
        config.covariance,
        seed_str
    )
}

fn format_band(band: &ColumnSummary) -> String {
    if !band.median.is_finite() {
        return format!("{:<30}", "NaN".red());
    }
    format!(
        "{:>8.3} [{:.3}, {:.3}]",
        band.median, band.lower, band.upper
    )
}

fn format_delta(delta: f64) -> String {
    if !delta.is_finite() {
        return "NaN".red().to_string();
    }
    let text = format!("{:+.3}", delta);
    if delta < 0.0 {
        text.yellow().to_string()
    } else {
        text.green().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ResultTable;
    use crate::trial::TrialResult;

    fn make_summary(nan: bool) -> Summary {
        let first = if nan { f64::NAN } else { 4.0 };
        let trials = vec![
            TrialResult {
                correlated: vec![first, 3.0],
                uncorrelated: vec![5.0, 4.5],
            },
            TrialResult {
                correlated: vec![first, 3.0],
                uncorrelated: vec![5.0, 4.5],
            },
        ];
        Summary::from_table(&ResultTable::from_trials(&[1.0, 2.0], &trials))
    }

    #[test]
    fn test_format_summary() {
        colored::control::set_override(false);
        let output = format_summary(&make_summary(false));
        assert!(output.contains("joint-hill"));
        assert!(output.contains("Trials: 2"));
        assert!(output.contains("4.000 [4.000, 4.000]"));
        assert!(output.contains("-1.000"));
        assert!(output.contains("-1.500"));
    }

    #[test]
    fn test_format_summary_with_nan() {
        colored::control::set_override(false);
        let output = format_summary(&make_summary(true));
        assert!(output.contains("NaN"));
    }

    #[test]
    fn test_format_config() {
        let config = Config::default();
        let line = format_config(&config, Some(255));
        assert!(line.contains("species=1000"));
        assert!(line.contains("abundance=logseries"));
        assert!(line.contains("seed=0x000000ff"));
        assert!(format_config(&config, None).contains("seed=none"));
    }
}
