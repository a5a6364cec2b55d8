//! Command-line front end: run an experiment, print the summary, optionally
//! export JSON and an SVG plot.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use joint_hill::output::{json, terminal};
use joint_hill::{
    AbundanceModel, Config, Experiment, Summary, DEFAULT_COVARIANCE, DEFAULT_LOGNORMAL_SHAPE,
    DEFAULT_LOGSERIES_SHAPE, DEFAULT_SPECIES, DEFAULT_TRIALS, DEFAULT_UNIFORM_INDIVIDUALS,
    DEFAULT_WORKERS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Abundance {
    /// Fisher log-series
    Logseries,
    /// Lognormal shifted by one
    Lognormal,
    /// Even split of a fixed pool
    Uniform,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Joint Hill numbers: correlated vs uncorrelated traits")]
struct Args {
    /// Species per trial
    #[arg(long, default_value_t = DEFAULT_SPECIES)]
    species: usize,

    /// Number of independent trials
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Concurrent workers
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Abundance model
    #[arg(long, value_enum, default_value_t = Abundance::Logseries)]
    abundance: Abundance,

    /// Shape parameter of the abundance model (log-series rate or lognormal sigma)
    #[arg(long)]
    shape: Option<f64>,

    /// Pool size for the uniform abundance model
    #[arg(long, default_value_t = DEFAULT_UNIFORM_INDIVIDUALS)]
    individuals: f64,

    /// Attribute covariance in the correlated regime
    #[arg(long, default_value_t = DEFAULT_COVARIANCE, allow_negative_numbers = true)]
    covariance: f64,

    /// Diversity orders, comma separated
    #[arg(long, value_delimiter = ',', default_value = "1,2,3,4")]
    orders: Vec<f64>,

    /// Deterministic seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write the result table as JSON
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Write the summary as JSON
    #[arg(long, value_name = "PATH")]
    summary_json: Option<PathBuf>,

    /// Write an SVG ribbon plot of the summary
    #[arg(long, value_name = "PATH")]
    plot: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

impl Args {
    fn abundance_model(&self) -> AbundanceModel {
        match self.abundance {
            Abundance::Logseries => AbundanceModel::LogSeries {
                shape: self.shape.unwrap_or(DEFAULT_LOGSERIES_SHAPE),
            },
            Abundance::Lognormal => AbundanceModel::LogNormal {
                shape: self.shape.unwrap_or(DEFAULT_LOGNORMAL_SHAPE),
            },
            Abundance::Uniform => AbundanceModel::Uniform {
                individuals: self.individuals,
            },
        }
    }

    fn config(&self) -> Config {
        Config {
            species: self.species,
            trials: self.trials,
            workers: self.workers,
            abundance: self.abundance_model(),
            covariance: self.covariance,
            orders: self.orders.clone(),
            seed: Some(self.seed.unwrap_or_else(rand::random)),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.quiet { "joint_hill=warn" } else { "joint_hill=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> joint_hill::Result<()> {
    let config = args.config();
    eprintln!("{}", terminal::format_config(&config, None));

    let table = Experiment::from_config(config).run()?;
    let summary = Summary::from_table(&table);
    println!("{}", terminal::format_summary(&summary));

    if let Some(path) = &args.json {
        json::write_json(&table, path)?;
        info!(path = %path.display(), "wrote result table");
    }
    if let Some(path) = &args.summary_json {
        json::write_json(&summary, path)?;
        info!(path = %path.display(), "wrote summary");
    }
    if let Some(path) = &args.plot {
        write_plot(&summary, path)?;
    }

    Ok(())
}

#[cfg(feature = "plot")]
fn write_plot(summary: &Summary, path: &std::path::Path) -> joint_hill::Result<()> {
    joint_hill::output::plot::plot_summary(summary, path, (960, 640))?;
    info!(path = %path.display(), "wrote plot");
    Ok(())
}

#[cfg(not(feature = "plot"))]
fn write_plot(_summary: &Summary, path: &std::path::Path) -> joint_hill::Result<()> {
    tracing::warn!(path = %path.display(), "built without the `plot` feature; skipping plot");
    Ok(())
}
