//! Train a ridge classifier on MNIST and report train/test error.
//!
//! Usage:
//!   cargo run --release --bin ridge_mnist -- --data-dir data/mnist [options]
//!
//! The data directory must contain the four uncompressed IDX files
//! (`train-images-idx3-ubyte`, `train-labels-idx1-ubyte`,
//! `t10k-images-idx3-ubyte`, `t10k-labels-idx1-ubyte`).
//!
//! Logging goes to stderr. `RUST_LOG` overrides the level chosen by `-v`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::error;
use tracing_subscriber::EnvFilter;

use ridgers::{
    ErrorRate, EvaluationReport, RidgeClassifier, RidgeConfig, Verbosity, load_dataset,
};

#[derive(Debug, Parser)]
#[command(
    name = "ridge_mnist",
    about = "Closed-form ridge regression classifier on MNIST",
    version
)]
struct Args {
    /// Directory holding the dataset files
    #[arg(long, env = "RIDGERS_DATA_DIR", default_value = "data/mnist", value_name = "DIR")]
    data_dir: PathBuf,

    /// Dataset name
    #[arg(long, default_value = "mnist")]
    dataset: String,

    /// L2 regularization strength
    #[arg(long, default_value_t = 1e-4)]
    lambda: f64,

    /// Number of classes labels are encoded over
    #[arg(long, default_value_t = 10)]
    n_classes: usize,

    /// Worker threads: 0 = auto, 1 = sequential
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Print the report as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let verbosity = Verbosity::from_count(args.verbose);
    init_logging(verbosity);

    let report = match run(&args, verbosity) {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "run failed");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{report}");
    }
    ExitCode::SUCCESS
}

fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.as_filter_directive()));
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: &Args, verbosity: Verbosity) -> ridgers::Result<EvaluationReport> {
    let dataset = load_dataset(&args.dataset, &args.data_dir)?;

    let config = RidgeConfig::builder()
        .lambda(args.lambda)
        .n_classes(args.n_classes)
        .n_threads(args.threads)
        .verbosity(verbosity)
        .build();

    let model = RidgeClassifier::train(dataset.train.features(), dataset.train.labels(), config)?;

    let train_error = model.evaluate(dataset.train.features(), dataset.train.labels(), &ErrorRate)?;
    let test_error = model.evaluate(dataset.test.features(), dataset.test.labels(), &ErrorRate)?;

    Ok(EvaluationReport::from_rates(
        &args.dataset,
        args.lambda,
        dataset.train.n_samples(),
        dataset.test.n_samples(),
        train_error,
        test_error,
    ))
}
