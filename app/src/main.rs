use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use common::{DEFAULT_RESULTS_FILE, config::Config};
use eyre::{Context, ContextCompat, Result};
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter,
    fmt::{layer, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const MODULES: &[&str] = &["common", "microbench", "ycsb", "microbench_basic"];

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long)]
    log: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate microbenchmark latencies and export figure data
    Aggregate {
        /// Directory containing microbenchmark output data
        result_dir: PathBuf,
        #[arg(short, long)]
        config_file: Option<PathBuf>,
        /// Results cache
        #[arg(short, long, default_value = DEFAULT_RESULTS_FILE)]
        json: PathBuf,
        /// Read results from the cache instead of computing and storing them
        #[arg(short, long, default_value_t = false)]
        read: bool,
        /// Figure data output
        #[arg(short, long, default_value = "figure.csv")]
        output: PathBuf,
    },
    /// Tabulate YCSB throughput across stores and runs
    Ycsb {
        /// Directory containing `<store>/<workload>/Run<id>` files
        result_dir: PathBuf,
        output_csv: PathBuf,
        #[arg(short, long, num_args = 1.., required = true)]
        stores: Vec<String>,
        #[arg(short = 'n', long)]
        runs: u32,
        #[arg(long, default_value_t = 1)]
        start_run: u32,
        #[arg(short, long)]
        config_file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());
    let args = Cli::parse();
    let file_appender = tracing_appender::rolling::never(".", "log.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let mut env_filter = EnvFilter::new(format!("kvbench_report={log_level}"));

    for log in &args.log {
        env_filter = env_filter.add_directive(log.parse()?);
    }

    for module in MODULES {
        if !args.log.iter().any(|x| x.starts_with(module)) {
            env_filter = env_filter.add_directive(format!("{module}={log_level}").parse()?);
        }
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            layer()
                .with_timer(ChronoLocal::new("%v %k:%M:%S %z".to_owned()))
                .compact(),
        )
        .with(layer().with_writer(non_blocking))
        .init();

    let res = match args.command {
        Commands::Aggregate {
            result_dir,
            config_file,
            json,
            read,
            output,
        } => aggregate(&result_dir, config_file.as_deref(), &json, read, &output),
        Commands::Ycsb {
            result_dir,
            output_csv,
            stores,
            runs,
            start_run,
            config_file,
        } => run_range(start_run, runs).and_then(|runs| {
            tabulate_ycsb(
                &result_dir,
                &output_csv,
                &stores,
                runs,
                config_file.as_deref(),
            )
        }),
    };
    if let Err(err) = &res {
        error!("{err:#?}");
    }
    res
}

fn run_range(start_run: u32, runs: u32) -> Result<std::ops::Range<u32>> {
    let end = start_run
        .checked_add(runs)
        .with_context(|| format!("Run ids {start_run} + {runs} exceed {}", u32::MAX))?;
    Ok(start_run..end)
}

fn load_config(config_file: Option<&Path>) -> Result<Config> {
    match config_file {
        Some(path) => Config::load(path).wrap_err_with(|| format!("Loading config {path:?}")),
        None => Ok(Config::default()),
    }
}

fn aggregate(
    result_dir: &Path,
    config_file: Option<&Path>,
    json: &Path,
    read: bool,
    output: &Path,
) -> Result<()> {
    let config = load_config(config_file)?;
    let results = if read {
        microbench::load_results(json).context("Reading cached results")?
    } else {
        let results = microbench::build_result_set(result_dir, &config)
            .context("Aggregating microbenchmark results")?;
        microbench::save_results(&results, json).context("Storing results")?;
        results
    };
    info!("Results for {} stores", results.0.len());

    microbench_basic::write_figure_csv(
        &results,
        &microbench_basic::default_panels(&config),
        output,
    )
    .context("Exporting figure data")?;
    println!("Figure data saved as {output:?}");
    Ok(())
}

fn tabulate_ycsb(
    result_dir: &Path,
    output_csv: &Path,
    stores: &[String],
    runs: std::ops::Range<u32>,
    config_file: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_file)?;
    let table = ycsb::tabulate(result_dir, stores, runs, &config.ycsb_workloads)
        .context("Parsing YCSB output")?;
    ycsb::write_table_csv(&table, output_csv).context("Writing throughput table")?;
    Ok(())
}
