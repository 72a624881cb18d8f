pub mod config;
pub mod error;
pub mod util;

/// File the aggregated microbenchmark results are cached in when no path is given
pub const DEFAULT_RESULTS_FILE: &str = "results.json";
