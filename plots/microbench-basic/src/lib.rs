use std::path::Path;

use common::{
    config::{Config, Label},
    error::{Error, Result},
};
use microbench::result::ResultSet;
use serde::Serialize;
use tracing::{debug, info};

/// One group of bars: a store's means across the panel's workloads
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub store: String,
    pub label: String,
    pub means: Vec<f64>,
    pub err_lower: Vec<f64>,
    pub err_upper: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct Panel<'a> {
    pub name: &'a str,
    pub stores: &'a [Label],
    pub workloads: &'a [Label],
}

#[derive(Debug, Serialize)]
struct FigureRow<'a> {
    panel: &'a str,
    store: &'a str,
    store_label: &'a str,
    workload: &'a str,
    workload_label: &'a str,
    mean: f64,
    err_lower: f64,
    err_upper: f64,
}

/// The item operation and list operation panels of the latency figure
pub fn default_panels(config: &Config) -> [Panel<'_>; 2] {
    [
        Panel {
            name: "item",
            stores: &config.item_stores,
            workloads: &config.item_workloads,
        },
        Panel {
            name: "list",
            stores: &config.list_stores,
            workloads: &config.list_workloads,
        },
    ]
}

/// Bar series for each store in order, every store must have every workload
pub fn panel_series(
    results: &ResultSet,
    stores: &[Label],
    workloads: &[Label],
) -> Result<Vec<Series>> {
    stores
        .iter()
        .map(|store| {
            let mut series = Series {
                store: store.name.clone(),
                label: store.label.clone(),
                means: Vec::with_capacity(workloads.len()),
                err_lower: Vec::with_capacity(workloads.len()),
                err_upper: Vec::with_capacity(workloads.len()),
            };
            for workload in workloads {
                let summary = results.get(&store.name, &workload.name).ok_or_else(|| {
                    Error::MissingEntry {
                        store: store.name.clone(),
                        workload: workload.name.clone(),
                    }
                })?;
                series.means.push(summary.mean);
                series.err_lower.push(summary.confidence_interval[0]);
                series.err_upper.push(summary.confidence_interval[1]);
            }
            Ok(series)
        })
        .collect()
}

/// Writes every panel's series, nothing is written unless all panels resolve
pub fn write_figure_csv(results: &ResultSet, panels: &[Panel<'_>], path: &Path) -> Result<()> {
    let all_series = panels
        .iter()
        .map(|panel| panel_series(results, panel.stores, panel.workloads))
        .collect::<Result<Vec<_>>>()?;

    let mut writer = csv::Writer::from_path(path)?;
    for (panel, series) in panels.iter().zip(&all_series) {
        debug!("{} panel: {} series", panel.name, series.len());
        for (store, series) in panel.stores.iter().zip(series) {
            for (idx, workload) in panel.workloads.iter().enumerate() {
                writer.serialize(FigureRow {
                    panel: panel.name,
                    store: &store.name,
                    store_label: &store.label,
                    workload: &workload.name,
                    workload_label: &workload.label,
                    mean: series.means[idx],
                    err_lower: series.err_lower[idx],
                    err_upper: series.err_upper[idx],
                })?;
            }
        }
    }
    writer.flush().map_err(|e| Error::write(path, e))?;
    info!("Figure data saved as {path:?}");
    Ok(())
}
