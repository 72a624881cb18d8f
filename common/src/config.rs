use std::{fs::read_to_string, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Enumerations of the stores and workloads the result tree is expected to contain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub item_workloads: Vec<Label>,
    pub list_workloads: Vec<Label>,
    pub item_stores: Vec<Label>,
    pub list_stores: Vec<Label>,
    pub ycsb_workloads: Vec<YcsbWorkload>,
    pub confidence_level: f64,
}

/// A directory name on disk and the name it is displayed as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YcsbWorkload {
    pub name: String,
    pub dir: String,
}

impl Label {
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_owned(),
            label: label.to_owned(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            item_workloads: vec![
                Label::new("sequential_put", "Seq put"),
                Label::new("sequential_get", "Seq get"),
                Label::new("sequential_update", "Seq update"),
                Label::new("sequential_delete", "Seq delete"),
                Label::new("rand_put", "Rand put"),
                Label::new("rand_get", "Rand get"),
                Label::new("rand_update", "Rand update"),
                Label::new("rand_delete", "Rand delete"),
            ],
            list_workloads: vec![
                Label::new("rand_list_append", "Append"),
                Label::new("rand_list_len", "Len"),
                Label::new("rand_list_read", "Read list"),
                Label::new("rand_list_trim", "Trim"),
            ],
            item_stores: vec![
                Label::new("redis", "pmem-Redis"),
                Label::new("pmemrocksdb", "pmem-RocksDB"),
                Label::new("viper", "Viper"),
                Label::new("capybarakv", "CapybaraKV"),
            ],
            list_stores: vec![
                Label::new("redis", "pmem-Redis"),
                Label::new("capybarakv", "CapybaraKV"),
            ],
            ycsb_workloads: [
                "Loada", "Runa", "Runb", "Runc", "Rund", "Loade", "Runf", "Loadx", "Runx",
            ]
            .into_iter()
            .map(|name| YcsbWorkload {
                name: name.to_owned(),
                dir: name.to_owned(),
            })
            .collect(),
            confidence_level: 0.95,
        }
    }
}

impl Config {
    /// Reads a yaml config, fields left out keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let data = read_to_string(path).map_err(|e| Error::read(path, e))?;
        Ok(serde_yml::from_str(&data)?)
    }

    /// Item workloads followed by list workloads, the order directories are looked up in
    pub fn workload_names(&self) -> Vec<&str> {
        self.item_workloads
            .iter()
            .chain(self.list_workloads.iter())
            .map(|w| w.name.as_str())
            .collect()
    }
}
