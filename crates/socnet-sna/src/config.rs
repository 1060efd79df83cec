use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::metrics::graph::AslMode;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsConfig {
    #[serde(default)]
    pub distance: DistanceConfig,
    #[serde(default)]
    pub betweenness: BetweennessConfig,
    #[serde(default)]
    pub asl: AslConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceConfig {
    /// Graphs with at least this many nodes run their BFS passes on rayon.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
    /// Size of a dedicated worker pool; `0` uses the global rayon pool.
    #[serde(default)]
    pub threads: usize,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: default_parallel_threshold(),
            threads: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetweennessConfig {
    #[serde(default = "default_true")]
    pub normalize: bool,
}

impl Default for BetweennessConfig {
    fn default() -> Self {
        Self {
            normalize: default_true(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AslConfig {
    #[serde(default)]
    pub mode: AslMode,
}

/// Load a metrics config file. A missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_metrics_config(path: &Path) -> Result<MetricsConfig> {
    if !path.exists() {
        return Ok(MetricsConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<MetricsConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load `<config dir>/socnet/metrics.toml`, falling back to the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_user_metrics_config() -> Result<MetricsConfig> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(MetricsConfig::default());
    };
    load_metrics_config(&config_dir.join("socnet/metrics.toml"))
}

const fn default_true() -> bool {
    true
}

const fn default_parallel_threshold() -> usize {
    64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("metrics.toml");
        std::fs::write(&path, body).expect("write config");
        path
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = load_metrics_config(&dir.path().join("absent.toml")).expect("load");
        assert_eq!(cfg.distance.parallel_threshold, 64);
        assert_eq!(cfg.distance.threads, 0);
        assert!(cfg.betweenness.normalize);
        assert_eq!(cfg.asl.mode, AslMode::NonInfinite);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_config(&dir, "[asl]\nmode = \"components\"\n");
        let cfg = load_metrics_config(&path).expect("load");
        assert_eq!(cfg.asl.mode, AslMode::Components);
        assert_eq!(cfg.distance.parallel_threshold, 64);
        assert!(cfg.betweenness.normalize);
    }

    #[test]
    fn full_file_round_trips_every_section() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_config(
            &dir,
            "[distance]\nparallel_threshold = 8\nthreads = 2\n\n\
             [betweenness]\nnormalize = false\n\n\
             [asl]\nmode = \"non_infinite\"\n",
        );
        let cfg = load_metrics_config(&path).expect("load");
        assert_eq!(
            cfg.distance,
            DistanceConfig {
                parallel_threshold: 8,
                threads: 2
            }
        );
        assert!(!cfg.betweenness.normalize);
        assert_eq!(cfg.asl.mode, AslMode::NonInfinite);
    }

    #[test]
    fn invalid_mode_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_config(&dir, "[asl]\nmode = \"harmonic\"\n");
        let err = load_metrics_config(&path).expect_err("should fail");
        assert!(err.to_string().contains("Failed to parse"));
        assert!(err.to_string().contains("metrics.toml"));
    }
}
