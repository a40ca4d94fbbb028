//! Sweep settings with defaults and optional JSON overrides

use crate::io::configuration::{
    AXIS_COMPUTE_FP, AXIS_DEVICE_IDS, AXIS_LATTICE, AXIS_STORAGE_FP, AXIS_STREAMING_METHOD,
    BENCHMARKED_LATTICES, DEFAULT_MAX_ITER, DEFAULT_REPETITIONS, DEFAULT_REPORT_FILENAME,
    DEFAULT_WARMUP_ITER, MULTI_DEVICE_STREAMING, SINGLE_DEVICE_TYPES,
};
use crate::io::error::{Result, SweepError};
use crate::sweep::predicate::ExclusionRule;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Every value the sweep is built from
///
/// Constructed once at startup and never mutated afterwards. Any field may be
/// omitted from a settings file, in which case its default applies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepSettings {
    /// Device types
    pub device_types: Vec<String>,
    /// Device ids, grown one at a time for multi-device types
    pub device_ids: Vec<String>,
    /// Device types restricted to the first device id
    pub single_device_types: Vec<String>,
    /// Occupancy policies
    pub occ: Vec<String>,
    /// Domain edge lengths
    pub domain_sizes: Vec<String>,
    /// Storage precisions
    pub storage_fp: Vec<String>,
    /// Compute precisions
    pub compute_fp: Vec<String>,
    /// Grid layouts
    pub grids: Vec<String>,
    /// Space-filling curves
    pub space_curves: Vec<String>,
    /// Lattices
    pub lattices: Vec<String>,
    /// Halo transfer modes
    pub transfer_modes: Vec<String>,
    /// Stencil semantics
    pub stencil_semantics: Vec<String>,
    /// Collision operators
    pub collisions: Vec<String>,
    /// Streaming methods
    pub streaming_methods: Vec<String>,
    /// Iterations per run
    pub max_iter: u64,
    /// Warmup iterations per run
    pub warmup_iter: u64,
    /// Repetitions per run
    pub repetitions: u64,
    /// Report file prefix passed to the benchmark
    pub report_filename: String,
    /// Skip rules applied during enumeration
    pub exclusions: Vec<ExclusionRule>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            device_types: strings(&["cpu", "gpu"]),
            device_ids: strings(&["0", "1", "2", "3", "4", "5", "6", "7"]),
            single_device_types: strings(SINGLE_DEVICE_TYPES),
            occ: strings(&["nOCC", "sOCC"]),
            domain_sizes: strings(&["64", "128", "192", "256", "320", "384", "448", "512"]),
            storage_fp: strings(&["double", "float"]),
            compute_fp: strings(&["double", "float"]),
            grids: strings(&["dGrid", "bGrid", "eGrid"]),
            space_curves: strings(&["sweep", "morton", "hilbert"]),
            lattices: strings(&["d3q19", "d3q27"]),
            transfer_modes: strings(&["get", "put"]),
            stencil_semantics: strings(&["grid", "streaming"]),
            collisions: strings(&["bgk", "kbc"]),
            streaming_methods: strings(&["push", "pull", "aa"]),
            max_iter: DEFAULT_MAX_ITER,
            warmup_iter: DEFAULT_WARMUP_ITER,
            repetitions: DEFAULT_REPETITIONS,
            report_filename: DEFAULT_REPORT_FILENAME.to_string(),
            exclusions: default_exclusions(),
        }
    }
}

/// Skip rules of the standard benchmark campaign
pub fn default_exclusions() -> Vec<ExclusionRule> {
    vec![
        ExclusionRule::allow_only(AXIS_LATTICE, BENCHMARKED_LATTICES),
        ExclusionRule::multi_device_only(
            AXIS_DEVICE_IDS,
            AXIS_STREAMING_METHOD,
            MULTI_DEVICE_STREAMING,
        ),
        ExclusionRule::matching_values(AXIS_STORAGE_FP, AXIS_COMPUTE_FP),
    ]
}

impl SweepSettings {
    /// Load settings from a JSON file, defaulting omitted fields
    ///
    /// # Errors
    ///
    /// Returns a `Settings` error if the file cannot be read or does not
    /// describe valid settings
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| SweepError::Settings {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json(&text).map_err(|e| match e {
            SweepError::Settings { reason, .. } => SweepError::Settings {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    /// Parse settings from JSON text
    ///
    /// # Errors
    ///
    /// Returns a `Settings` error naming the parse failure
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| SweepError::Settings {
            path: "<inline>".into(),
            reason: e.to_string(),
        })
    }
}
