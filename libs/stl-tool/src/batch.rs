//! # Batch Generation
//!
//! A JSON-configurable list of shapes written into one output directory.
//! Jobs share no state, so they run on the rayon pool unless the batch
//! asks to run sequentially.
//!
//! ```json
//! {
//!   "output_dir": "./stl",
//!   "format": "binary",
//!   "jobs": [
//!     { "file": "cylinder.stl", "shape": "cylinder", "radius": 0.053, "height": 0.02, "segments": 20 },
//!     { "file": "cone_example.stl", "shape": "cone", "segments": 12 }
//!   ]
//! }
//! ```
//!
//! Omitted shape parameters take the generator defaults. An omitted `jobs`
//! list takes the built-in demo set. Keys a shape does not know are
//! rejected rather than ignored.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use config::constants::DEFAULT_OUTPUT_DIR;
use primitive_mesh::primitives::{ConeParams, CylinderParams, FrustumParams, SphereParams};
use primitive_mesh::Shape;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use stl_writer::{StlFormat, StlWriter};
use tracing::info;

use crate::error::{ToolError, ToolResult};
use crate::generate::create_stl;

/// One output file and the shape to put in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// File name, relative to the batch output directory
    pub file: PathBuf,
    #[serde(flatten)]
    pub shape: Shape,
}

impl Job {
    pub fn new(file: impl Into<PathBuf>, shape: impl Into<Shape>) -> Self {
        Self {
            file: file.into(),
            shape: shape.into(),
        }
    }
}

/// Batch settings loaded from JSON or built from defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Directory every job file is written into; created if missing
    pub output_dir: PathBuf,
    /// STL flavour for every file
    pub format: StlFormat,
    /// Run jobs on the rayon pool
    pub parallel: bool,
    pub jobs: Vec<Job>,
}

impl Default for BatchConfig {
    /// The demo set: one cylinder, three spheres of increasing quality,
    /// one cone, and one frustum.
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: StlFormat::Binary,
            parallel: true,
            jobs: vec![
                Job::new(
                    "cylinder.stl",
                    CylinderParams {
                        radius: 0.053,
                        height: 0.02,
                        segments: 20,
                    },
                ),
                Job::new("sphere_example.stl", sphere(0.5, 12)),
                Job::new("sphere_lq_example.stl", sphere(1.0, 8)),
                Job::new("sphere_hq_example.stl", sphere(1.0, 24)),
                Job::new(
                    "cone_example.stl",
                    ConeParams {
                        radius: 0.5,
                        height: 1.0,
                        segments: 12,
                    },
                ),
                Job::new(
                    "frustum_example.stl",
                    FrustumParams {
                        bottom_radius: 0.5,
                        top_radius: 0.2,
                        height: 1.0,
                        segments: 12,
                    },
                ),
            ],
        }
    }
}

fn sphere(radius: f64, segments: u32) -> SphereParams {
    SphereParams {
        radius,
        vertical_segments: segments,
        horizontal_segments: segments,
    }
}

impl BatchConfig {
    /// Parses and validates a batch from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Json`] for malformed input, and
    /// [`ToolError::Config`] for a job with a key its shape does not take or
    /// a batch that fails [`BatchConfig::validate`].
    pub fn from_json(text: &str) -> ToolResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        if let Some(jobs) = value.get("jobs").and_then(Value::as_array) {
            for (index, job) in jobs.iter().enumerate() {
                check_job_keys(index, job)?;
            }
        }

        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a batch from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::ReadConfig`] if the file cannot be read, then
    /// as [`BatchConfig::from_json`].
    pub fn load(path: &Path) -> ToolResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ToolError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks that the batch has jobs and that every job names a distinct,
    /// non-empty relative file.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Config`] describing the first problem.
    pub fn validate(&self) -> ToolResult<()> {
        if self.jobs.is_empty() {
            return Err(ToolError::config("batch has no jobs"));
        }

        let mut seen = HashSet::new();
        for (index, job) in self.jobs.iter().enumerate() {
            if job.file.as_os_str().is_empty() {
                return Err(ToolError::config(format!("job {index} has an empty file name")));
            }
            if job.file.is_absolute() {
                return Err(ToolError::config(format!(
                    "job {index} file {} must be relative to output_dir",
                    job.file.display()
                )));
            }
            if job.file.components().any(|c| c == Component::ParentDir) {
                return Err(ToolError::config(format!(
                    "job {index} file {} leaves output_dir",
                    job.file.display()
                )));
            }
            if !seen.insert(&job.file) {
                return Err(ToolError::config(format!(
                    "job {index} writes {} more than once",
                    job.file.display()
                )));
            }
        }
        Ok(())
    }
}

/// Rejects job keys that are neither `file`, `shape`, nor a parameter of
/// the tagged shape.
///
/// Shape parameters are flattened into the job and default when omitted,
/// so a misspelled key would otherwise build default geometry. Jobs
/// without a recognizable tag are left for deserialization to report.
fn check_job_keys(index: usize, job: &Value) -> ToolResult<()> {
    let Some(fields) = job.as_object() else {
        return Ok(());
    };
    let Some(tag) = fields.get("shape").and_then(Value::as_str) else {
        return Ok(());
    };
    let Ok(shape) = serde_json::from_value::<Shape>(json!({ "shape": tag })) else {
        return Ok(());
    };

    let known = serde_json::to_value(Job::new(PathBuf::new(), shape))?;
    for key in fields.keys() {
        if known.get(key).is_none() {
            return Err(ToolError::config(format!("job {index} has unknown {tag} field `{key}`")));
        }
    }
    Ok(())
}

/// Outcome of one batch job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    pub path: PathBuf,
    pub shape: &'static str,
    pub vertices: usize,
    pub faces: usize,
}

/// Runs every job in the batch and reports on each, in job order.
///
/// # Errors
///
/// Fails if the batch is invalid, the output directory cannot be created,
/// or any job fails. Jobs that already finished keep their files.
pub fn run_batch(config: &BatchConfig) -> ToolResult<Vec<JobReport>> {
    config.validate()?;
    fs::create_dir_all(&config.output_dir).map_err(|source| ToolError::CreateDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let writer = StlWriter::new(config.format);
    let run_job = |job: &Job| -> ToolResult<JobReport> {
        let path = config.output_dir.join(&job.file);
        let mesh = create_stl(&path, &job.shape, &writer)?;
        Ok(JobReport {
            path,
            shape: job.shape.name(),
            vertices: mesh.vertex_count(),
            faces: mesh.triangle_count(),
        })
    };

    let reports = if config.parallel {
        config.jobs.par_iter().map(run_job).collect::<ToolResult<Vec<_>>>()?
    } else {
        config.jobs.iter().map(run_job).collect::<ToolResult<Vec<_>>>()?
    };

    info!(
        jobs = reports.len(),
        output_dir = %config.output_dir.display(),
        format = %config.format,
        "batch complete"
    );
    Ok(reports)
}
