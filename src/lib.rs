pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod jobs;
pub mod transform;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{AdmissionsConfig, CollegesConfig, UpdateFileConfig};

pub use adapters::LocalStorage;
pub use crate::core::{EtlEngine, JobConfig, Record, RowJob, RunSummary, Storage};
pub use jobs::{AdmissionsJob, CollegeFilterJob, UpdateFileJob};
pub use utils::error::{EtlError, Result};
