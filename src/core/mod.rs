pub mod engine;

pub use crate::domain::model::{Record, RunSummary};
pub use crate::domain::ports::{JobConfig, RowJob, Storage};
pub use crate::utils::error::Result;
pub use engine::EtlEngine;
