pub mod export;
pub mod fake_jobs;
pub mod pipeline;
pub mod settings;
pub mod types;

pub use pipeline::{run, EmptyReason, Outcome};
pub use types::{Error, JobRecord, Result};
