//! `leadgrid-classify` — XRF shot ingestion and lead-paint classification.
//!
//! Pure engine crate: receives raw table rows or pre-built shots, returns
//! classified results. No CLI or IO dependencies.

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod model;
pub mod report;
pub mod summary;

pub use config::ClassificationPolicy;
pub use engine::run;
pub use error::ClassifyError;
pub use ingest::ingest_rows;
pub use model::{Bucket, ComponentSummary, LeadContent, ProcessingResult, Shot};
pub use report::{process_job, report_title, JobReport};
pub use summary::RunSummary;
