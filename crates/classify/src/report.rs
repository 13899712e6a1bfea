//! Titled report sections for a classified job.
//!
//! Titles are consumed verbatim by downstream renderers; keep them stable.

use serde::Serialize;

use crate::config::ClassificationPolicy;
use crate::engine::run;
use crate::model::{Bucket, ComponentSummary, ProcessingResult, Shot};
use crate::summary::{compute_summary, RunSummary};

/// Report title for a bucket, e.g. "AVERAGED DWELLING UNITS COMPONENT RESULTS".
pub fn report_title(bucket: Bucket, file_type: &str) -> String {
    let file_type = file_type.trim().to_uppercase();
    match bucket {
        Bucket::Averaged => format!("AVERAGED DWELLING {file_type} COMPONENT RESULTS"),
        Bucket::Uniform => {
            format!("INDIVIDUALLY TESTED {file_type} COMPONENTS (UNIFORM RESULTS)")
        }
        Bucket::Conflicting => {
            format!("INDIVIDUALLY TESTED {file_type} COMPONENTS (CONFLICTING RESULTS)")
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSection<T> {
    pub bucket: Bucket,
    pub title: String,
    pub rows: Vec<T>,
}

impl<T> ReportSection<T> {
    fn new(bucket: Bucket, file_type: &str, rows: Vec<T>) -> Self {
        Self {
            bucket,
            title: report_title(bucket, file_type),
            rows,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub file_type: String,
    pub engine_version: String,
    pub run_at: String,
    pub policy: ClassificationPolicy,
}

/// Everything a renderer needs for one job.
#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    pub meta: ReportMeta,
    pub summary: RunSummary,
    pub averaged: ReportSection<ComponentSummary>,
    pub uniform: ReportSection<ComponentSummary>,
    pub conflicting: ReportSection<Shot>,
}

impl JobReport {
    pub fn new(
        file_type: &str,
        result: ProcessingResult,
        summary: RunSummary,
        policy: &ClassificationPolicy,
    ) -> Self {
        Self {
            meta: ReportMeta {
                file_type: file_type.trim().to_string(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                run_at: chrono::Utc::now().to_rfc3339(),
                policy: policy.clone(),
            },
            summary,
            averaged: ReportSection::new(Bucket::Averaged, file_type, result.averaged),
            uniform: ReportSection::new(Bucket::Uniform, file_type, result.uniform),
            conflicting: ReportSection::new(Bucket::Conflicting, file_type, result.conflicting),
        }
    }
}

/// Classify the pooled shots of a job and wrap them in titled sections.
pub fn process_job(file_type: &str, shots: &[Shot], policy: &ClassificationPolicy) -> JobReport {
    let result = run(shots, policy);
    let summary = compute_summary(shots, &result, policy);
    JobReport::new(file_type, result, summary, policy)
}
