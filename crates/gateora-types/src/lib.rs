//! Stable DTOs and IDs used across the gateora workspace.
//!
//! This crate is intentionally boring:
//! - data types for the evaluation result and emitted report
//! - stable signal IDs, reason titles, and top-signal labels
//! - explain registry for signal guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use receipt::{
    EvaluationResult, GateoraData, GateoraReport, PolicyData, Reason, ReportEnvelope, ToolMeta,
    Verdict, SCHEMA_REPORT_V1,
};
