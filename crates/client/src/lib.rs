//! # Triage Client
//!
//! I/O collaborators around the scoring core:
//! - [`ClientConfig`]: connection settings resolved once at startup
//! - [`AssessmentApi`]: the page-fetch and submission seam
//! - [`AssessmentClient`]: the HTTP implementation of that seam
//! - [`fetch_all_patients`] and [`submit_alert_lists`]: pagination, retry and reporting
//! - [`run_assessment`]: the whole fetch, classify, submit sequence
//!
//! Nothing in this crate scores patients; see `triage-core`.

pub mod api;
pub mod config;
pub mod error;
pub mod fetch;
pub mod http;
pub mod pipeline;
pub mod retry;

#[cfg(test)]
mod testing;

pub use api::{AssessmentApi, Pagination, PatientPage};
pub use config::{ClientConfig, RawConfig};
pub use error::{ClientError, ClientResult};
pub use fetch::{fetch_all_patients, submit_alert_lists};
pub use http::AssessmentClient;
pub use pipeline::{run_assessment, AssessmentRun};
pub use retry::RetryPolicy;
