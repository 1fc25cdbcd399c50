//! End-to-end assessment run: fetch, classify, optionally submit.

use crate::api::AssessmentApi;
use crate::fetch::{fetch_all_patients, submit_alert_lists};
use crate::retry::RetryPolicy;
use crate::ClientResult;
use triage_core::{classify_batch, AlertLists};

/// Outcome of one assessment run.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentRun {
    pub patients: usize,
    pub lists: AlertLists,
    /// The service's reply, when the lists were submitted.
    pub reply: Option<serde_json::Value>,
}

/// Fetches all patients, classifies them, and submits the lists if `submit` is set.
///
/// # Errors
///
/// Returns the first fetch or submission error; classification itself cannot fail.
pub async fn run_assessment<A: AssessmentApi>(
    api: &A,
    retry: &RetryPolicy,
    submit: bool,
) -> ClientResult<AssessmentRun> {
    let patients = fetch_all_patients(api, retry).await?;
    let lists = classify_batch(&patients);

    let reply = if submit {
        Some(submit_alert_lists(api, &lists).await?)
    } else {
        tracing::info!("dry run, alert lists not submitted");
        None
    };

    Ok(AssessmentRun {
        patients: patients.len(),
        lists,
        reply,
    })
}
