//! Pagination and reporting on top of an [`AssessmentApi`].

use crate::api::AssessmentApi;
use crate::retry::RetryPolicy;
use crate::ClientResult;
use triage_core::{AlertLists, PatientRecord};

/// Fetches every page of patients, in page order, starting at page 1.
///
/// Each page request is retried according to `retry`. Pagination stops at the first page
/// whose `hasNext` is false.
///
/// # Errors
///
/// Returns the last error of a page request that failed after all retries.
pub async fn fetch_all_patients<A: AssessmentApi>(
    api: &A,
    retry: &RetryPolicy,
) -> ClientResult<Vec<PatientRecord>> {
    tracing::info!("fetching patient data");

    let mut patients = Vec::new();
    let mut page = 1u32;
    loop {
        tracing::info!(page, "fetching page");
        let response = retry.run("fetch patients", move || api.fetch_page(page)).await?;
        patients.extend(response.data);

        if !response.pagination.has_next {
            break;
        }
        page += 1;
    }

    tracing::info!(patients = patients.len(), pages = page, "fetched all patients");
    Ok(patients)
}

/// Submits the alert lists once and returns the service's reply.
///
/// Submission is not retried.
pub async fn submit_alert_lists<A: AssessmentApi>(
    api: &A,
    lists: &AlertLists,
) -> ClientResult<serde_json::Value> {
    tracing::info!(
        high_risk = lists.high_risk_patients.len(),
        fever = lists.fever_patients.len(),
        data_quality = lists.data_quality_issues.len(),
        "submitting alert lists"
    );

    let reply = api.submit(lists).await?;
    tracing::info!(reply = %reply, "assessment submitted");
    Ok(reply)
}
