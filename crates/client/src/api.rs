//! The assessment API seam and its wire types.

use crate::ClientResult;
use serde::{Deserialize, Deserializer};
use std::future::Future;
use triage_core::{AlertLists, PatientRecord};

/// Remote operations the pipeline depends on.
///
/// [`crate::AssessmentClient`] talks HTTP; tests substitute an in-memory implementation.
pub trait AssessmentApi {
    /// Fetches one page of patients. Pages are numbered from 1.
    fn fetch_page(&self, page: u32) -> impl Future<Output = ClientResult<PatientPage>> + Send;

    /// Submits the alert lists and returns the service's JSON reply.
    fn submit(
        &self,
        lists: &AlertLists,
    ) -> impl Future<Output = ClientResult<serde_json::Value>> + Send;
}

/// One page of `GET /patients`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientPage {
    /// A missing or null `data` is an empty page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<PatientRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

/// Paging metadata. Only `hasNext` drives the fetch loop; other keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    /// A missing or null `hasNext` ends pagination.
    #[serde(rename = "hasNext", default, deserialize_with = "null_as_default")]
    pub has_next: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page() {
        let input = r#"{
            "data": [
                {"patient_id": "DEMO001", "age": 45, "blood_pressure": "120/80", "temperature": 98.6},
                {"patient_id": "DEMO002", "age": null, "blood_pressure": "INVALID", "temperature": "TEMP_ERROR"}
            ],
            "pagination": {"page": 1, "limit": 2, "total": 50, "totalPages": 25, "hasNext": true, "hasPrevious": false},
            "metadata": {"timestamp": "2025-07-15T23:01:05.059Z", "version": "v1.0"}
        }"#;

        let page: PatientPage = serde_json::from_str(input).expect("should parse page");
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[1].patient_id, "DEMO002");
        assert!(page.pagination.has_next);
    }

    #[test]
    fn missing_pieces_end_pagination() {
        let page: PatientPage = serde_json::from_str("{}").expect("should parse empty object");
        assert!(page.data.is_empty());
        assert!(!page.pagination.has_next);

        let page: PatientPage =
            serde_json::from_str(r#"{"data": null, "pagination": {"hasNext": null}}"#)
                .expect("should parse nulls");
        assert!(page.data.is_empty());
        assert!(!page.pagination.has_next);
    }

    #[test]
    fn non_object_patient_is_a_decode_error() {
        let err = serde_json::from_str::<PatientPage>(r#"{"data": ["DEMO001"]}"#);
        assert!(err.is_err());
    }
}
