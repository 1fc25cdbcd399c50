//! Test doubles shared by the client's unit tests.

use crate::api::{AssessmentApi, Pagination, PatientPage};
use crate::{ClientError, ClientResult};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;
use triage_core::{AlertLists, PatientRecord};

/// In-memory API that replays a fixed script of page responses.
#[derive(Default)]
pub(crate) struct ScriptedApi {
    pages: Mutex<VecDeque<ClientResult<PatientPage>>>,
    requested: Mutex<Vec<u32>>,
    submitted: Mutex<Vec<AlertLists>>,
}

impl ScriptedApi {
    pub(crate) fn with_pages(pages: Vec<ClientResult<PatientPage>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            ..Self::default()
        }
    }

    pub(crate) fn requested(&self) -> Vec<u32> {
        self.requested.lock().unwrap().clone()
    }

    pub(crate) fn submitted(&self) -> Vec<AlertLists> {
        self.submitted.lock().unwrap().clone()
    }
}

impl AssessmentApi for ScriptedApi {
    async fn fetch_page(&self, page: u32) -> ClientResult<PatientPage> {
        self.requested.lock().unwrap().push(page);
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Decode("script exhausted".into())))
    }

    async fn submit(&self, lists: &AlertLists) -> ClientResult<serde_json::Value> {
        self.submitted.lock().unwrap().push(lists.clone());
        Ok(json!({ "success": true }))
    }
}

/// A page of patients that all score 1 (age 40) with no issues.
pub(crate) fn page(ids: &[&str], has_next: bool) -> ClientResult<PatientPage> {
    let records = ids
        .iter()
        .map(|id| PatientRecord::new(*id, "120/80", 98.6, 40))
        .collect();
    page_of(records, has_next)
}

pub(crate) fn page_of(data: Vec<PatientRecord>, has_next: bool) -> ClientResult<PatientPage> {
    Ok(PatientPage {
        data,
        pagination: Pagination { has_next },
    })
}

pub(crate) fn unavailable() -> ClientResult<PatientPage> {
    Err(ClientError::Status {
        status: 503,
        body: "Service Unavailable".into(),
    })
}
