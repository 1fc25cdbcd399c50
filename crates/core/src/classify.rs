//! Batch classification into alert lists.

use crate::profile::{calculate_risk_profile, RiskProfile};
use crate::record::PatientRecord;
use serde::{Deserialize, Serialize};

/// The three alert lists reported downstream.
///
/// Serializes to an object with exactly the keys `high_risk_patients`, `fever_patients` and
/// `data_quality_issues`. Lists keep input order and are not mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlertLists {
    pub high_risk_patients: Vec<String>,
    pub fever_patients: Vec<String>,
    pub data_quality_issues: Vec<String>,
}

impl AlertLists {
    /// Appends the profile's identifier to every list it qualifies for.
    pub fn push(&mut self, profile: &RiskProfile) {
        if profile.is_high_risk() {
            self.high_risk_patients.push(profile.patient_id.clone());
        }
        if profile.has_fever {
            self.fever_patients.push(profile.patient_id.clone());
        }
        if profile.has_data_quality_issue {
            self.data_quality_issues.push(profile.patient_id.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.high_risk_patients.is_empty()
            && self.fever_patients.is_empty()
            && self.data_quality_issues.is_empty()
    }
}

impl Extend<RiskProfile> for AlertLists {
    fn extend<I: IntoIterator<Item = RiskProfile>>(&mut self, profiles: I) {
        for profile in profiles {
            self.push(&profile);
        }
    }
}

impl FromIterator<RiskProfile> for AlertLists {
    fn from_iter<I: IntoIterator<Item = RiskProfile>>(profiles: I) -> Self {
        let mut lists = Self::default();
        lists.extend(profiles);
        lists
    }
}

/// Classifies a batch of patients in a single ordered pass.
///
/// Each record is handled independently; duplicate identifiers are not merged.
pub fn classify_batch(patients: &[PatientRecord]) -> AlertLists {
    let lists: AlertLists = patients.iter().map(calculate_risk_profile).collect();

    tracing::debug!(
        patients = patients.len(),
        high_risk = lists.high_risk_patients.len(),
        fever = lists.fever_patients.len(),
        data_quality = lists.data_quality_issues.len(),
        "classified patient batch"
    );

    lists
}
