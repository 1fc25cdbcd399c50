//! Per-patient risk profile.

use crate::constants::HIGH_RISK_MIN_SCORE;
use crate::record::PatientRecord;
use crate::scoring::{
    age_score, is_fever, parse_temperature, temperature_score_of, BloodPressureCategory,
    BloodPressureReading, FieldScore,
};
use serde::Serialize;

/// Derived risk for one patient.
///
/// `total_score` is the sum of the three field scores (0 to 7). The field breakdown is kept
/// so an operator can see which field drove the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskProfile {
    pub patient_id: String,
    pub total_score: u8,
    pub has_data_quality_issue: bool,
    pub has_fever: bool,
    pub blood_pressure: FieldScore,
    /// `None` when the blood-pressure field could not be parsed.
    pub blood_pressure_category: Option<BloodPressureCategory>,
    pub temperature: FieldScore,
    pub age: FieldScore,
}

impl RiskProfile {
    pub fn is_high_risk(&self) -> bool {
        self.total_score >= HIGH_RISK_MIN_SCORE
    }
}

/// Computes the risk profile for one patient.
///
/// Total over every input shape: missing or mistyped fields raise the data-quality flag and
/// contribute 0 to the score. The temperature is parsed once and that reading drives both
/// the temperature score and the fever flag.
pub fn calculate_risk_profile(patient: &PatientRecord) -> RiskProfile {
    let category = BloodPressureReading::parse(&patient.blood_pressure).map(|r| r.category());
    let blood_pressure = category.map_or(FieldScore::unusable(), |c| c.field_score());

    let temperature_reading = parse_temperature(&patient.temperature);
    let temperature = temperature_score_of(temperature_reading);

    let age = age_score(&patient.age);

    RiskProfile {
        patient_id: patient.patient_id.clone(),
        total_score: blood_pressure.score + temperature.score + age.score,
        has_data_quality_issue: blood_pressure.issue || temperature.issue || age.issue,
        has_fever: is_fever(temperature_reading),
        blood_pressure,
        blood_pressure_category: category,
        temperature,
        age,
    }
}
