//! Patient record as received from the assessment API.
//!
//! The scored fields are kept as raw [`serde_json::Value`]s: the service mixes numbers,
//! numeric strings, nulls and garbage, and deciding what is usable is the scorers' job, not
//! the deserializer's. Deserializing a record therefore never fails because of a vital-sign
//! field.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One patient as returned by the remote service.
///
/// Keys other than the four below (name, gender, diagnosis, ...) are kept in `extra` so the
/// record can be written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(default, deserialize_with = "lenient_identifier")]
    pub patient_id: String,

    #[serde(default)]
    pub blood_pressure: Value,

    #[serde(default)]
    pub temperature: Value,

    #[serde(default)]
    pub age: Value,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PatientRecord {
    /// Builds a record from already-typed field values.
    pub fn new(
        patient_id: impl Into<String>,
        blood_pressure: impl Into<Value>,
        temperature: impl Into<Value>,
        age: impl Into<Value>,
    ) -> Self {
        Self {
            patient_id: patient_id.into(),
            blood_pressure: blood_pressure.into(),
            temperature: temperature.into(),
            age: age.into(),
            extra: Map::new(),
        }
    }
}

/// Strings are kept, numbers are rendered as decimal text, anything else becomes `""`.
fn lenient_identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(id) => id,
        Value::Number(id) => id.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_typical_record() {
        let record: PatientRecord = serde_json::from_value(json!({
            "patient_id": "DEMO001",
            "name": "TestPatient, John",
            "age": 45,
            "gender": "M",
            "blood_pressure": "120/80",
            "temperature": 98.6,
            "visit_date": "2024-01-15",
            "diagnosis": "Sample_Hypertension",
            "medications": "DemoMed_A 10mg, TestDrug_B 500mg"
        }))
        .expect("should parse record");

        assert_eq!(record.patient_id, "DEMO001");
        assert_eq!(record.blood_pressure, json!("120/80"));
        assert_eq!(record.temperature, json!(98.6));
        assert_eq!(record.age, json!(45));
        assert_eq!(record.extra.get("gender"), Some(&json!("M")));
        assert_eq!(record.extra.len(), 5);
    }

    #[test]
    fn missing_fields_become_null() {
        let record: PatientRecord =
            serde_json::from_value(json!({ "patient_id": "DEMO002" })).expect("should parse");

        assert_eq!(record.blood_pressure, Value::Null);
        assert_eq!(record.temperature, Value::Null);
        assert_eq!(record.age, Value::Null);
        assert!(record.extra.is_empty());
    }

    #[test]
    fn mistyped_fields_are_kept_raw() {
        let record: PatientRecord = serde_json::from_value(json!({
            "patient_id": "DEMO003",
            "blood_pressure": 12080,
            "temperature": "TEMP_ERROR",
            "age": ["forty"]
        }))
        .expect("should parse");

        assert_eq!(record.blood_pressure, json!(12080));
        assert_eq!(record.temperature, json!("TEMP_ERROR"));
        assert_eq!(record.age, json!(["forty"]));
    }

    #[test]
    fn identifier_is_lenient() {
        let numeric: PatientRecord =
            serde_json::from_value(json!({ "patient_id": 17 })).expect("should parse");
        assert_eq!(numeric.patient_id, "17");

        let null: PatientRecord =
            serde_json::from_value(json!({ "patient_id": null })).expect("should parse");
        assert_eq!(null.patient_id, "");

        let missing: PatientRecord =
            serde_json::from_value(json!({ "age": 30 })).expect("should parse");
        assert_eq!(missing.patient_id, "");
    }

    #[test]
    fn extra_keys_survive_reserialization() {
        let input = json!({
            "patient_id": "DEMO004",
            "blood_pressure": "150/95",
            "temperature": 102,
            "age": 70,
            "diagnosis": "Sample_Diabetes"
        });
        let record: PatientRecord = serde_json::from_value(input.clone()).expect("should parse");
        let output = serde_json::to_value(&record).expect("should serialize");
        assert_eq!(output, input);
    }
}
