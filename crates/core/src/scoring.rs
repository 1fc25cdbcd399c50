//! Per-field scorers.
//!
//! Each scorer maps one raw field to a [`FieldScore`]. The parse step and the scoring step
//! are exposed separately so that a caller which needs the parsed reading as well (the
//! fever flag in [`crate::profile`]) parses once and scores from the same value.

use crate::constants::{
    AGE_MIDDLE_FROM, AGE_SENIOR_ABOVE, BP_ELEVATED_SYSTOLIC, BP_STAGE1_DIASTOLIC,
    BP_STAGE1_SYSTOLIC, BP_STAGE2_DIASTOLIC, BP_STAGE2_SYSTOLIC, TEMP_FEVER_F,
    TEMP_HIGH_FEVER_F,
};
use crate::lenient;
use serde::Serialize;
use serde_json::Value;

/// Score contributed by a single field, plus whether the field was unusable.
///
/// `issue` is true exactly when the field could not be parsed; the score is then 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldScore {
    pub score: u8,
    pub issue: bool,
}

impl FieldScore {
    /// A successfully parsed field with the given score.
    pub const fn scored(score: u8) -> Self {
        Self {
            score,
            issue: false,
        }
    }

    /// A field that could not be used.
    pub const fn unusable() -> Self {
        Self {
            score: 0,
            issue: true,
        }
    }
}

// ============================================================================
// Blood pressure
// ============================================================================

/// Blood-pressure severity tier. Labels only, not a diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BloodPressureCategory {
    Normal,
    Elevated,
    Stage1,
    Stage2,
    /// No rule matched. Unreachable with the current thresholds.
    Unclassified,
}

impl BloodPressureCategory {
    /// Classifies a reading. Rules are evaluated in order; the first match wins.
    pub fn classify(systolic: i64, diastolic: i64) -> Self {
        if systolic >= BP_STAGE2_SYSTOLIC || diastolic >= BP_STAGE2_DIASTOLIC {
            return Self::Stage2;
        }
        if systolic >= BP_STAGE1_SYSTOLIC || diastolic >= BP_STAGE1_DIASTOLIC {
            return Self::Stage1;
        }
        if systolic >= BP_ELEVATED_SYSTOLIC && diastolic < BP_STAGE1_DIASTOLIC {
            return Self::Elevated;
        }
        if systolic < BP_ELEVATED_SYSTOLIC && diastolic < BP_STAGE1_DIASTOLIC {
            return Self::Normal;
        }
        Self::Unclassified
    }

    pub fn field_score(self) -> FieldScore {
        match self {
            Self::Stage2 => FieldScore::scored(3),
            Self::Stage1 => FieldScore::scored(2),
            Self::Elevated => FieldScore::scored(1),
            Self::Normal => FieldScore::scored(0),
            Self::Unclassified => FieldScore::unusable(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Elevated => "elevated",
            Self::Stage1 => "stage 1",
            Self::Stage2 => "stage 2",
            Self::Unclassified => "unclassified",
        }
    }
}

impl std::fmt::Display for BloodPressureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed `"<systolic>/<diastolic>"` reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BloodPressureReading {
    pub systolic: i64,
    pub diastolic: i64,
}

impl BloodPressureReading {
    /// Parses a raw blood-pressure field.
    ///
    /// The value must be a non-empty string with exactly one `/`, and both sides must have
    /// a leading integer.
    pub fn parse(value: &Value) -> Option<Self> {
        let text = value.as_str().filter(|s| !s.is_empty())?;

        let mut parts = text.split('/');
        let (Some(systolic), Some(diastolic), None) = (parts.next(), parts.next(), parts.next())
        else {
            return None;
        };

        Some(Self {
            systolic: lenient::parse_int_prefix(systolic)?,
            diastolic: lenient::parse_int_prefix(diastolic)?,
        })
    }

    pub fn category(self) -> BloodPressureCategory {
        BloodPressureCategory::classify(self.systolic, self.diastolic)
    }
}

/// Scores a raw blood-pressure field.
pub fn blood_pressure_score(value: &Value) -> FieldScore {
    BloodPressureReading::parse(value)
        .map_or(FieldScore::unusable(), |reading| reading.category().field_score())
}

// ============================================================================
// Temperature
// ============================================================================

/// Parses a raw temperature field (°F).
pub fn parse_temperature(value: &Value) -> Option<f64> {
    lenient::parse_float(value)
}

/// Scores an already parsed temperature. `None` means the field was unusable.
pub fn temperature_score_of(reading: Option<f64>) -> FieldScore {
    match reading {
        None => FieldScore::unusable(),
        Some(t) if t >= TEMP_HIGH_FEVER_F => FieldScore::scored(2),
        Some(t) if t >= TEMP_FEVER_F => FieldScore::scored(1),
        Some(_) => FieldScore::scored(0),
    }
}

/// True when the temperature parsed and is at or above the fever threshold.
pub fn is_fever(reading: Option<f64>) -> bool {
    reading.is_some_and(|t| t >= TEMP_FEVER_F)
}

/// Scores a raw temperature field.
pub fn temperature_score(value: &Value) -> FieldScore {
    temperature_score_of(parse_temperature(value))
}

// ============================================================================
// Age
// ============================================================================

/// Parses a raw age field (years).
pub fn parse_age(value: &Value) -> Option<i64> {
    lenient::parse_int(value)
}

/// Scores an already parsed age. `None` means the field was unusable.
pub fn age_score_of(reading: Option<i64>) -> FieldScore {
    match reading {
        None => FieldScore::unusable(),
        Some(age) if age > AGE_SENIOR_ABOVE => FieldScore::scored(2),
        Some(age) if age >= AGE_MIDDLE_FROM => FieldScore::scored(1),
        Some(_) => FieldScore::scored(0),
    }
}

/// Scores a raw age field.
pub fn age_score(value: &Value) -> FieldScore {
    age_score_of(parse_age(value))
}
