//! Clinical thresholds used by the scorers and the batch classifier.
//!
//! These are fixed domain constants. Comparisons are documented on each constant so the
//! scorers read as a direct transcription of the rule table.

/// Systolic reading (mmHg) at or above which a reading is Stage-2 hypertensive.
pub const BP_STAGE2_SYSTOLIC: i64 = 140;

/// Diastolic reading (mmHg) at or above which a reading is Stage-2 hypertensive.
pub const BP_STAGE2_DIASTOLIC: i64 = 90;

/// Systolic reading (mmHg) at or above which a reading is Stage-1 hypertensive.
pub const BP_STAGE1_SYSTOLIC: i64 = 130;

/// Diastolic reading (mmHg) at or above which a reading is Stage-1 hypertensive.
pub const BP_STAGE1_DIASTOLIC: i64 = 80;

/// Systolic reading (mmHg) at or above which a reading is elevated.
pub const BP_ELEVATED_SYSTOLIC: i64 = 120;

/// Temperature (°F) at or above which a patient has a high fever.
pub const TEMP_HIGH_FEVER_F: f64 = 101.0;

/// Temperature (°F) at or above which a patient has a fever.
pub const TEMP_FEVER_F: f64 = 99.6;

/// Age (years) strictly above which a patient is in the oldest band.
pub const AGE_SENIOR_ABOVE: i64 = 65;

/// Age (years) at or above which a patient is in the middle band.
pub const AGE_MIDDLE_FROM: i64 = 40;

/// Total risk score at or above which a patient is reported as high risk.
pub const HIGH_RISK_MIN_SCORE: u8 = 4;
