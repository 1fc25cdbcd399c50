//! # Triage Core
//!
//! Risk scoring and alert classification for batches of patient records.
//!
//! This crate contains pure data operations only:
//! - Lenient parsing of loosely typed vital-sign fields
//! - Per-field scorers for blood pressure, temperature and age
//! - Per-patient risk profiles
//! - Folding a batch of profiles into the three alert lists
//!
//! **No I/O concerns**: fetching patients, retries and submitting results belong in
//! `triage-client`. Malformed patient data never produces an error here; it is reported
//! through the data-quality flag instead.

pub mod classify;
pub mod constants;
pub mod lenient;
pub mod profile;
pub mod record;
pub mod scoring;

pub use classify::{classify_batch, AlertLists};
pub use profile::{calculate_risk_profile, RiskProfile};
pub use record::PatientRecord;
pub use scoring::{
    age_score, blood_pressure_score, temperature_score, BloodPressureCategory,
    BloodPressureReading, FieldScore,
};
