use clap::{Parser, Subcommand};
use serde::Deserialize;
use serde_json::Value;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use triage_client::{run_assessment, AssessmentClient, PatientPage, RawConfig};
use triage_core::{calculate_risk_profile, classify_batch, PatientRecord, RiskProfile};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Patient triage scoring CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single patient from raw field values
    Score {
        /// Blood pressure reading, e.g. 120/80
        #[arg(long)]
        blood_pressure: Option<String>,
        /// Temperature in °F
        #[arg(long)]
        temperature: Option<String>,
        /// Age in years
        #[arg(long)]
        age: Option<String>,
        /// Identifier to report in the profile
        #[arg(long, default_value = "cli")]
        patient_id: String,
    },
    /// Classify patients read from a JSON file
    Classify {
        /// JSON array of patient records, or a page object with a `data` array
        input: PathBuf,
    },
    /// Fetch all patients from the assessment API
    Fetch {
        /// Write the patients to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Fetch, classify and print the alert lists
    Run {
        /// Submit the alert lists after classifying
        #[arg(long)]
        submit: bool,
    },
}

/// Patients file accepted by `classify`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PatientsFile {
    Records(Vec<PatientRecord>),
    Page(PatientPage),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Score {
            blood_pressure,
            temperature,
            age,
            patient_id,
        }) => {
            let profile = score_patient(patient_id, blood_pressure, temperature, age);
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        Some(Commands::Classify { input }) => {
            let patients = read_patients(&input)?;
            let lists = classify_batch(&patients);
            println!("{}", serde_json::to_string_pretty(&lists)?);
        }
        Some(Commands::Fetch { output }) => {
            let client = AssessmentClient::new(RawConfig::from_env().resolve()?)?;
            let patients = client.fetch_all_patients().await?;
            let json = serde_json::to_string_pretty(&patients)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("Wrote {} patients to {}", patients.len(), path.display());
                }
                None => println!("{json}"),
            }
        }
        Some(Commands::Run { submit }) => {
            let client = AssessmentClient::new(RawConfig::from_env().resolve()?)?;
            let run = run_assessment(&client, &client.config().retry_policy(), submit).await?;
            println!("{}", serde_json::to_string_pretty(&run.lists)?);
        }
        None => {
            println!("Use 'triage --help' for commands");
        }
    }

    Ok(())
}

/// Logs go to stderr so that stdout carries only JSON.
fn init_tracing() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("triage=info".parse()?))
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn score_patient(
    patient_id: String,
    blood_pressure: Option<String>,
    temperature: Option<String>,
    age: Option<String>,
) -> RiskProfile {
    let field = |value: Option<String>| value.map_or(Value::Null, Value::String);
    let patient = PatientRecord::new(
        patient_id,
        field(blood_pressure),
        field(temperature),
        field(age),
    );
    calculate_risk_profile(&patient)
}

fn read_patients(path: &Path) -> Result<Vec<PatientRecord>, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let parsed: PatientsFile = serde_json::from_str(&text)
        .map_err(|e| format!("{} is not a patient list or page: {e}", path.display()))?;

    Ok(match parsed {
        PatientsFile::Records(patients) => patients,
        PatientsFile::Page(page) => page.data,
    })
}
