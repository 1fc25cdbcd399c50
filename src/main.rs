use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use triage_client::{AssessmentClient, RawConfig, run_assessment};
use triage_core::AlertLists;

const ENV_DRY_RUN: &str = "TRIAGE_DRY_RUN";

/// Main entry point for the triage run
///
/// Fetches every patient from the assessment API, classifies the batch into
/// alert lists, prints them as JSON and submits them.
///
/// # Environment Variables
/// - `ASSESSMENT_API_KEY`: API key sent with every request (required)
/// - `ASSESSMENT_BASE_URL`: API base URL (default: "https://assessment.ksensetech.com/api")
/// - `ASSESSMENT_MAX_RETRIES`, `ASSESSMENT_RETRY_DELAY_MS`: page retry policy
/// - `ASSESSMENT_PAGE_LIMIT`, `ASSESSMENT_TIMEOUT_SECS`: paging and request timeout
/// - `TRIAGE_DRY_RUN`: when truthy, print the lists without submitting
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("triage=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RawConfig::from_env().resolve()?;
    let dry_run = is_truthy(std::env::var(ENV_DRY_RUN).ok());
    let client = AssessmentClient::new(config)?;

    let run = run_assessment(&client, &client.config().retry_policy(), !dry_run).await?;
    log_summary(run.patients, &run.lists);
    println!("{}", serde_json::to_string_pretty(&run.lists)?);

    if let Some(reply) = run.reply {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    }

    Ok(())
}

fn log_summary(patients: usize, lists: &AlertLists) {
    tracing::info!(
        patients,
        high_risk = lists.high_risk_patients.len(),
        fever = lists.fever_patients.len(),
        data_quality = lists.data_quality_issues.len(),
        "assessment complete"
    );
}

fn is_truthy(value: Option<String>) -> bool {
    value.is_some_and(|v| {
        matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}
