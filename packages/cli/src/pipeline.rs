//! Route risk assessment pipeline.
//!
//! Runs the four stages sequentially in a single request-scoped pass:
//! geocode both addresses, fetch the driving route, score it against the
//! crash dataset, classify the raw score. Each stage may block on network
//! I/O; provider calls carry a bounded client-side timeout so a slow
//! provider surfaces as "route unavailable" instead of hanging the run.
//!
//! Address-not-found and route-not-found are recoverable: they are
//! reported as warnings and the remaining stages are skipped.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use dialoguer::{Confirm, Input};
use route_risk_cli_utils::MultiProgress;
use thiserror::Error;

use route_risk_dataset::{CrashDataset, DatasetError};
use route_risk_directions::DirectionsError;
use route_risk_geocoder::GeocodeError;
use route_risk_models::{
    ClassifiedRisk, Coordinate, InvalidWindowError, RiskAssessment, TravelWindow,
};

/// Client-side timeout for each provider call.
const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The geocoder found no candidate match for an address.
    #[error("no match found for address '{address}'")]
    AddressNotFound {
        /// The address that failed to geocode.
        address: String,
    },

    /// The directions provider returned no candidate route.
    #[error("no driving route found between the given addresses")]
    RouteNotFound,

    /// No enabled provider of the given kind is configured.
    #[error("no enabled {kind} service is configured")]
    NoService {
        /// Provider kind ("geocoding" or "directions").
        kind: &'static str,
    },

    /// Geocoding failed.
    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    /// Directions lookup failed.
    #[error(transparent)]
    Directions(#[from] DirectionsError),

    /// Dataset loading failed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// Building the HTTP client failed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The travel window hours were invalid.
    #[error(transparent)]
    Window(#[from] InvalidWindowError),
}

impl PipelineError {
    /// Whether this failure is something the user can fix by adjusting
    /// their input, rather than a fault in the run itself.
    const fn is_recoverable(&self) -> bool {
        matches!(self, Self::AddressNotFound { .. } | Self::RouteNotFound)
    }
}

/// Inputs for one assessment run.
pub struct AssessmentParams {
    /// Origin address, free text.
    pub from_address: String,
    /// Destination address, free text.
    pub to_address: String,
    /// Hours during which the user expects to travel.
    pub window: TravelWindow,
    /// Path to the crash dataset CSV.
    pub data_path: PathBuf,
    /// Proximity threshold in degrees.
    pub proximity_threshold: f64,
    /// Raw score treated as the top of the classification scale.
    pub max_score: f64,
}

/// Output of one assessment run.
pub struct AssessmentReport {
    /// Geocoded origin.
    pub origin: Coordinate,
    /// Geocoded destination.
    pub destination: Coordinate,
    /// Number of points in the route polyline.
    pub route_points: usize,
    /// Scorer output.
    pub assessment: RiskAssessment,
    /// Classifier output.
    pub classified: ClassifiedRisk,
}

/// Runs the assessment and prints the report.
///
/// Recoverable failures (unmatched address, no route) are reported as
/// warnings and do not fail the process.
///
/// # Errors
///
/// Returns an error for non-recoverable failures: dataset problems,
/// missing credentials, transport failures, provider errors.
pub async fn run(
    multi: &MultiProgress,
    params: &AssessmentParams,
) -> Result<(), Box<dyn std::error::Error>> {
    match run_assessment(multi, params).await {
        Ok(report) => {
            print_report(params, &report);
            Ok(())
        }
        Err(e) if e.is_recoverable() => {
            log::warn!("{e}");
            println!("Route risk unavailable: {e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Prompts for assessment inputs, then runs the pipeline.
///
/// # Errors
///
/// Returns an error if a prompt fails or the run fails non-recoverably.
pub async fn run_interactive(multi: &MultiProgress) -> Result<(), Box<dyn std::error::Error>> {
    println!("Route Risk Assessment");
    println!();

    let from_address: String = Input::new()
        .with_prompt("Origin address")
        .interact_text()?;
    let to_address: String = Input::new()
        .with_prompt("Destination address")
        .interact_text()?;

    let start_hour: u8 = Input::new()
        .with_prompt("Travel window start hour (0-23)")
        .default(0)
        .interact_text()?;
    let end_hour: u8 = Input::new()
        .with_prompt("Travel window end hour (0-23, inclusive)")
        .default(23)
        .interact_text()?;
    let window = TravelWindow::new(start_hour, end_hour)?;

    let data_path: String = Input::new()
        .with_prompt("Crash dataset CSV")
        .default("crash_data.csv".to_string())
        .interact_text()?;

    let mut proximity_threshold = route_risk_risk::DEFAULT_PROXIMITY_THRESHOLD_DEGREES;
    let mut max_score = route_risk_risk::DEFAULT_MAX_SCORE;

    if Confirm::new()
        .with_prompt("Configure advanced options?")
        .default(false)
        .interact()?
    {
        proximity_threshold = Input::new()
            .with_prompt("Proximity threshold (degrees)")
            .default(proximity_threshold)
            .interact_text()?;
        max_score = Input::new()
            .with_prompt("Max score for classification")
            .default(max_score)
            .interact_text()?;
    }

    let params = AssessmentParams {
        from_address,
        to_address,
        window,
        data_path: PathBuf::from(data_path),
        proximity_threshold,
        max_score,
    };

    run(multi, &params).await
}

/// Runs the four pipeline stages and returns the report.
async fn run_assessment(
    multi: &MultiProgress,
    params: &AssessmentParams,
) -> Result<AssessmentReport, PipelineError> {
    let pipeline_start = Instant::now();

    // The dataset loads first so a bad path fails before any network call.
    let dataset = CrashDataset::from_csv_path(&params.data_path)?;

    let client = reqwest::Client::builder()
        .timeout(PROVIDER_TIMEOUT)
        .build()?;

    // --- 1. Geocode both addresses ---
    let geocoding = route_risk_geocoder::service_registry::primary_service()
        .ok_or(PipelineError::NoService { kind: "geocoding" })?;
    let geocoding_token = geocoding.access_token()?;

    let spinner = route_risk_cli_utils::stage_spinner(multi, "Geocoding addresses...");
    let origin = route_risk_geocoder::mapbox::geocode(
        &client,
        &geocoding.base_url,
        &geocoding_token,
        &params.from_address,
    )
    .await?
    .ok_or_else(|| PipelineError::AddressNotFound {
        address: params.from_address.clone(),
    })?;

    let destination = route_risk_geocoder::mapbox::geocode(
        &client,
        &geocoding.base_url,
        &geocoding_token,
        &params.to_address,
    )
    .await?
    .ok_or_else(|| PipelineError::AddressNotFound {
        address: params.to_address.clone(),
    })?;
    spinner.finish_and_clear();

    log::info!(
        "Geocoded '{}' -> ({:.5}, {:.5}) and '{}' -> ({:.5}, {:.5})",
        params.from_address,
        origin.longitude,
        origin.latitude,
        params.to_address,
        destination.longitude,
        destination.latitude
    );

    // --- 2. Fetch the driving route ---
    let directions = route_risk_directions::service_registry::primary_service().ok_or(
        PipelineError::NoService {
            kind: "directions",
        },
    )?;
    let directions_token = directions.access_token()?;

    let spinner = route_risk_cli_utils::stage_spinner(multi, "Fetching driving route...");
    let route = route_risk_directions::mapbox::driving_route(
        &client,
        &directions.base_url,
        &directions_token,
        origin,
        destination,
    )
    .await?;
    spinner.finish_and_clear();

    if route.is_empty() {
        return Err(PipelineError::RouteNotFound);
    }

    log::info!("Route polyline has {} points", route.len());

    // --- 3 & 4. Score and classify ---
    let assessment = route_risk_risk::score(
        &route,
        dataset.records(),
        params.window,
        params.proximity_threshold,
    );
    let classified = route_risk_risk::classify(assessment.raw_score, params.max_score);

    log::info!(
        "Assessment complete in {:.2?}: raw score {:.1}, {} overlapping crashes",
        pipeline_start.elapsed(),
        assessment.raw_score,
        assessment.overlapping_crash_count
    );

    Ok(AssessmentReport {
        origin,
        destination,
        route_points: route.len(),
        assessment,
        classified,
    })
}

fn print_report(params: &AssessmentParams, report: &AssessmentReport) {
    println!();
    println!("Route Risk Report");
    println!("  From:        {}", params.from_address);
    println!("  To:          {}", params.to_address);
    println!(
        "  Window:      {:02}:00-{:02}:59",
        params.window.start_hour(),
        params.window.end_hour()
    );
    println!("  Route:       {} points", report.route_points);
    println!(
        "  Origin:      ({:.5}, {:.5})",
        report.origin.longitude, report.origin.latitude
    );
    println!(
        "  Destination: ({:.5}, {:.5})",
        report.destination.longitude, report.destination.latitude
    );
    println!();
    println!(
        "  Nearby crashes in window: {}",
        report.assessment.overlapping_crash_count
    );
    println!("  Raw score:                {:.1}", report.assessment.raw_score);
    println!(
        "  Risk: {} (scaled score {})",
        report.classified.tier, report.classified.scaled_score
    );
}
