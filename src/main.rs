//! Itinerary planner command line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use itinerary_planner::config::PlannerOptions;
use itinerary_planner::dataset::Dataset;
use itinerary_planner::embedding::{FallbackEmbedder, HashedTfIdfEmbedder};
use itinerary_planner::embedding_service::{EmbeddingServiceClient, EmbeddingServiceConfig};
use itinerary_planner::error::Result;
use itinerary_planner::haversine::HaversineMatrix;
use itinerary_planner::model::Pace;
use itinerary_planner::planner::{PlanRequest, Planner};
use itinerary_planner::report::ItineraryReport;
use itinerary_planner::traits::EmbeddingProvider;
use itinerary_planner::travel::GreatCircleTravel;

#[derive(Debug, Parser)]
#[command(name = "itinerary-planner", about = "Plan a multi-city trip day by day")]
struct Args {
    /// City and attraction data (JSON).
    #[arg(long)]
    data: PathBuf,

    /// Number of days for the trip.
    #[arg(long)]
    days: u32,

    /// Travel preferences, e.g. art museum food.
    #[arg(long, num_args = 1.., required = true)]
    preferences: Vec<String>,

    #[arg(long, value_enum, default_value_t = Pace::Moderate)]
    pace: Pace,

    /// Planner options override (JSON).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of a transformer embedding service.
    #[arg(long)]
    embedding_url: Option<String>,

    /// Output file for the itinerary (JSON).
    #[arg(long)]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("itinerary_planner=info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "planning failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let options = match &args.config {
        Some(path) => PlannerOptions::from_path(path)?,
        None => PlannerOptions::default(),
    };

    let dataset = Dataset::from_path(&args.data)?;
    let embedder = embedder(args.embedding_url.as_deref());
    let planner = Planner::new(
        embedder,
        HaversineMatrix::new(options.default_attraction_distance_km),
        GreatCircleTravel::new(),
        options,
    );

    let request = PlanRequest::new(args.days, args.preferences.clone(), args.pace);
    let outcome = planner.plan(&dataset, &request)?;

    let report = ItineraryReport::build(
        &outcome.itinerary,
        &request.preferences,
        request.pace,
        chrono::Local::now().date_naive(),
    );
    report.write_json(&args.output)?;

    info!(output = %args.output.display(), "itinerary written");
    Ok(())
}

fn embedder(url: Option<&str>) -> Box<dyn EmbeddingProvider> {
    let Some(url) = url else {
        return Box::new(HashedTfIdfEmbedder::default());
    };

    let config = EmbeddingServiceConfig {
        base_url: url.to_string(),
        ..EmbeddingServiceConfig::default()
    };
    match EmbeddingServiceClient::new(config) {
        Ok(client) => Box::new(FallbackEmbedder::new(client, HashedTfIdfEmbedder::default())),
        Err(err) => {
            error!(error = %err, "could not build embedding client, using frequency model");
            Box::new(HashedTfIdfEmbedder::default())
        }
    }
}
