use anyhow::{Context, Result, anyhow, bail};
use catalog::{Catalog, GeoPoint};
use clap::{Parser, Subcommand};
use cluster_model::ClusterModel;
use colored::Colorize;
use dialoguer::Input;
use engine::{DEFAULT_MAX_DISTANCE_KM, DEFAULT_TOP_N, EngineConfig, RankedResult, RawRequest, RecommendationRequest};
use server::RecommendationService;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// DineRecs - Restaurant Recommendation Engine
#[derive(Parser)]
#[command(name = "dine-recs")]
#[command(about = "Recommend nearby restaurants by rating, cuisine and amenities", long_about = None)]
struct Cli {
    /// Path to the restaurant CSV file
    #[arg(short, long, default_value = "data/restaurants.csv")]
    data: PathBuf,

    /// Path to a trained clustering model (JSON). Loaded up front when given.
    #[arg(short, long)]
    model: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get restaurant recommendations for a location
    Recommend {
        /// Your latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Your longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Minimum rating (0-5), inclusive
        #[arg(long, default_value = "0")]
        min_rating: f64,

        /// Cuisine type (exact, case-sensitive)
        #[arg(long)]
        cuisine: String,

        /// Only restaurants with parking
        #[arg(long)]
        parking: bool,

        /// Only restaurants with WiFi
        #[arg(long)]
        wifi: bool,

        /// Search radius in kilometres
        #[arg(long, default_value_t = DEFAULT_MAX_DISTANCE_KM)]
        max_distance: f64,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top_n: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Answer a few questions and get recommendations
    Interactive,

    /// List cuisine types with their encoded value and restaurant count
    Cuisines,

    /// Search restaurants by name
    Search {
        /// Name to search for (case-insensitive substring match)
        #[arg(long)]
        name: String,
    },

    /// Show how many restaurants fall in each cluster (requires --model)
    Clusters,

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_file(&cli.data)
            .with_context(|| format!("Failed to load restaurant data from {}", cli.data.display()))?,
    );
    println!(
        "{} Loaded {} restaurants in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    let model = match &cli.model {
        Some(path) => Some(ClusterModel::load(path).context("Failed to load the model")?),
        None => None,
    };

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            lat,
            lon,
            min_rating,
            cuisine,
            parking,
            wifi,
            max_distance,
            top_n,
            json,
        } => {
            let request = RecommendationRequest::new(GeoPoint::new(lat, lon), min_rating, cuisine)
                .with_parking(parking)
                .with_wifi(wifi)
                .with_max_distance_km(max_distance);
            handle_recommend(catalog, request, top_n, json).await?
        }
        Commands::Interactive => handle_interactive(catalog).await?,
        Commands::Cuisines => handle_cuisines(&catalog),
        Commands::Search { name } => handle_search(&catalog, &name),
        Commands::Clusters => {
            let model = model.ok_or_else(|| anyhow!("The clusters command needs --model"))?;
            handle_clusters(&catalog, &model)
        }
        Commands::Benchmark { requests } => handle_benchmark(catalog, requests).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    catalog: Arc<Catalog>,
    request: RecommendationRequest,
    top_n: usize,
    json: bool,
) -> Result<()> {
    let service = RecommendationService::new(catalog, EngineConfig::default().with_top_n(top_n))?;
    let recommendations = service.recommend(request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
    } else {
        print_recommendations(&recommendations);
    }
    Ok(())
}

/// Handle the 'interactive' command
async fn handle_interactive(catalog: Arc<Catalog>) -> Result<()> {
    println!("{}", "Restaurant Recommender System".bold().blue());

    let raw = RawRequest {
        latitude: Input::new().with_prompt("Enter your latitude").interact_text()?,
        longitude: Input::new().with_prompt("Enter your longitude").interact_text()?,
        min_rating: Input::new().with_prompt("Enter minimum rating (0-5)").interact_text()?,
        need_parking: Input::new()
            .with_prompt("Need parking? (yes/no)")
            .default("no".to_string())
            .interact_text()?,
        need_wifi: Input::new()
            .with_prompt("Need WiFi? (yes/no)")
            .default("no".to_string())
            .interact_text()?,
        cuisine_type: Input::new().with_prompt("Enter cuisine type").interact_text()?,
    };

    let request = raw.parse().context("Invalid input")?;
    handle_recommend(catalog, request, DEFAULT_TOP_N, false).await
}

/// Handle the 'cuisines' command
fn handle_cuisines(catalog: &Catalog) {
    println!("{}", "Cuisine types:".bold().blue());
    for entry in catalog.cuisine_index().entries() {
        println!(
            "{:>5}  {:<28} {} restaurants",
            entry.code.to_string().green(),
            entry.label,
            entry.count
        );
    }
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, name: &str) {
    let mut matches = catalog.search_by_name(name);
    matches.sort_by(|a, b| {
        a.bus_name
            .cmp(&b.bus_name)
            .then_with(|| b.rating.total_cmp(&a.rating))
    });

    println!("{}", format!("Search results for '{}':", name).bold().blue());
    for record in matches.iter().take(20) {
        println!(
            "{}: {} [{}] rating {:.1} - {}",
            record.business_id, record.bus_name, record.cuisine_type, record.rating, record.address
        );
    }
    if matches.len() > 20 {
        println!("... and {} more", matches.len() - 20);
    }
}

/// Handle the 'clusters' command
fn handle_clusters(catalog: &Catalog, model: &ClusterModel) {
    let sizes = model.cluster_sizes(catalog);

    println!("{}", "Cluster sizes:".bold().blue());
    for (cluster, size) in sizes.iter().enumerate() {
        println!("  cluster {}: {} restaurants", cluster.to_string().green(), size);
    }
}

/// Handle the 'benchmark' command
async fn handle_benchmark(catalog: Arc<Catalog>, requests: usize) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }
    if catalog.is_empty() {
        bail!("Cannot benchmark an empty catalog");
    }

    let service = RecommendationService::new(catalog.clone(), EngineConfig::default())?;
    let cuisines = catalog.cuisine_index().entries();

    // Random requests centred on real restaurants so most of them match something
    let sample: Vec<RecommendationRequest> = (0..requests)
        .map(|_| {
            let record = &catalog.records()[rand::random_range(0..catalog.len())];
            let cuisine = &cuisines[rand::random_range(0..cuisines.len())].label;
            RecommendationRequest::new(record.location(), rand::random_range(0.0..4.5), cuisine.clone())
                .with_parking(rand::random())
                .with_wifi(rand::random())
        })
        .collect();

    info!("Running {} requests", requests);
    let wall_clock = Instant::now();

    // Use tokio::spawn to make concurrent requests
    let mut handles = vec![];
    for request in sample {
        let service = service.clone();
        let handle = tokio::spawn(async move {
            let start = Instant::now();
            service.recommend(request).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }
    // Wait for all tasks to complete and collect timings
    let mut timings: Vec<Duration> = vec![];
    for handle in handles {
        timings.push(handle.await??);
    }
    let total_time = wall_clock.elapsed();

    timings.sort();
    let avg_latency = timings.iter().sum::<Duration>() / timings.len() as u32;
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[RankedResult]) {
    if recommendations.is_empty() {
        println!("{}", "No restaurants match your preferences.".yellow());
        return;
    }

    println!("{}", "Restaurant Recommendations:".bold().blue());
    for (i, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} [{}] - Rating: {:.1}, {:.2} km",
            (i + 1).to_string().green(),
            rec.bus_name.bold(),
            rec.cuisine_type,
            rec.rating,
            rec.distance_km
        );
        println!("   {} ({})", rec.address, rec.business_id);
    }
}
