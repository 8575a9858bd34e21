use chrono::Utc;
use clap::Parser;
use seeder::{SeedLoader, SeedOptions, SeedPlan};
use sqlx::postgres::PgPoolOptions;
use storage::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "octofit-seed")]
#[command(about = "Replace the OctoFit Tracker database with superhero sample data", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Seed for the random generator, for a reproducible data set
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 5)]
    min_activities: u32,

    #[arg(long, default_value_t = 15)]
    max_activities: u32,

    /// Spread activity dates over this many past days
    #[arg(long, default_value_t = 30)]
    days: u32,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("seed={},seeder={},storage={}", log_level, log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let options = SeedOptions {
        min_activities: cli.min_activities,
        max_activities: cli.max_activities,
        days: cli.days,
        seed: cli.seed,
    };

    if let Some(seed) = options.seed {
        tracing::info!("Using random seed {}", seed);
    }
    let mut rng = options.rng();

    let plan = SeedPlan::generate(&mut rng, Utc::now().naive_utc(), &options)?;

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&cli.database_url)
        .await?;

    tracing::info!("Running migrations...");
    let db = Database::from_pool(pool);
    db.run_migrations().await?;

    let summary = SeedLoader::new(db.pool()).load(&plan).await?;

    tracing::info!("✓ Successfully populated database with superhero test data!");
    summary.log();
    for (team, members) in plan.member_counts() {
        tracing::info!("  {}: {} members", team, members);
    }

    Ok(())
}
