use clap::Parser;
use reviewlens_core::config;
use reviewlens_core::seed::load_reviews;
use reviewlens_core::sentiment::LexiconScorer;
use reviewlens_core::store::ReviewStore;
use reviewlens_server::api::create_router;
use reviewlens_server::api::handlers::AppState;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "reviewlens",
    about = "In-memory review store with sentiment-ranked queries"
)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// CSV file of reviews loaded into the store at startup
    #[arg(short, long, default_value = config::DEFAULT_DATA_FILE)]
    data_file: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(
                    "reviewlens_server=info"
                        .parse()
                        .expect("valid directive literal"),
                )
                .add_directive(
                    "reviewlens_core=info"
                        .parse()
                        .expect("valid directive literal"),
                ),
        )
        .init();

    let args = Args::parse();

    if args.port == 0 {
        eprintln!("Error: port must be > 0");
        std::process::exit(1);
    }

    // Seed the store once; submitted reviews live only for the process
    // lifetime, so a failed load is fatal rather than silently empty.
    let reviews = match load_reviews(Path::new(&args.data_file)) {
        Ok(reviews) => {
            tracing::info!("Loaded {} reviews from {}", reviews.len(), args.data_file);
            reviews
        }
        Err(e) => {
            eprintln!("Error: failed to load '{}': {}", args.data_file, e);
            std::process::exit(1);
        }
    };

    let state = AppState {
        store: ReviewStore::seeded(reviews),
        scorer: Arc::new(LexiconScorer::new()),
        start_time: Instant::now(),
    };

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await?;
    tracing::info!("Listening on port {}", args.port);
    axum::serve(listener, app).await?;

    Ok(())
}
