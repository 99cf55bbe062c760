//! Popcorn backend server binary.

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// CLI arguments for the backend server.
#[derive(Parser, Debug)]
#[command(name = "popcorn_server", about = "Popcorn movie backend server")]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// PostgreSQL connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/popcorn"
    )]
    database_url: String,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,popcorn_api=debug,popcorn_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    info!(port = args.port, "starting popcorn_server");

    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&args.database_url)
        .await?;

    info!("running database migrations");
    popcorn_api::migrate(&pool).await?;

    let mut config = popcorn_api::config::ApiConfig::from_env();
    config.bind_addr = format!("0.0.0.0:{}", args.port);
    config.database_url = args.database_url;

    let tmdb = popcorn_core::tmdb::TmdbClient::new(
        config.tmdb_base_url.clone(),
        config.tmdb_api_key.clone(),
    )?;

    let state = popcorn_api::AppState {
        pool,
        config: config.clone(),
        tmdb,
    };
    let app = popcorn_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
