use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cartage::config::{get_config, CliArgs};
use cartage::{create_app, db, run_migrations, AppState};

#[tokio::main]
async fn main() {
    // Load environment variables from .env when present
    dotenv::dotenv().ok();

    let args = CliArgs::parse();
    let default_filter = if args.debug { "cartage=debug,info" } else { "info" };

    // Log to stdout for the console and to a daily-rolling JSON file
    let file_appender = tracing_appender::rolling::daily("logs", "cartage.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::fmt::layer().json().with_writer(file_writer))
        .init();

    // Resolve configuration from defaults, config file, environment and args
    let config = get_config(args);

    // Initialize the database pool and bring the schema up to date
    let pool = Arc::new(db::init_pool(&config.database_url));
    {
        let mut conn = pool.get().expect("Failed to get database connection");
        run_migrations(&mut conn);
    }

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .expect("Invalid listen address");

    // Build the application
    let state = AppState::new(pool, config);
    let app = create_app(state);

    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
