mod cli;

use clap::Parser;
use job_board::{
    config::init_config,
    database::{
        pool::{create_pool, run_migrations},
        seed::seed_jobs,
    },
    middleware::cors::cors_layer,
    routes, telemetry, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

use crate::cli::{Cli, Command, ServeArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = init_config()?;
    telemetry::init_tracing(config.log_format);

    let pool = create_pool(config).await?;
    run_migrations(&pool).await?;

    match cli.command() {
        Command::Migrate => Ok(()),
        Command::Seed(args) => {
            let inserted = seed_jobs(&pool, args.fresh).await?;
            info!(inserted, "seeding finished");
            Ok(())
        }
        Command::Serve(ServeArgs { addr }) => {
            let app_state = AppState::new(pool);
            let cors = cors_layer(config.cors_allowed_origin.as_deref())?;
            let app = routes::app(app_state, cors);

            let addr: SocketAddr = addr
                .as_deref()
                .unwrap_or(&config.server_address)
                .parse()?;
            info!("Server listening on {}", addr);
            let listener = TcpListener::bind(addr).await?;
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            info!("Server stopped");
            Ok(())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "failed to listen for shutdown signal");
    }
}
