use std::sync::Arc;

use axum::{http::HeaderValue, Server};
use dotenv::dotenv;

use tarefa_client::{
    config::Config,
    server::{connect, cors_layer, create_router, AppState},
};

// Entry point of the reference backend
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tarefa_client::init_tracing();

    let config = Config::from_env();

    let pool = match connect(&config.database_url).await {
        Ok(pool) => {
            tracing::info!(database_url = %config.database_url, "connected to the database");
            pool
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to connect to the database");
            return Err(err.into());
        }
    };

    let app_state = Arc::new(AppState { db: pool });
    let origin: HeaderValue = config.cors_origin.parse()?;
    let app = create_router(app_state).layer(cors_layer(origin));

    let addr = config.socket_addr()?;
    tracing::info!(%addr, "server started");

    Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
