#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "configuration invalid");
            std::process::exit(1);
        }
    };
    let port = config.port;
    tracing::info!(chain_id = config.chain_id, image_hosts = ?config.image_hosts, "configuration loaded");

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "goldstable listening");
    axum::serve(listener, app).await.expect("server failed");
}
