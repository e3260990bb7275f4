mod client_id;
mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let host = config::HostConfig::from_env().expect("invalid configuration");
    let port = host.port;
    tracing::info!(
        endpoint = %host.feed_endpoint,
        policy = host.feed_policy.as_str(),
        "feed configuration loaded"
    );

    let app = routes::leptos_app(host).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "block feed listening");
    axum::serve(listener, app).await.expect("server failed");
}
