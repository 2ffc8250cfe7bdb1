use dotenvy::dotenv;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use learntrack::config::server::ServerConfig;
use learntrack::router::init_router;
use learntrack::state::init_app_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = init_app_state().await?;
    let app = init_router(state);

    let server_config = ServerConfig::from_env();
    let listener =
        tokio::net::TcpListener::bind(("0.0.0.0", server_config.port)).await?;
    tracing::info!("Server running on http://localhost:{}", server_config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
