use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};

use partner_desk::config::AppConfig;
use partner_desk::dashboard::{DashboardRouteState, MockDataProvider, dashboard_routes};
use partner_desk::onboarding::{OnboardingManager, OnboardingRouteState, onboarding_routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env()?;

    eprintln!("🏦 Partner Desk v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   API: http://0.0.0.0:{}/api", config.port);
    eprintln!(
        "   Events WS: ws://0.0.0.0:{}/ws/onboarding/events",
        config.port
    );
    eprintln!(
        "   Signature delay: {}s\n",
        config.onboarding.signature_delay.as_secs()
    );

    let manager = Arc::new(OnboardingManager::new(config.onboarding.clone()));
    let provider = Arc::new(MockDataProvider);

    // The dashboard frontend is served elsewhere during development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = onboarding_routes(OnboardingRouteState {
        manager: Arc::clone(&manager),
    })
    .merge(dashboard_routes(DashboardRouteState { provider }))
    .layer(cors);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "Partner Desk server started");
    axum::serve(listener, app).await?;

    Ok(())
}
