use std::sync::Arc;

use brand_kit::brand::{AssetOrchestrator, BrandRouteState, brand_routes};
use brand_kit::config::AppConfig;
use brand_kit::images::CloudflareImageClient;
use brand_kit::llm::{StructuredGenerator, create_provider};
use brand_kit::onboarding::{OnboardingRouteState, onboarding_routes};
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Install rustls crypto provider before any TLS usage
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("  export ANTHROPIC_API_KEY=sk-ant-...");
        std::process::exit(1);
    });

    eprintln!("🎨 Brand Kit v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.llm.model);
    eprintln!(
        "   Images: {}",
        if config.cloudflare.is_some() {
            "Cloudflare Workers AI"
        } else {
            "disabled (CLOUDFLARE_ACCOUNT_ID / CLOUDFLARE_API_TOKEN not set)"
        }
    );
    eprintln!("   API: http://0.0.0.0:{}/api\n", config.port);

    let llm = create_provider(&config.llm)?;
    let text = StructuredGenerator::new(llm);
    let images = Arc::new(CloudflareImageClient::new(config.cloudflare.clone()));

    let app = brand_routes(BrandRouteState {
        orchestrator: AssetOrchestrator::new(text.clone(), images),
    })
    .merge(onboarding_routes(OnboardingRouteState::new(text)))
    .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "Brand Kit server started");
    axum::serve(listener, app).await?;

    Ok(())
}
