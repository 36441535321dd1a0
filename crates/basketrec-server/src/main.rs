//! BasketRec Server - REST API for co-purchase product recommendations.

use axum::{routing::get, Router};
use clap::Parser;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use basketrec_core::RecommendContext;
use basketrec_server::{AppState, health_check, recommend};

/// BasketRec Server - co-purchase recommendations over REST
#[derive(Parser, Debug)]
#[command(name = "basketrec-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON order history used for training
    #[arg(short, long, default_value = "data/orders.json", env = "BASKETREC_DATA")]
    data: String,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0", env = "BASKETREC_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "3000", env = "BASKETREC_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    tracing::info!("Starting BasketRec server...");
    tracing::info!("Order history: {}", args.data);

    // Training runs to completion before the listener binds. A startup
    // failure here aborts the process: the service never accepts requests
    // with an untrained or inconsistent model.
    let ctx = RecommendContext::bootstrap(&args.data)?;
    tracing::info!(
        products = ctx.catalog().num_products(),
        "model trained, starting HTTP surface"
    );

    let state = Arc::new(AppState { ctx });

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/recommend/{product_id}", get(recommend))
        .with_state(state);

    #[cfg(feature = "swagger-ui")]
    let app = app.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url(
            "/api-docs/openapi.json",
            <basketrec_server::ApiDoc as utoipa::OpenApi>::openapi(),
        ),
    );

    let app = app
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("BasketRec server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
