//! Followgraph Engine - follow graph and recommendation server.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use followgraph_engine::{
    api,
    infrastructure::{
        config::EngineConfig,
        neo4j::{ensure_schema, Neo4jGraph, Neo4jRepositories},
    },
    App,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "followgraph_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Followgraph Engine");

    let config = EngineConfig::from_env()?;

    tracing::info!(
        uri = %config.neo4j_uri,
        timeout_secs = config.connect_timeout.as_secs(),
        "Connecting to Neo4j"
    );
    let graph = Neo4jGraph::connect(
        &config.neo4j_uri,
        &config.neo4j_user,
        &config.neo4j_password,
        config.connect_timeout,
    )
    .await?;
    tracing::info!("Connected to Neo4j");

    ensure_schema(&graph).await?;

    let repos = Neo4jRepositories::new(graph, config.tie_break);
    let app = Arc::new(App::new(repos));
    tracing::info!(tie_break = %config.tie_break, "Application initialized");

    let router = api::http::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(app);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

/// Resolves on Ctrl-C or SIGTERM. In-flight requests finish; their
/// transactions are never committed after the connection closes.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
