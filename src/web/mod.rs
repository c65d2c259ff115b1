//! Web form and JSON endpoint using axum.

mod page;

pub use page::{render_page, PAGE_TITLE};

use axum::{
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ServerConfig;
use crate::report::{check_submission, CheckOutcome};

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Body of `POST /check` and `POST /api/evaluate`.
#[derive(Debug, Deserialize)]
pub struct PasswordInput {
    #[serde(default)]
    pub password: SecretString,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Builds the router
pub fn router() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/check", post(check_handler))
        .route("/api/evaluate", post(evaluate_handler))
        .route("/health", get(health_handler))
}

/// Run the web server until it fails.
pub async fn run(config: ServerConfig) -> Result<(), WebError> {
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| WebError::Bind {
            addr: config.addr,
            source,
        })?;

    tracing::info!("Listening on http://{}", config.addr);

    axum::serve(listener, router()).await?;
    Ok(())
}

/// GET / - Empty form
async fn index_handler() -> Html<String> {
    Html(render_page(None))
}

/// POST /check - Form submit
async fn check_handler(Form(input): Form<PasswordInput>) -> Html<String> {
    let outcome = check_submission(&input.password);
    log_outcome("form", &outcome);
    Html(render_page(Some(&outcome)))
}

/// POST /api/evaluate - Same as the form, as JSON
async fn evaluate_handler(Json(input): Json<PasswordInput>) -> Json<CheckOutcome> {
    let outcome = check_submission(&input.password);
    log_outcome("api", &outcome);
    Json(outcome)
}

/// GET /health
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

fn log_outcome(source: &str, outcome: &CheckOutcome) {
    match outcome {
        CheckOutcome::EmptyInput { .. } => tracing::info!(source, "empty submission"),
        CheckOutcome::Evaluated(report) => tracing::info!(
            source,
            score = report.score.value(),
            strength = %report.strength,
            "password checked"
        ),
    }
}
