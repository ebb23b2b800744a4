use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use axum::http::HeaderValue;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod config {
    pub mod env;
    pub mod emailjs;
    pub mod server;
}
mod api {
    pub mod mailer;
    pub mod emailjs;
}
mod handlers {
    pub mod enquiry_dtos;
    pub mod enquiry_handlers;
}
mod models {
    pub mod enquiry_models;
}

use api::emailjs::EmailJsClient;
use api::mailer::EnquiryMailer;
use config::emailjs::EmailJsConfig;
use config::env::process_env;
use config::server::ServerConfig;
use handlers::enquiry_handlers;

pub struct AppState {
    mailer: Arc<dyn EnquiryMailer>,
    recipient: String,
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origin: AllowOrigin = match server.frontend_url.as_deref() {
        Some(url) => match url.parse::<HeaderValue>() {
            Ok(value) => value.into(),
            Err(_) => {
                warn!("FRONTEND_URL '{}' is not a valid origin, allowing any", url);
                Any.into()
            }
        },
        None => Any.into(),
    };

    CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_origin(origin)
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .expose_headers([axum::http::header::CONTENT_TYPE])
}

fn build_router(state: Arc<AppState>, server: &ServerConfig) -> Router {
    let mut app = Router::new()
        .route("/api/health", get(enquiry_handlers::health_check))
        .route("/api/enquiry", post(enquiry_handlers::submit_enquiry));

    // Serve the built landing page when the relay also hosts it. Unknown
    // paths get index.html with a 200.
    if let Some(dir) = &server.static_dir {
        app = app.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        );
    }

    app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
    .layer(cors_layer(server))
    .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server = ServerConfig::from_lookup(process_env)?;
    let emailjs = EmailJsConfig::from_lookup(process_env)?;

    let _guard = server.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    let recipient = emailjs.recipient.clone();
    let mailer = EmailJsClient::new(emailjs)?;

    let state = Arc::new(AppState {
        mailer: Arc::new(mailer),
        recipient,
    });

    let app = build_router(state, &server);

    let listener = TcpListener::bind(server.bind_addr).await?;
    info!("Enquiry relay listening on {}", server.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
