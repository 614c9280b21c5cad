use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use clap::Args;
use skygallery_core::view::{render_page, ImageFilterForm, ImagePage};
use skygallery_core::routes::HEALTH_PATH;
use skygallery_core::{GalleryConfig, PageKind, QueryParams};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use super::{load_config, load_fixture};

#[derive(Args)]
pub struct ServeArgs {
    /// Gallery config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Image page fixture (TOML) served as the result of every search
    #[arg(long)]
    pub fixture: Option<PathBuf>,

    /// Listen address, overrides the config
    #[arg(long)]
    pub addr: Option<String>,
}

struct AppState {
    config: GalleryConfig,
    page: ImagePage,
}

type SharedState = Arc<AppState>;

pub fn run(args: &ServeArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let page = load_fixture(args.fixture.as_deref())?;
    let addr: SocketAddr = args
        .addr
        .as_deref()
        .unwrap_or(&config.addr)
        .parse()
        .context("Invalid listen address")?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    runtime.block_on(serve(addr, Arc::new(AppState { config, page })))
}

async fn serve(addr: SocketAddr, state: SharedState) -> Result<()> {
    let router = build_router(state);
    info!(%addr, "Binding HTTP listener");
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server exited");
    Ok(())
}

fn build_router(state: SharedState) -> Router {
    let routes = state.config.routes.clone();
    let mut router = Router::new().route(HEALTH_PATH, get(health));
    for (_, path) in routes.entries() {
        router = router.route(path, get(images_html));
    }
    router.with_state(state).layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn images_html(State(state): State<SharedState>, uri: Uri) -> Response {
    let path = uri.path();
    let kind = state.config.routes.resolve(path).unwrap_or_else(|| {
        warn!(path, "path matches no route, rendering the plain images page");
        PageKind::Images
    });
    let query = QueryParams::parse(uri.query().unwrap_or(""));
    let form = ImageFilterForm::from_query(&query);

    match render_page(kind, &state.config, path, &query, &form, &state.page) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!(%err, path, "failed to render images page");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}
