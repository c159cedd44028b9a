mod assets;
pub mod page;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::{
    comparison::build_comparison,
    dashboard::{Dashboard, GlobePanel, Selection},
    dataset::TyphoonRecord,
    detail::DetailPanel,
    error::RenderError,
};

pub struct WebServerConfig {
    pub dashboard: Dashboard,
    pub addr: SocketAddr,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub typhoon: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

fn status_for(err: &RenderError) -> StatusCode {
    match err {
        RenderError::UnknownTyphoon(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn router(dashboard: Arc<Dashboard>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/styles.css", get(styles))
        .route("/app.js", get(script))
        .route("/healthz", get(healthz))
        .route("/api/typhoons", get(list_typhoons))
        .route("/api/typhoons/:name", get(typhoon_detail))
        .route("/api/globe", get(globe_figure))
        .route("/api/comparison", get(comparison_figure))
        .layer(TraceLayer::new_for_http())
        .with_state(dashboard)
}

pub async fn run(config: WebServerConfig) -> Result<()> {
    let WebServerConfig { dashboard, addr } = config;
    let router = router(Arc::new(dashboard));

    info!("typhoon dashboard live at http://{addr} (Ctrl+C to stop)");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down typhoon dashboard");
}

/// Full render pass. Any failure replaces the page body with the selector and a single message.
pub async fn index(
    State(dashboard): State<Arc<Dashboard>>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let rendered = dashboard
        .render(query.typhoon.as_deref())
        .and_then(|view| page::render_dashboard(&view));
    match rendered {
        Ok(html) => Html(html),
        Err(err) => {
            error!(error = %err, "dashboard render failed");
            let options = dashboard.options();
            match page::render_failure(&err, &options, query.typhoon.as_deref()) {
                Ok(html) => Html(html),
                Err(page_err) => {
                    error!(error = %page_err, "failure page render failed");
                    Html(page::escape_html(&format!("An error occurred: {err}")))
                }
            }
        }
    }
}

async fn styles() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        assets::STYLES_CSS,
    )
}

async fn script() -> impl IntoResponse {
    (
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        assets::APP_JS,
    )
}

async fn healthz() -> &'static str {
    "ok"
}

pub async fn list_typhoons(State(dashboard): State<Arc<Dashboard>>) -> Json<Vec<TyphoonRecord>> {
    Json(dashboard.dataset().records().to_vec())
}

pub async fn typhoon_detail(
    State(dashboard): State<Arc<Dashboard>>,
    Path(name): Path<String>,
) -> Response {
    match dashboard.dataset().get(&name) {
        Some(record) => Json(DetailPanel::from_record(record)).into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            RenderError::UnknownTyphoon(name).to_string(),
        ),
    }
}

pub async fn globe_figure(
    State(dashboard): State<Arc<Dashboard>>,
    Query(query): Query<PageQuery>,
) -> Response {
    let selection = match Selection::resolve(dashboard.dataset(), query.typhoon.as_deref()) {
        Ok(selection) => selection,
        Err(err) => return error_response(status_for(&err), err.to_string()),
    };
    match dashboard.globe_panel(selection.name()) {
        GlobePanel::Chart { figure } => Json(figure).into_response(),
        GlobePanel::Failed { message } => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, message)
        }
    }
}

pub async fn comparison_figure(State(dashboard): State<Arc<Dashboard>>) -> Response {
    match build_comparison(dashboard.dataset()) {
        Ok(figure) => Json(figure).into_response(),
        Err(err) => {
            error!(error = %err, "comparison chart failed");
            error_response(status_for(&err), err.to_string())
        }
    }
}
