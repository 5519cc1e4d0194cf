use axum::{
    extract::{Path, RawQuery},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;

/// Every route answers with a single-line plain-text body.
pub fn app() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/echo", get(echo_query))
        .route("/agent", get(user_agent))
        .route("/form", post(echo_form))
        .route("/login", post(login))
        .route("/status/{code}", get(status))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

#[derive(Debug, Deserialize)]
pub struct Login {
    pub user: String,
    #[serde(default)]
    pub remember: Option<String>,
}

async fn index() -> &'static str {
    "hello"
}

async fn echo_query(RawQuery(query): RawQuery) -> String {
    query.unwrap_or_default()
}

async fn user_agent(headers: HeaderMap) -> String {
    headers
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn echo_form(body: String) -> String {
    body
}

async fn login(Form(input): Form<Login>) -> String {
    match input.remember {
        Some(flag) => format!("welcome {} (remember={flag})", input.user),
        None => format!("welcome {}", input.user),
    }
}

async fn status(Path(code): Path<u16>) -> Result<(StatusCode, String), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, format!("status {code}")))
}
