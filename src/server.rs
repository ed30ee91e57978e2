use axum::{Json, Router, http::StatusCode, routing::post};
use crate::data::{RedistributeInput, RedistributeOutput};
use crate::solver;
use log::info;
use std::net::SocketAddr;

async fn redistribute_handler(
    Json(input): Json<RedistributeInput>,
) -> Result<Json<RedistributeOutput>, (StatusCode, String)> {
    match solver::solve_table(&input) {
        Ok(output) => Ok(Json(output)),
        Err(e) => Err((StatusCode::BAD_REQUEST, e.to_string())),
    }
}

pub fn router() -> Router {
    Router::new().route("/v1/rooms/redistribute", post(redistribute_handler))
}

pub async fn run_server(addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, router()).await
}
