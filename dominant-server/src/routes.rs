use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use dominant::{Color, ColorError, ImageUrl, Pipeline, PipelineConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct ApiState {
    pipeline: Pipeline,
}

impl ApiState {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            pipeline: Pipeline::new(config),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ColorQuery {
    url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ColorResponse {
    #[serde(rename = "RGB")]
    pub rgb: Color,
}

pub fn routes(state: ApiState) -> Router {
    Router::new()
        .route("/color", get(handle_color))
        .with_state(state)
}

async fn handle_color(
    State(state): State<ApiState>,
    query: Result<Query<ColorQuery>, QueryRejection>,
) -> Result<Json<ColorResponse>, ApiError> {
    let raw_url = match query {
        Ok(Query(query)) => query.url.unwrap_or_default(),
        Err(rejection) => {
            return Err(ApiError {
                message: rejection.body_text(),
                http_status_code: StatusCode::BAD_REQUEST,
            })
        }
    };

    let url = ImageUrl::parse(&raw_url).map_err(|err| {
        debug!(url = %raw_url, %err, "Rejected color request");
        ColorError::from(err)
    })?;
    debug!(%url, "Received color request");

    // the fetch blocks, keep it off the async workers
    let pipeline = state.pipeline.clone();
    let task_url = url.clone();
    let result = tokio::task::spawn_blocking(move || pipeline.run(&task_url))
        .await
        .map_err(|err| {
            error!(%url, %err, "Color pipeline task failed");
            ApiError::internal("failed to process image")
        })?;

    match result {
        Ok(color) => {
            info!(%url, rgb = %color, "Computed dominant color");
            Ok(Json(ColorResponse { rgb: color }))
        }
        Err(err) => {
            warn!(%url, %err, "Color request failed");
            Err(err.into())
        }
    }
}
