//! The single `/image` endpoint: resolve parameters, lay out the caption,
//! composite and reply with PNG bytes.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use log::{error, info};

use crate::assets::AssetStore;
use crate::error::CaptionError;
use crate::render::{build_overlay, composite_caption, layout_caption, CaptionBox};
use crate::web::api::AppState;

/// Dialogue shown when the caller passes no `text` parameter.
pub const DEFAULT_TEXT: &str = "Hello!";
/// Base font size in pixels when the caller passes no `size` parameter.
pub const DEFAULT_FONT_SIZE: i32 = 28;

/// Validated render parameters, resolved from the raw query string.
/// Constructed per request and discarded after the response.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderRequest {
    pub image_id: i64,
    pub text: String,
    pub name: String,
    pub font_size: i32,
}

impl RenderRequest {
    /// Resolve loosely-typed query parameters with documented defaults.
    ///
    /// `img` and `size` fall back to their defaults when absent, non-numeric
    /// or zero; negative values pass through untouched and fall out of the
    /// arithmetic downstream.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        RenderRequest {
            image_id: resolve_image_id(params.get("img")),
            text: params
                .get("text")
                .cloned()
                .unwrap_or_else(|| DEFAULT_TEXT.to_string()),
            name: params.get("name").cloned().unwrap_or_default(),
            font_size: resolve_font_size(params.get("size")),
        }
    }
}

fn resolve_image_id(raw: Option<&String>) -> i64 {
    match raw.and_then(|v| v.trim().parse::<i64>().ok()) {
        Some(0) | None => 1,
        Some(id) => id,
    }
}

fn resolve_font_size(raw: Option<&String>) -> i32 {
    let Some(size) = raw.and_then(|v| v.trim().parse::<f64>().ok()) else {
        return DEFAULT_FONT_SIZE;
    };
    let floored = size.floor();
    // Non-finite values and floors outside i32 count as non-numeric.
    if !floored.is_finite() || floored < i32::MIN as f64 || floored > i32::MAX as f64 {
        return DEFAULT_FONT_SIZE;
    }
    match floored as i32 {
        0 => DEFAULT_FONT_SIZE,
        size => size,
    }
}

/// Handler for `GET /image?img=<int>&text=<string>&name=<string>&size=<int>`
pub async fn render_image(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, CaptionError> {
    let request = RenderRequest::from_query(&params);

    let path = state.assets.resolve(request.image_id)?;
    let (width, height) = state.assets.dimensions(&path)?;

    info!(
        "Rendering {} ({}x{})",
        AssetStore::file_name(request.image_id),
        width,
        height
    );

    let cbox = CaptionBox::for_image(width, height);
    let lines = layout_caption(&cbox, &request.name, &request.text, request.font_size);
    let overlay = build_overlay(width, height, &cbox, &lines);
    let png = composite_caption(&path, &overlay, state.fontdb.clone())?;

    let headers = [
        (header::CONTENT_TYPE, HeaderValue::from_static("image/png")),
        (
            // Every response is freshly generated; forbid client and
            // intermediary caching.
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ),
    ];
    Ok((headers, Bytes::from(png)).into_response())
}

impl IntoResponse for CaptionError {
    fn into_response(self) -> Response {
        let status = match &self {
            CaptionError::AssetNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!("Request failed: {}", self);
        (status, self.to_string()).into_response()
    }
}
