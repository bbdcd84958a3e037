//! SMIL translation routes.
//!
//! `GET /{path}/{filename}` translates a file below the configured root
//! directory and resolves clips against that root. `POST /{path}/{filename}`
//! translates the request body and resolves clips against `/{path}`.

use std::path::{Path, PathBuf};

use axum::body::Bytes;
use axum::extract::{self, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{any, get};
use axum::{Extension, Router};

use smilseq_core::TranslationResult;

use crate::server::error::{AppError, Failure};
use crate::server::request_id::RequestId;
use crate::server::AppContext;

pub fn smil_routes() -> Router<AppContext> {
    Router::new().route("/", any(not_found)).route(
        "/{*path}",
        get(translate_file).post(translate_body).fallback(not_found),
    )
}

pub(crate) async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// A request path split into the directory part and the SMIL filename.
#[derive(Debug, PartialEq, Eq)]
struct SmilLocation {
    dir: PathBuf,
    filename: String,
}

impl SmilLocation {
    /// Split on the last `/`. Rejects empty filenames and `..` components.
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim_start_matches('/');
        let (dir, filename) = raw.rsplit_once('/').unwrap_or(("", raw));

        if filename.is_empty() || filename == "." || filename == ".." {
            return None;
        }
        if dir.split('/').any(|part| part == "..") {
            return None;
        }

        Some(Self {
            dir: PathBuf::from(dir),
            filename: filename.to_string(),
        })
    }
}

/// GET /{path}/{filename}: translate a SMIL file from the root directory.
async fn translate_file(
    State(ctx): State<AppContext>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    extract::Path(raw): extract::Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let location = SmilLocation::parse(&raw)
        .ok_or_else(|| {
            AppError::not_found(format!("No SMIL document at /{raw}"))
                .with_request_id(request_id.clone())
        })?;

    let root_dir = ctx.config.root_dir.clone();
    let smil_file = root_dir.join(&location.dir).join(&location.filename);
    tracing::debug!("SMIL file full path found {}", smil_file.display());

    let result = run_translation(&ctx, move || {
        smilseq_core::translate_file(&smil_file, &root_dir)
    })
    .await
    .map_err(|e| e.with_request_id(request_id.clone()))?;

    json_response(&result).map_err(|e| e.with_request_id(request_id))
}

/// POST /{path}/{filename}: translate a SMIL document sent as the body.
async fn translate_body(
    State(ctx): State<AppContext>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    extract::Path(raw): extract::Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let location = SmilLocation::parse(&raw)
        .ok_or_else(|| {
            AppError::not_found(format!("No SMIL document at /{raw}"))
                .with_request_id(request_id.clone())
        })?;

    tracing::info!(
        "Received SMIL via POST path {} request {} bytes",
        location.dir.join(&location.filename).display(),
        body.len()
    );

    if body.is_empty() {
        return Err(AppError::not_found("No SMIL document in request body")
            .with_request_id(request_id));
    }

    let base_dir = Path::new("/").join(&location.dir);
    let result = run_translation(&ctx, move || smilseq_core::translate_bytes(&body, &base_dir))
        .await
        .map_err(|e| e.with_request_id(request_id.clone()))?;

    json_response(&result).map_err(|e| e.with_request_id(request_id))
}

/// Run a translation on the blocking pool, bounded by the configured deadline.
async fn run_translation<F>(
    ctx: &AppContext,
    translate: F,
) -> Result<TranslationResult, AppError>
where
    F: FnOnce() -> smilseq_core::Result<TranslationResult> + Send + 'static,
{
    let task = tokio::task::spawn_blocking(translate);

    let joined = match ctx.config.request_timeout() {
        Some(limit) => tokio::time::timeout(limit, task)
            .await
            .map_err(|_| AppError::new(Failure::Timeout(limit)))?,
        None => task.await,
    };

    let result = joined.map_err(|e| {
        smilseq_core::Error::Internal(format!("translation task failed: {e}"))
    })??;

    Ok(result)
}

fn json_response(result: &TranslationResult) -> Result<impl IntoResponse, AppError> {
    let body = serde_json::to_string(result)
        .map_err(|e| smilseq_core::Error::Internal(format!("JSON encoding failed: {e}")))?;
    tracing::debug!("JSON prepared: {body}");

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
