use axum::{
    extract::{multipart::MultipartRejection, Extension, Multipart},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{debug, error, instrument};

use super::types::{ErrorDetail, UploadForm};
use crate::rashinban::{
    analyzer::{AnalyzeError, CsvAnalyzer, CsvUpload},
    auth::Principal,
};

/// Multipart field carrying the CSV file.
pub const FILE_FIELD: &str = "file";

#[utoipa::path(
    post,
    path = "/api/analyze_csv",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Analysis result"),
        (status = 400, description = "Missing file", body = String),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDetail),
        (status = 422, description = "File rejected by the analyzer", body = String)
    ),
    security(("bearer" = [])),
    tag = "analysis"
)]
#[instrument(skip(analyzer, multipart))]
pub async fn analyze_csv(
    principal: Principal,
    Extension(analyzer): Extension<Arc<dyn CsvAnalyzer>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let upload = match read_upload(multipart).await {
        Ok(upload) => upload,
        Err(response) => return response,
    };

    debug!(
        bytes = upload.content.len(),
        bypass = principal.is_bypass(),
        "Forwarding upload to analyzer"
    );

    match analyzer.analyze(&upload).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(AnalyzeError::Rejected(message)) => {
            debug!("Analyzer rejected upload: {message}");
            (StatusCode::UNPROCESSABLE_ENTITY, message).into_response()
        }
    }
}

async fn read_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<CsvUpload, Response> {
    let Ok(mut multipart) = multipart else {
        return Err((StatusCode::BAD_REQUEST, "Missing file".to_string()).into_response());
    };

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                error!("Failed to read multipart field: {err}");
                return Err((StatusCode::BAD_REQUEST, "Malformed upload".to_string()).into_response());
            }
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content = field.bytes().await.map_err(|err| {
            error!("Failed to read uploaded file: {err}");
            (StatusCode::BAD_REQUEST, "Malformed upload".to_string()).into_response()
        })?;

        return Ok(CsvUpload {
            filename,
            content: content.to_vec(),
        });
    }

    Err((StatusCode::BAD_REQUEST, "Missing file".to_string()).into_response())
}
